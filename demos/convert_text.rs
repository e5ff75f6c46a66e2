//! Convert text from the command line.
//!
//! Reads the text to convert from the arguments (joined by spaces), sends it
//! to the conversion service and prints whatever ends up in the output field.
//!
//! # Running
//!
//! ```bash
//! export CONVERT_BASE_URL="https://127.0.0.1:443"
//! export CONVERT_ACCEPT_INVALID_CERTS=true   # self-signed local certificate
//! RUST_LOG=hangul_convert_client=debug cargo run --example convert_text -- 大韓民國
//! ```

use hangul_convert_client::{ConversionClient, ConversionOutcome, MemoryBinding};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let input = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    let client = ConversionClient::from_env()?;
    let ui = MemoryBinding::new(input);

    let outcome = client.convert(&ui).await;
    println!("{}", ui.output());

    if outcome == ConversionOutcome::Failed {
        std::process::exit(1);
    }

    Ok(())
}
