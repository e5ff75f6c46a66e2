//! # hangul-convert-client
//!
//! Client for a remote text conversion service (hanja to hangul).
//!
//! One call reads the text of an input field, POSTs it as JSON to the
//! service's `/convert` endpoint and writes exactly one of three things
//! into the output field:
//!
//! - the converted text
//! - a fixed fallback string, when the service answered without a result
//! - a fixed generic error string, for any transport, status or decode failure
//!
//! ## Example
//!
//! ```rust,no_run
//! use hangul_convert_client::{ClientConfig, ConversionClient, MemoryBinding};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ClientConfig {
//!     base_url: "https://hanja.example.org".to_string(),
//!     ..ClientConfig::default()
//! };
//!
//! let client = ConversionClient::from_config(config)?;
//! let ui = MemoryBinding::new("大韓民國");
//! client.convert(&ui).await;
//! println!("{}", ui.output());
//! # Ok(())
//! # }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod binding;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use binding::{MemoryBinding, UiBinding};
pub use client::ConversionClient;
pub use config::{ClientConfig, OutputMessages};
pub use error::{ConvertError, ConvertResult};
pub use transport::{ConversionTransport, HttpTransport};
pub use types::{ConversionOutcome, ConversionRequest, ConversionResponse};
