use crate::binding::UiBinding;
use crate::config::{ClientConfig, OutputMessages};
use crate::error::ConvertResult;
use crate::logging::{log_debug, log_error, log_info, log_warn};
use crate::transport::{ConversionTransport, HttpTransport};
use crate::types::{ConversionOutcome, ConversionRequest, ConversionResponse};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info_span, Instrument};
use uuid::Uuid;

/// Client for the conversion service
///
/// Every call is one independent request/response cycle: no retries, no
/// cancellation of earlier in-flight calls. Concurrent calls sharing a
/// binding race and the last one to settle wins the output field.
#[derive(Clone)]
pub struct ConversionClient {
    transport: Arc<dyn ConversionTransport>,
    messages: OutputMessages,
}

impl std::fmt::Debug for ConversionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionClient")
            .field("endpoint", &self.transport.endpoint())
            .field("messages", &self.messages)
            .finish()
    }
}

impl ConversionClient {
    /// Create a client that talks HTTP to the configured endpoint
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::ConfigurationError`](crate::ConvertError::ConfigurationError)
    /// if the configuration fails validation or the HTTP client cannot be built.
    pub fn from_config(config: ClientConfig) -> ConvertResult<Self> {
        let transport = HttpTransport::new(&config)?;

        log_debug!(
            endpoint = %transport.endpoint(),
            "ConversionClient created"
        );

        Ok(Self::with_transport(Arc::new(transport), config.messages))
    }

    /// Create a client using environment variables for configuration
    pub fn from_env() -> ConvertResult<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Create a client over an arbitrary transport
    pub fn with_transport(
        transport: Arc<dyn ConversionTransport>,
        messages: OutputMessages,
    ) -> Self {
        Self {
            transport,
            messages,
        }
    }

    pub fn messages(&self) -> &OutputMessages {
        &self.messages
    }

    /// Convert the binding's input text and write the result to its output
    ///
    /// Reads the input once and writes the output exactly once, after the
    /// request has settled. Never fails: errors are logged and shown as the
    /// generic error message.
    pub async fn convert(&self, ui: &dyn UiBinding) -> ConversionOutcome {
        let text = ui.input_text();
        let outcome = self.convert_text(&text).await;
        ui.set_output(outcome.display_text(&self.messages));
        outcome
    }

    /// Run one conversion cycle for `text` without touching any UI
    ///
    /// Everything logged during the cycle, transport diagnostics included,
    /// happens inside a `convert` span carrying a fresh `request_id`.
    pub async fn convert_text(&self, text: &str) -> ConversionOutcome {
        let span = info_span!(
            "convert",
            request_id = %Uuid::new_v4(),
            endpoint = %self.transport.endpoint()
        );
        self.run_cycle(text).instrument(span).await
    }

    async fn run_cycle(&self, text: &str) -> ConversionOutcome {
        let start_time = Instant::now();

        log_debug!(
            input_chars = text.chars().count(),
            "Sending conversion request"
        );

        match self.request_conversion(text).await {
            Ok(response) => {
                let outcome = ConversionOutcome::from(response);
                if outcome.is_converted() {
                    log_info!(
                        duration_ms = start_time.elapsed().as_millis() as u64,
                        "Conversion succeeded"
                    );
                } else {
                    log_warn!(
                        duration_ms = start_time.elapsed().as_millis() as u64,
                        "Conversion response had no converted_text, showing fallback"
                    );
                }
                outcome
            }
            Err(error) => {
                log_error!(
                    duration_ms = start_time.elapsed().as_millis() as u64,
                    category = ?error.category(),
                    error = %error,
                    "Conversion failed"
                );
                ConversionOutcome::Failed
            }
        }
    }

    /// Send `text` to the service and return the decoded response
    ///
    /// Unlike [`convert_text`](Self::convert_text), failures are returned
    /// with their category intact.
    pub async fn request_conversion(&self, text: &str) -> ConvertResult<ConversionResponse> {
        let request = ConversionRequest::new(text);
        self.transport.send(&request).await
    }
}
