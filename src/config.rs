use crate::error::{ConvertError, ConvertResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default address of the conversion service: the local HTTPS listener that
/// serves `POST /convert`. The plain-HTTP listener only redirects.
pub const DEFAULT_BASE_URL: &str = "https://127.0.0.1:443";

/// Path of the conversion endpoint on the service.
pub const DEFAULT_ENDPOINT_PATH: &str = "/convert";

/// Shown when the service answers successfully without `converted_text`.
pub const DEFAULT_FALLBACK_MESSAGE: &str = "변환 실패";

/// Shown for any transport, status or decode failure.
pub const DEFAULT_ERROR_MESSAGE: &str = "오류 발생: 변환에 실패했습니다.";

/// The two fixed strings a conversion can end in besides the converted text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputMessages {
    pub fallback: String,
    pub generic_error: String,
}

impl Default for OutputMessages {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_FALLBACK_MESSAGE.to_string(),
            generic_error: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Conversion client configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Scheme and authority of the conversion service, e.g. `https://example.org`
    pub base_url: String,
    /// Endpoint path appended to `base_url`
    pub endpoint_path: String,
    /// Optional per-request timeout; `None` leaves it to the transport
    pub request_timeout: Option<Duration>,
    /// Skip TLS certificate verification (self-signed development certificates)
    #[serde(default)]
    pub accept_invalid_certs: bool,
    pub messages: OutputMessages,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            request_timeout: None,
            accept_invalid_certs: false,
            messages: OutputMessages::default(),
        }
    }
}

impl ClientConfig {
    /// Full URL of the conversion endpoint
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint_path
        )
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::ConfigurationError`] if:
    /// - The base URL is empty or not an http(s) URL
    /// - The endpoint path does not start with `/`
    /// - The fallback and generic error messages are identical
    pub fn validate(&self) -> ConvertResult<()> {
        if self.base_url.is_empty() {
            return Err(ConvertError::configuration_error(
                "Conversion service base URL is required",
            ));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConvertError::configuration_error(format!(
                "Base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if !self.endpoint_path.starts_with('/') {
            return Err(ConvertError::configuration_error(format!(
                "Endpoint path must start with '/', got '{}'",
                self.endpoint_path
            )));
        }
        if self.messages.fallback == self.messages.generic_error {
            return Err(ConvertError::configuration_error(
                "Fallback and generic error messages must be distinguishable",
            ));
        }
        Ok(())
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults:
    /// - `CONVERT_BASE_URL`
    /// - `CONVERT_ENDPOINT_PATH`
    /// - `CONVERT_TIMEOUT_SECS`
    /// - `CONVERT_ACCEPT_INVALID_CERTS` (`true`/`1` to enable)
    /// - `CONVERT_FALLBACK_MESSAGE`
    /// - `CONVERT_ERROR_MESSAGE`
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::ConfigurationError`] if `CONVERT_TIMEOUT_SECS`
    /// is not a positive integer or the resulting configuration fails
    /// [`validate`](Self::validate).
    pub fn from_env() -> ConvertResult<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("CONVERT_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(path) = std::env::var("CONVERT_ENDPOINT_PATH") {
            config.endpoint_path = path;
        }
        if let Ok(raw) = std::env::var("CONVERT_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ConvertError::configuration_error(format!(
                        "CONVERT_TIMEOUT_SECS must be a positive integer, got '{raw}'"
                    ))
                })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }
        if let Ok(raw) = std::env::var("CONVERT_ACCEPT_INVALID_CERTS") {
            config.accept_invalid_certs = matches!(raw.trim(), "1" | "true" | "TRUE" | "True");
        }
        if let Ok(fallback) = std::env::var("CONVERT_FALLBACK_MESSAGE") {
            config.messages.fallback = fallback;
        }
        if let Ok(generic_error) = std::env::var("CONVERT_ERROR_MESSAGE") {
            config.messages.generic_error = generic_error;
        }

        config.validate()?;

        log_debug!(
            endpoint = %config.endpoint_url(),
            timeout_seconds = ?config.request_timeout.map(|t| t.as_secs()),
            "Loaded conversion client configuration from environment"
        );

        Ok(config)
    }
}
