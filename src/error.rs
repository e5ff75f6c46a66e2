//! Error types for conversion requests.
//!
//! [`ConvertError`] covers every way a single conversion round trip can
//! fail. The UI-facing [`ConversionClient`](crate::ConversionClient)
//! collapses all of them into one generic message, but the categorized
//! error is still available from
//! [`ConversionClient::request_conversion`](crate::ConversionClient::request_conversion).
//!
//! # Error Handling Example
//!
//! ```rust,no_run
//! use hangul_convert_client::{ConvertError, error::ErrorCategory};
//!
//! fn handle_error(err: ConvertError) {
//!     match err.category() {
//!         ErrorCategory::Transient => println!("Temporary issue, try again later"),
//!         ErrorCategory::Client => println!("Fix the configuration"),
//!         ErrorCategory::External => println!("Service problem: {}", err),
//!     }
//! }
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

/// High-level categorization of errors for routing and handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The conversion service or the network had an issue.
    External,

    /// The caller made a mistake it can fix (bad configuration).
    Client,

    /// Temporary failures such as timeouts.
    Transient,
}

/// Convenient result type for conversion operations.
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur while talking to the conversion service.
///
/// Use the constructor methods, which log the error at creation:
///
/// ```rust
/// use hangul_convert_client::ConvertError;
///
/// let err = ConvertError::http_status(500);
/// assert!(err.is_transport());
/// ```
///
/// | Variant | Category | Transport |
/// |---------|----------|-----------|
/// | `ConfigurationError` | Client | No |
/// | `RequestFailed` | External | Yes |
/// | `Timeout` | Transient | Yes |
/// | `HttpStatus` | External | Yes |
/// | `ResponseParsingError` | External | No |
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Client configuration is invalid or incomplete.
    #[error("Client configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The HTTP request could not be completed (connection refused, DNS,
    /// body read failure).
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The configured request timeout elapsed.
    #[error("Request timed out after {timeout_seconds}s")]
    Timeout {
        /// The timeout duration that was exceeded.
        timeout_seconds: u64,
    },

    /// The service answered with a non-success status.
    ///
    /// The body of such a response is never interpreted.
    #[error("Conversion service returned HTTP {status}")]
    HttpStatus {
        /// The HTTP status code.
        status: u16,
    },

    /// The service answered 2xx but the body was not a valid conversion
    /// response.
    #[error("Response parsing failed: {message}")]
    ResponseParsingError {
        /// Details about the parsing failure.
        message: String,
    },
}

impl ConvertError {
    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::Timeout { .. } => ErrorCategory::Transient,
            Self::HttpStatus { .. } => ErrorCategory::External,
            Self::ResponseParsingError { .. } => ErrorCategory::External,
        }
    }

    /// Whether this is a transport-level failure: network error, timeout or
    /// non-success status.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::RequestFailed { .. } | Self::Timeout { .. } | Self::HttpStatus { .. }
        )
    }

    /// Convert to a user-friendly message suitable for display.
    ///
    /// Technical details such as status codes are never included.
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { .. } => {
                "Conversion client configuration issue. Please check your settings".to_string()
            }
            Self::RequestFailed { .. } => {
                "Unable to reach the conversion service. Please try again".to_string()
            }
            Self::Timeout { .. } => "Request timed out. Please try again".to_string(),
            Self::HttpStatus { .. } => {
                "The conversion service could not handle the request".to_string()
            }
            Self::ResponseParsingError { .. } => {
                "Received an invalid response from the conversion service".to_string()
            }
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    /// Create a configuration error (logs at ERROR level).
    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Conversion client configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "Conversion request failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn timeout(timeout_seconds: u64) -> Self {
        log_warn!(
            error_type = "timeout",
            timeout_seconds = timeout_seconds,
            "Conversion request timed out"
        );
        Self::Timeout { timeout_seconds }
    }

    pub fn http_status(status: u16) -> Self {
        log_error!(
            error_type = "http_status",
            status = status,
            "Conversion service returned non-success status"
        );
        Self::HttpStatus { status }
    }

    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "Conversion response format invalid"
        );
        Self::ResponseParsingError { message }
    }
}
