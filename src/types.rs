//! Wire types for the conversion endpoint and the outcome of one conversion.

use crate::config::OutputMessages;
use serde::{Deserialize, Serialize};

/// Request body sent to the conversion endpoint: `{"text": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Raw input text. Empty strings are sent as-is.
    pub text: String,
}

impl ConversionRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Success body returned by the conversion endpoint.
///
/// A missing or `null` `converted_text` is not an error; the client shows
/// the fallback message instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ConversionResponse {
    #[serde(default)]
    pub converted_text: Option<String>,
}

/// Terminal state of one conversion cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// The service returned converted text.
    Converted(String),
    /// The service answered successfully without a result.
    Fallback,
    /// Transport, status or decode failure. Details are only logged.
    Failed,
}

impl ConversionOutcome {
    /// Text to place in the output field for this outcome.
    pub fn display_text<'a>(&'a self, messages: &'a OutputMessages) -> &'a str {
        match self {
            Self::Converted(text) => text,
            Self::Fallback => &messages.fallback,
            Self::Failed => &messages.generic_error,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted(_))
    }
}

impl From<ConversionResponse> for ConversionOutcome {
    fn from(response: ConversionResponse) -> Self {
        match response.converted_text {
            Some(text) => Self::Converted(text),
            None => Self::Fallback,
        }
    }
}
