//! Transport for the conversion endpoint
//!
//! [`ConversionTransport`] is the seam between the client and the network.
//! [`HttpTransport`] is the production implementation: one JSON POST per
//! call, no retries.

use crate::config::ClientConfig;
use crate::error::{ConvertError, ConvertResult};
use crate::logging::{log_debug, log_warn};
use crate::types::{ConversionRequest, ConversionResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;

/// Sends one conversion request and returns the decoded response
#[async_trait]
pub trait ConversionTransport: Send + Sync {
    /// Execute a single request/response exchange.
    ///
    /// A successful return means the service answered 2xx with a JSON body
    /// that decoded as [`ConversionResponse`]; it may still lack a result.
    async fn send(&self, request: &ConversionRequest) -> ConvertResult<ConversionResponse>;

    /// Endpoint URL for logging and debugging
    fn endpoint(&self) -> &str;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
    headers: HeaderMap,
    request_timeout: Option<Duration>,
}

impl HttpTransport {
    /// Create a transport for the endpoint described by `config`
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::ConfigurationError`] if the configuration is
    /// invalid or the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> ConvertResult<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        if config.accept_invalid_certs {
            log_warn!(
                base_url = %config.base_url,
                "TLS certificate verification disabled for conversion service"
            );
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder.build().map_err(|e| {
            ConvertError::configuration_error(format!("Failed to build HTTP client: {e}"))
        })?;

        let url = config.endpoint_url();
        log_debug!(
            endpoint = %url,
            timeout_seconds = ?config.request_timeout.map(|t| t.as_secs()),
            "HTTP conversion transport initialized"
        );

        Ok(Self {
            client,
            url,
            headers: Self::build_headers(),
            request_timeout: config.request_timeout,
        })
    }

    /// Headers sent with every conversion request
    pub fn build_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    fn map_send_error(&self, error: reqwest::Error) -> ConvertError {
        if error.is_timeout() {
            let timeout_seconds = self.request_timeout.map(|t| t.as_secs()).unwrap_or(0);
            return ConvertError::timeout(timeout_seconds);
        }
        ConvertError::request_failed(
            format!("Request to {} failed: {error}", self.url),
            Some(Box::new(error)),
        )
    }
}

#[async_trait]
impl ConversionTransport for HttpTransport {
    async fn send(&self, request: &ConversionRequest) -> ConvertResult<ConversionResponse> {
        let response = self
            .client
            .post(&self.url)
            .headers(self.headers.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(handle_error_response(response).await);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_send_error(e))?;

        parse_success_body(&body)
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

/// Handle non-success HTTP responses
///
/// The body is read only so it shows up in the diagnostic log.
async fn handle_error_response(response: reqwest::Response) -> ConvertError {
    let status = response.status();
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    log_debug!(
        status = %status,
        error_text = %error_text,
        "Conversion service error response body"
    );

    ConvertError::http_status(status.as_u16())
}

/// Decode a 2xx body into a [`ConversionResponse`]
///
/// Only bytes that are not JSON at all are an error. Any valid JSON without a
/// string `converted_text` member (arrays, scalars, `null`, other types)
/// decodes to an empty response.
pub(crate) fn parse_success_body(body: &[u8]) -> ConvertResult<ConversionResponse> {
    let value = serde_json::from_slice::<Value>(body).map_err(|e| {
        let preview: String = String::from_utf8_lossy(body).chars().take(200).collect();
        ConvertError::response_parsing_error(format!(
            "Invalid conversion response JSON: {e} (body: {preview})"
        ))
    })?;

    let converted_text = match value {
        Value::Object(mut fields) => match fields.remove("converted_text") {
            Some(Value::String(text)) => Some(text),
            _ => None,
        },
        _ => None,
    };

    Ok(ConversionResponse { converted_text })
}
