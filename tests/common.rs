//! Test helper utilities for hangul-convert-client integration tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use hangul_convert_client::{ClientConfig, ConversionClient};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CONVERT_PATH: &str = "/convert";

/// Configuration pointing at a mock server
pub fn create_test_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    }
}

/// Client pointing at a mock server, with an optional request timeout
pub fn create_test_client(server: &MockServer, timeout: Option<Duration>) -> ConversionClient {
    let config = ClientConfig {
        request_timeout: timeout,
        ..create_test_config(server)
    };
    ConversionClient::from_config(config).expect("test config should be valid")
}

/// Mount a single catch-all response for POST /convert
pub async fn mount_convert_response(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(CONVERT_PATH))
        .respond_with(template)
        .mount(server)
        .await;
}

pub fn converted_body(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({ "converted_text": text }))
}

/// In-memory `tracing` output, installed as the thread's default subscriber
#[derive(Debug, Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock().unwrap())
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
