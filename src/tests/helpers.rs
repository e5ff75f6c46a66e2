//! Test helper utilities shared across unit test modules
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

#![allow(dead_code)]

use crate::config::OutputMessages;
use crate::error::{ConvertError, ConvertResult};
use crate::transport::ConversionTransport;
use crate::types::{ConversionRequest, ConversionResponse};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// What a [`StubTransport`] answers with
#[derive(Debug, Clone)]
pub enum StubReply {
    Response(ConversionResponse),
    Status(u16),
    Unreachable,
    Timeout,
    MalformedBody,
}

impl StubReply {
    pub fn converted(text: &str) -> Self {
        Self::Response(ConversionResponse {
            converted_text: Some(text.to_string()),
        })
    }

    pub fn empty() -> Self {
        Self::Response(ConversionResponse::default())
    }
}

/// Transport that answers every request with a scripted reply and records
/// what it was sent
#[derive(Debug)]
pub struct StubTransport {
    reply: StubReply,
    calls: AtomicUsize,
    sent: Mutex<Vec<ConversionRequest>>,
}

impl StubTransport {
    pub fn new(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<ConversionRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConversionTransport for StubTransport {
    async fn send(&self, request: &ConversionRequest) -> ConvertResult<ConversionResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(request.clone());

        match &self.reply {
            StubReply::Response(response) => Ok(response.clone()),
            StubReply::Status(status) => Err(ConvertError::http_status(*status)),
            StubReply::Unreachable => Err(ConvertError::request_failed(
                "connection refused",
                None,
            )),
            StubReply::Timeout => Err(ConvertError::timeout(5)),
            StubReply::MalformedBody => Err(ConvertError::response_parsing_error(
                "expected value at line 1 column 1",
            )),
        }
    }

    fn endpoint(&self) -> &str {
        "stub://convert"
    }
}

pub fn test_messages() -> OutputMessages {
    OutputMessages {
        fallback: "conversion failed".to_string(),
        generic_error: "error occurred".to_string(),
    }
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
