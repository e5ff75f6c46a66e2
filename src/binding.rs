//! UI binding for the input and output fields
//!
//! The client never touches a rendering surface directly; it reads the
//! input and writes the output through [`UiBinding`].

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Access to the input text field and the output text field
pub trait UiBinding: Send + Sync {
    /// Current value of the input field
    fn input_text(&self) -> String;

    /// Replace the value of the output field
    fn set_output(&self, text: &str);
}

/// In-memory fields, for tests and terminal front ends
#[derive(Debug, Default)]
pub struct MemoryBinding {
    input: Mutex<String>,
    output: Mutex<OutputField>,
}

#[derive(Debug, Default)]
struct OutputField {
    text: String,
    writes: usize,
}

// Poisoning is ignored: the guarded fields are never left half-written.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryBinding {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: Mutex::new(input.into()),
            output: Mutex::new(OutputField::default()),
        }
    }

    pub fn set_input(&self, input: impl Into<String>) {
        *lock(&self.input) = input.into();
    }

    pub fn output(&self) -> String {
        lock(&self.output).text.clone()
    }

    /// Number of times the output field has been written
    pub fn output_writes(&self) -> usize {
        lock(&self.output).writes
    }
}

impl UiBinding for MemoryBinding {
    fn input_text(&self) -> String {
        lock(&self.input).clone()
    }

    fn set_output(&self, text: &str) {
        let mut output = lock(&self.output);
        output.text.clear();
        output.text.push_str(text);
        output.writes += 1;
    }
}
