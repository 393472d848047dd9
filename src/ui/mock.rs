//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Every call is also appended to a
//! single ordered transcript so tests can check interleaving.
//!
//! # Example
//!
//! ```
//! use workflow_factory::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Executing Custom Workflow:");
//! ui.message("Preparing Special Order...");
//!
//! assert_eq!(ui.headers(), ["Executing Custom Workflow:"]);
//! assert!(ui.has_message("Special Order"));
//! ```

use crate::error::Result;

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    data: Vec<String>,
    transcript: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured command data.
    pub fn data_written(&self) -> &[String] {
        &self.data
    }

    /// Get every captured line in the order it was written.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.transcript.push(title.to_string());
    }

    fn data(&mut self, content: &str) -> Result<()> {
        self.data.push(content.to_string());
        self.transcript.push(content.to_string());
        Ok(())
    }
}
