//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait, the output sink steps and commands write to
//! - [`TerminalUI`] for console output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use workflow_factory::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Quiet, false);
//! ui.show_header("Executing Order Processing Workflow:");
//! ui.success("Workflow complete");
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a workflow header.
    fn show_header(&mut self, title: &str);

    /// Write data a command was asked to produce (e.g. JSON).
    ///
    /// Written regardless of output mode; write failures are returned.
    fn data(&mut self, content: &str) -> Result<()>;
}
