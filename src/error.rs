//! Error types for workflow operations.
//!
//! This module defines [`WorkflowError`], the error type returned by steps
//! and commands, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Steps return `WorkflowError` to signal failure; the processor reports it
//!   and moves on to the next step
//! - Use `anyhow::Error` (via `WorkflowError::Other`) for ad-hoc failures
//! - Only errors outside the processor reach `main` and change the exit code

use thiserror::Error;

/// Core error type for workflow operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Step execution failed.
    #[error("Step '{step}' failed: {message}")]
    StepFailed { step: String, message: String },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for workflow operations.
pub type Result<T> = std::result::Result<T, WorkflowError>;
