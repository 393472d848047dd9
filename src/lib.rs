//! Workflow Factory - factory-built workflows executed step by step.
//!
//! Each workflow is an ordered list of steps produced by a factory. A
//! generic processor asks a factory for its steps and runs them in order,
//! reporting a failing step and carrying on with the next one.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`factory`] - Workflow factories
//! - [`runner`] - Workflow processor
//! - [`steps`] - Step trait and the built-in steps
//! - [`ui`] - Output sink abstraction and console output
//!
//! # Example
//!
//! ```
//! use workflow_factory::factory::OrderProcessingFactory;
//! use workflow_factory::runner::WorkflowProcessor;
//! use workflow_factory::ui::MockUI;
//!
//! let factory = OrderProcessingFactory;
//! let processor = WorkflowProcessor::new(&factory);
//! let mut ui = MockUI::new();
//!
//! let result = processor.execute_workflow(&mut ui);
//! assert!(result.success);
//! assert_eq!(ui.messages()[0], "Validating Order...");
//! ```

pub mod cli;
pub mod error;
pub mod factory;
pub mod runner;
pub mod steps;
pub mod ui;

pub use error::{Result, WorkflowError};
