//! Workflow factories.
//!
//! A [`WorkflowFactory`] produces the ordered step list for one workflow.
//! The built-in factories live in [`builtin`]; [`WorkflowKind`] names them
//! for the command line.
//!
//! # Example
//!
//! ```
//! use workflow_factory::factory::{InvoiceProcessingFactory, WorkflowFactory};
//!
//! let names: Vec<_> = InvoiceProcessingFactory
//!     .create_steps()
//!     .iter()
//!     .map(|s| s.name())
//!     .collect();
//! assert_eq!(names, ["generate_invoice", "send_invoice"]);
//! ```

pub mod builtin;

pub use builtin::{CustomWorkflowFactory, InvoiceProcessingFactory, OrderProcessingFactory};

use serde::Serialize;

use crate::steps::WorkflowStep;

/// Produces the steps of a workflow.
pub trait WorkflowFactory {
    /// Short workflow name used on the command line (e.g. `order`).
    fn name(&self) -> &'static str;

    /// Display title (e.g. `Order Processing Workflow`).
    fn title(&self) -> &'static str;

    /// Build a fresh, ordered list of steps.
    fn create_steps(&self) -> Vec<Box<dyn WorkflowStep>>;
}

/// The built-in workflows, in their default run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowKind {
    /// Validate, charge and ship an order.
    Order,
    /// Generate and send an invoice.
    Invoice,
    /// Prepare a special order and notify the customer.
    Custom,
}

impl WorkflowKind {
    /// All workflows in default run order.
    pub const ALL: [WorkflowKind; 3] = [Self::Order, Self::Invoice, Self::Custom];

    /// Construct the factory for this workflow.
    pub fn factory(&self) -> Box<dyn WorkflowFactory> {
        match self {
            Self::Order => Box::new(OrderProcessingFactory),
            Self::Invoice => Box::new(InvoiceProcessingFactory),
            Self::Custom => Box::new(CustomWorkflowFactory),
        }
    }
}

/// Serializable description of a workflow, as shown by `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowDescriptor {
    /// Short workflow name.
    pub name: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Step names in execution order.
    pub steps: Vec<&'static str>,
}

impl WorkflowDescriptor {
    /// Describe the workflow a factory produces.
    pub fn from_factory(factory: &dyn WorkflowFactory) -> Self {
        Self {
            name: factory.name(),
            title: factory.title(),
            steps: factory.create_steps().iter().map(|s| s.name()).collect(),
        }
    }
}
