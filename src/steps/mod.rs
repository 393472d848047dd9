//! Workflow steps.
//!
//! A step is a stateless unit of work with a single operation, [`WorkflowStep::execute`],
//! which writes one descriptive line to the user interface.
//!
//! - [`order`] - ValidateOrder, ProcessPayment, ShipOrder
//! - [`invoice`] - GenerateInvoice, SendInvoice
//! - [`custom`] - PrepareSpecialOrder, NotifyCustomer
//! - [`StepResult`] - Outcome of one step execution
//!
//! # Example
//!
//! ```
//! use workflow_factory::steps::{ShipOrder, WorkflowStep};
//! use workflow_factory::ui::MockUI;
//!
//! let mut ui = MockUI::new();
//! ShipOrder.execute(&mut ui).unwrap();
//! assert_eq!(ui.messages(), ["Shipping Order..."]);
//! ```

pub mod custom;
pub mod invoice;
pub mod order;
pub mod result;

pub use custom::{NotifyCustomer, PrepareSpecialOrder};
pub use invoice::{GenerateInvoice, SendInvoice};
pub use order::{ProcessPayment, ShipOrder, ValidateOrder};
pub use result::{StepResult, StepStatus};

use crate::error::Result;
use crate::ui::UserInterface;

/// A single unit of workflow behavior.
pub trait WorkflowStep {
    /// Stable identifier for this step type (e.g. `validate_order`).
    fn name(&self) -> &'static str;

    /// Perform the step, writing its output to `ui`.
    ///
    /// An `Err` marks this step as failed; it does not stop the workflow.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()>;
}
