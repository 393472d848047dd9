//! Steps for the custom workflow.

use crate::error::Result;
use crate::ui::UserInterface;

use super::WorkflowStep;

/// Prepares a special order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrepareSpecialOrder;

impl WorkflowStep for PrepareSpecialOrder {
    fn name(&self) -> &'static str {
        "prepare_special_order"
    }

    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.message("Preparing Special Order...");
        Ok(())
    }
}

/// Notifies the customer about their order.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotifyCustomer;

impl WorkflowStep for NotifyCustomer {
    fn name(&self) -> &'static str {
        "notify_customer"
    }

    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.message("Notifying Customer...");
        Ok(())
    }
}
