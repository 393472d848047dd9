//! Order processing steps.

use crate::error::Result;
use crate::ui::UserInterface;

use super::WorkflowStep;

/// Validates the incoming order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateOrder;

impl WorkflowStep for ValidateOrder {
    fn name(&self) -> &'static str {
        "validate_order"
    }

    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.message("Validating Order...");
        Ok(())
    }
}

/// Charges the customer for the order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessPayment;

impl WorkflowStep for ProcessPayment {
    fn name(&self) -> &'static str {
        "process_payment"
    }

    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.message("Processing Payment...");
        Ok(())
    }
}

/// Ships the order to the customer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShipOrder;

impl WorkflowStep for ShipOrder {
    fn name(&self) -> &'static str {
        "ship_order"
    }

    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.message("Shipping Order...");
        Ok(())
    }
}
