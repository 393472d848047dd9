//! Built-in workflow factories.

use crate::steps::{
    GenerateInvoice, NotifyCustomer, PrepareSpecialOrder, ProcessPayment, SendInvoice, ShipOrder,
    ValidateOrder, WorkflowStep,
};

use super::WorkflowFactory;

/// Builds the order processing workflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderProcessingFactory;

impl WorkflowFactory for OrderProcessingFactory {
    fn name(&self) -> &'static str {
        "order"
    }

    fn title(&self) -> &'static str {
        "Order Processing Workflow"
    }

    fn create_steps(&self) -> Vec<Box<dyn WorkflowStep>> {
        vec![
            Box::new(ValidateOrder),
            Box::new(ProcessPayment),
            Box::new(ShipOrder),
        ]
    }
}

/// Builds the invoice processing workflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceProcessingFactory;

impl WorkflowFactory for InvoiceProcessingFactory {
    fn name(&self) -> &'static str {
        "invoice"
    }

    fn title(&self) -> &'static str {
        "Invoice Processing Workflow"
    }

    fn create_steps(&self) -> Vec<Box<dyn WorkflowStep>> {
        vec![Box::new(GenerateInvoice), Box::new(SendInvoice)]
    }
}

/// Builds the custom workflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomWorkflowFactory;

impl WorkflowFactory for CustomWorkflowFactory {
    fn name(&self) -> &'static str {
        "custom"
    }

    fn title(&self) -> &'static str {
        "Custom Workflow"
    }

    fn create_steps(&self) -> Vec<Box<dyn WorkflowStep>> {
        vec![Box::new(PrepareSpecialOrder), Box::new(NotifyCustomer)]
    }
}
