//! List command implementation.
//!
//! The `workflow-factory list` command lists workflows and their steps.

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::factory::{WorkflowDescriptor, WorkflowKind};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let workflows: Vec<WorkflowDescriptor> = WorkflowKind::ALL
            .iter()
            .map(|kind| WorkflowDescriptor::from_factory(kind.factory().as_ref()))
            .collect();

        if self.args.json {
            ui.data(&serde_json::to_string_pretty(&workflows)?)?;
            return Ok(CommandResult::success());
        }

        ui.message("Workflows:");
        for workflow in &workflows {
            ui.message(&format!(
                "  {}: {}",
                workflow.name,
                workflow.steps.join(" → ")
            ));
            ui.message(&format!("    {}", workflow.title));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorkflowError;
    use crate::ui::{MockUI, OutputMode};

    /// A UI whose data channel always fails to write.
    struct ClosedPipeUI;

    impl UserInterface for ClosedPipeUI {
        fn output_mode(&self) -> OutputMode {
            OutputMode::Normal
        }

        fn message(&mut self, _msg: &str) {}

        fn success(&mut self, _msg: &str) {}

        fn error(&mut self, _msg: &str) {}

        fn show_header(&mut self, _title: &str) {}

        fn data(&mut self, _content: &str) -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed").into())
        }
    }

    #[test]
    fn lists_every_workflow_with_steps() {
        let cmd = ListCommand::new(ListArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("order: validate_order → process_payment → ship_order"));
        assert!(ui.has_message("invoice: generate_invoice → send_invoice"));
        assert!(ui.has_message("custom: prepare_special_order → notify_customer"));
        assert!(ui.has_message("Custom Workflow"));
    }

    #[test]
    fn json_output_is_parseable() {
        let cmd = ListCommand::new(ListArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.data_written()[0]).unwrap();
        let workflows = value.as_array().unwrap();
        assert_eq!(workflows.len(), 3);
        assert_eq!(workflows[1]["name"], "invoice");
        assert_eq!(workflows[1]["title"], "Invoice Processing Workflow");
        assert_eq!(
            workflows[1]["steps"],
            serde_json::json!(["generate_invoice", "send_invoice"])
        );
    }

    #[test]
    fn json_output_survives_quiet_mode() {
        let cmd = ListCommand::new(ListArgs { json: true });
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.messages().is_empty());
        let value: serde_json::Value = serde_json::from_str(&ui.data_written()[0]).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
    }

    #[test]
    fn json_write_failure_is_an_io_error() {
        let cmd = ListCommand::new(ListArgs { json: true });
        let mut ui = ClosedPipeUI;

        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(matches!(err, WorkflowError::Io(_)));
    }
}
