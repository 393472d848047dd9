//! Run command implementation.
//!
//! The `workflow-factory run` command executes the selected workflows in
//! order, each under an `Executing <title>:` header.

use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::runner::{RunProgress, WorkflowProcessor, WorkflowResult};
use crate::steps::result::format_duration;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(args: RunArgs) -> Self {
        Self { args }
    }

    fn show_details(
        &self,
        ui: &mut dyn UserInterface,
        title: &str,
        summaries: &[String],
        result: &WorkflowResult,
    ) {
        for line in summaries {
            ui.message(&format!("  {}", line));
        }
        if result.success {
            ui.success(&format!(
                "{} complete ({})",
                title,
                format_duration(result.duration)
            ));
        } else {
            ui.error(&format!(
                "{} finished with {} failed step(s)",
                title,
                result.failed_count()
            ));
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let details = ui.output_mode().shows_details();

        for (i, kind) in self.args.selected().iter().enumerate() {
            let factory = kind.factory();
            let processor = WorkflowProcessor::new(factory.as_ref());

            if i > 0 {
                ui.message("");
            }
            ui.show_header(&format!("Executing {}:", factory.title()));

            // Summaries are buffered; the processor holds `ui` while it runs.
            let mut summaries = Vec::new();
            let result = processor.execute_workflow_with_progress(ui, |event| {
                if let RunProgress::StepFinished { result, .. } = event {
                    if details {
                        summaries.push(result.summary_line());
                    }
                }
            });

            if details {
                self.show_details(ui, factory.title(), &summaries, &result);
            }
        }

        // Step failures are reported by the processor and never fail the run.
        Ok(CommandResult::success())
    }
}
