//! Workflow execution.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::factory::WorkflowFactory;
use crate::steps::StepResult;
use crate::ui::UserInterface;

/// Progress events emitted during workflow execution.
#[derive(Debug)]
pub enum RunProgress<'a> {
    /// A step is about to start.
    StepStarting {
        name: &'a str,
        index: usize,
        total: usize,
    },
    /// A step finished.
    StepFinished {
        name: &'a str,
        result: &'a StepResult,
    },
}

/// Result of running a workflow.
#[derive(Debug, Clone)]
pub struct WorkflowResult {
    /// Workflow name.
    pub workflow: String,
    /// Results from each executed step, in execution order.
    pub steps: Vec<StepResult>,
    /// Total duration.
    pub duration: Duration,
    /// Whether all steps succeeded.
    pub success: bool,
}

impl WorkflowResult {
    /// Number of steps that failed.
    pub fn failed_count(&self) -> usize {
        self.steps.iter().filter(|s| !s.success).count()
    }
}

/// Runs the steps produced by a factory, one after another.
///
/// A failing step is reported and skipped; it never aborts the rest of the
/// workflow.
pub struct WorkflowProcessor<'a> {
    factory: &'a dyn WorkflowFactory,
}

impl<'a> WorkflowProcessor<'a> {
    /// Create a processor for the given factory.
    pub fn new(factory: &'a dyn WorkflowFactory) -> Self {
        Self { factory }
    }

    /// Run the workflow.
    pub fn execute_workflow(&self, ui: &mut dyn UserInterface) -> WorkflowResult {
        self.execute_workflow_with_progress(ui, |_| {})
    }

    /// Run the workflow with a progress callback.
    pub fn execute_workflow_with_progress(
        &self,
        ui: &mut dyn UserInterface,
        mut on_progress: impl FnMut(RunProgress<'_>),
    ) -> WorkflowResult {
        let start = Instant::now();
        let workflow = self.factory.name();
        let steps = self.factory.create_steps();
        let total = steps.len();

        let mut results = Vec::with_capacity(total);
        for (index, step) in steps.iter().enumerate() {
            let name = step.name();
            debug!(workflow, step = name, "Executing step {}/{}", index + 1, total);
            on_progress(RunProgress::StepStarting { name, index, total });

            let step_start = Instant::now();
            let result = match step.execute(ui) {
                Ok(()) => StepResult::success(name, step_start.elapsed()),
                Err(e) => {
                    warn!(workflow, step = name, error = %e, "Step failed");
                    ui.error(&format!("Error executing step: {}", e));
                    StepResult::failure(name, step_start.elapsed(), e.to_string())
                }
            };

            on_progress(RunProgress::StepFinished {
                name,
                result: &result,
            });
            results.push(result);
        }

        let success = results.iter().all(|r| r.success);
        let duration = start.elapsed();
        info!(workflow, steps = total, success, "Workflow finished");

        WorkflowResult {
            workflow: workflow.to_string(),
            steps: results,
            duration,
            success,
        }
    }
}
