//! Step execution results.

use std::time::Duration;

/// Final status of an executed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Step completed successfully.
    Completed,

    /// Step returned an error.
    Failed,
}

impl StepStatus {
    /// Get a display character for this status.
    pub fn display_char(&self) -> char {
        match self {
            StepStatus::Completed => '✓',
            StepStatus::Failed => '✗',
        }
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StepStatus::Completed => "completed",
            StepStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// Result of executing a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// Step name.
    pub name: String,

    /// Whether the step succeeded.
    pub success: bool,

    /// Execution duration.
    pub duration: Duration,

    /// Error message (if failed).
    pub error: Option<String>,
}

impl StepResult {
    /// Create a success result.
    pub fn success(name: &str, duration: Duration) -> Self {
        Self {
            name: name.to_string(),
            success: true,
            duration,
            error: None,
        }
    }

    /// Create a failure result.
    pub fn failure(name: &str, duration: Duration, error: String) -> Self {
        Self {
            name: name.to_string(),
            success: false,
            duration,
            error: Some(error),
        }
    }

    /// Get the status of this result.
    pub fn status(&self) -> StepStatus {
        if self.success {
            StepStatus::Completed
        } else {
            StepStatus::Failed
        }
    }

    /// Generate a summary line for display.
    pub fn summary_line(&self) -> String {
        let status = self.status();
        match status {
            StepStatus::Completed => format!(
                "{} {} ({})",
                status.display_char(),
                self.name,
                format_duration(self.duration)
            ),
            StepStatus::Failed => {
                let error = self.error.as_deref().unwrap_or("unknown error");
                format!("{} {} - {}", status.display_char(), self.name, error)
            }
        }
    }
}

/// Format a duration for display.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs == 0 {
        format!("{}ms", millis)
    } else if secs < 60 {
        format!("{}.{}s", secs, millis / 100)
    } else {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    }
}
