//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show step output plus per-step timing summaries.
    Verbose,
    /// Show headers and step output.
    #[default]
    Normal,
    /// Show nothing except errors.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows per-step summaries.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows headers and step output.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
