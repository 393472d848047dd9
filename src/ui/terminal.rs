//! Console UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{OutputMode, Theme, UserInterface};

/// Console UI implementation.
///
/// Messages and headers go to stdout, errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: Theme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors { Theme::new() } else { Theme::plain() };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_header(title)).ok();
        }
    }

    fn data(&mut self, content: &str) -> Result<()> {
        writeln!(self.out, "{}", content)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Create the console UI for the given mode.
pub fn create_ui(mode: OutputMode, colors: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, colors))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet, false);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn create_ui_respects_mode() {
        let ui = create_ui(OutputMode::Verbose, false);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
