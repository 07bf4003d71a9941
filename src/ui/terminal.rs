//! Interactive terminal UI.

use console::style;
use dialoguer::Confirm;

use crate::error::Result;

use super::{OutputMode, UserInterface};

/// UI implementation for terminal usage.
pub struct TerminalUI {
    mode: OutputMode,
    interactive: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(interactive: bool, mode: OutputMode) -> Self {
        Self { mode, interactive }
    }
}

/// Create the UI for a session.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(interactive, mode))
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{} {}", style("✓").green(), msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{} {}", style("✗").red(), msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", style(title).bold());
        }
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        if !self.interactive {
            return Ok(false);
        }

        Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()
            .map_err(|e| crate::error::FitfuelError::Other(anyhow::anyhow!(e)))
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
