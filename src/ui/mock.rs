//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Confirmation prompts answer with a
//! pre-configured response.
//!
//! # Example
//!
//! ```
//! use fitfuel::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Loading workouts");
//! ui.success("Workout added.");
//!
//! assert!(ui.has_message("Loading workouts"));
//! assert!(ui.successes().contains(&"Workout added.".to_string()));
//! ```

use crate::error::Result;

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows a pre-configured confirm
/// response.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    confirms_shown: Vec<String>,
    confirm_response: bool,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Set the response returned by `confirm`.
    pub fn set_confirm_response(&mut self, response: bool) {
        self.confirm_response = response;
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all confirmation questions that were shown.
    pub fn confirms_shown(&self) -> &[String] {
        &self.confirms_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.confirms_shown.push(question.to_string());
        Ok(self.confirm_response)
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_captures_all_channels() {
        let mut ui = MockUI::new();

        ui.message("a message");
        ui.success("a success");
        ui.warning("a warning");
        ui.error("an error");
        ui.show_header("A Header");

        assert!(ui.has_message("a message"));
        assert_eq!(ui.successes(), ["a success".to_string()]);
        assert_eq!(ui.warnings(), ["a warning".to_string()]);
        assert!(ui.has_error("an error"));
        assert_eq!(ui.headers(), ["A Header".to_string()]);
    }

    #[test]
    fn mock_confirm_uses_configured_response() {
        let mut ui = MockUI::new();
        ui.set_confirm_response(true);

        assert!(ui.confirm("Clear ALL workouts?").unwrap());
        assert_eq!(ui.confirms_shown(), ["Clear ALL workouts?".to_string()]);
    }

    #[test]
    fn mock_confirm_defaults_to_no() {
        let mut ui = MockUI::new();

        assert!(!ui.confirm("Proceed?").unwrap());
    }
}
