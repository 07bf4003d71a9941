//! Theme command implementation.
//!
//! The `fitfuel theme` command shows or sets the persisted display theme.

use std::path::{Path, PathBuf};

use crate::cli::args::ThemeArgs;
use crate::error::Result;
use crate::store::{load_theme, save_theme, FileBackend, Theme};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The theme command implementation.
pub struct ThemeCommand {
    data_dir: PathBuf,
    args: ThemeArgs,
}

impl ThemeCommand {
    /// Create a new theme command.
    pub fn new(data_dir: &Path, args: ThemeArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for ThemeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut backend = FileBackend::new(&self.data_dir);

        let Some(value) = &self.args.theme else {
            let theme = load_theme(&backend);
            ui.message(&format!("Current theme: {}", theme));
            return Ok(CommandResult::success());
        };

        match value.parse::<Theme>() {
            Ok(theme) => {
                save_theme(&mut backend, theme)?;
                ui.success(&format!("Theme set to {}.", theme));
                Ok(CommandResult::success())
            }
            Err(message) => {
                ui.error(&message);
                Ok(CommandResult::failure(1))
            }
        }
    }
}
