//! Edit command implementation.
//!
//! The `fitfuel edit` command changes the name, category, or notes of an
//! existing workout. Omitted fields keep their current values; the id and
//! creation time never change.

use std::path::{Path, PathBuf};

use crate::cli::args::EditArgs;
use crate::error::{FitfuelError, Result};
use crate::store::{FileBackend, WorkoutStore};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The edit command implementation.
pub struct EditCommand {
    data_dir: PathBuf,
    args: EditArgs,
}

impl EditCommand {
    /// Create a new edit command.
    pub fn new(data_dir: &Path, args: EditArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for EditCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let backend = FileBackend::new(&self.data_dir);
        let mut store = WorkoutStore::initialize(Box::new(backend));

        let Some(current) = store.list().iter().find(|w| w.id == self.args.id).cloned() else {
            ui.error(&format!("No workout found with id '{}'", self.args.id));
            return Ok(CommandResult::failure(1));
        };

        let name = self.args.name.as_deref().unwrap_or(&current.name);
        let category = self.args.category.as_deref().unwrap_or(&current.category);
        let notes = self.args.notes.as_deref().unwrap_or(&current.notes);

        match store.update(&self.args.id, name, category, notes) {
            Ok(_) => {
                ui.success("Workout updated.");
                Ok(CommandResult::success())
            }
            Err(e @ (FitfuelError::Validation { .. } | FitfuelError::NotFound { .. })) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
