//! Clear command implementation.
//!
//! The `fitfuel clear` command deletes every workout. The confirmation
//! prompt lives here, not in the store.

use std::path::{Path, PathBuf};

use crate::cli::args::ClearArgs;
use crate::error::Result;
use crate::store::{FileBackend, WorkoutStore};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The clear command implementation.
pub struct ClearCommand {
    data_dir: PathBuf,
    args: ClearArgs,
}

impl ClearCommand {
    /// Create a new clear command.
    pub fn new(data_dir: &Path, args: ClearArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for ClearCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let backend = FileBackend::new(&self.data_dir);
        let mut store = WorkoutStore::initialize(Box::new(backend));

        if store.is_empty() {
            ui.message("Nothing to clear.");
            return Ok(CommandResult::success());
        }

        let confirmed = self.args.yes || ui.confirm("Clear ALL workouts?")?;
        if !confirmed {
            ui.message("Aborted.");
            return Ok(CommandResult::success());
        }

        store.clear_all()?;
        ui.success("All cleared.");

        Ok(CommandResult::success())
    }
}
