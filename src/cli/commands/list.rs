//! List command implementation.
//!
//! The `fitfuel list` command shows the workout collection, optionally
//! filtered by search text and category.

use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::query;
use crate::store::{FileBackend, LoadOutcome, WorkoutRecord, WorkoutStore};
use crate::ui::{format_timestamp, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    data_dir: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(data_dir: &Path, args: ListArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }

    /// Format a single workout entry line.
    fn format_workout_line(workout: &WorkoutRecord) -> String {
        format!(
            "{} [{}] - {} (id: {})",
            workout.name,
            workout.category,
            format_timestamp(workout.created_at),
            workout.id
        )
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let backend = FileBackend::new(&self.data_dir);
        let store = WorkoutStore::initialize(Box::new(backend));

        if store.load_outcome() == LoadOutcome::Recovered {
            ui.warning("Stored workouts were unreadable and have been reset.");
        }

        if store.is_empty() {
            ui.message("No workouts logged yet.");
            return Ok(CommandResult::success());
        }

        let items = query::filter(store.list(), &self.args.search, &self.args.category);

        if items.is_empty() {
            ui.message("No workouts match the current filter.");
            return Ok(CommandResult::success());
        }

        for workout in items {
            ui.message(&Self::format_workout_line(workout));
            if workout.has_notes() {
                ui.message(&format!("    {}", workout.notes));
            }
        }

        Ok(CommandResult::success())
    }
}
