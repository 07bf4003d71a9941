//! Stats command implementation.
//!
//! The `fitfuel stats` command shows summary statistics over the full
//! collection.

use std::path::{Path, PathBuf};

use crate::cli::args::StatsArgs;
use crate::error::Result;
use crate::query;
use crate::store::{FileBackend, WorkoutStore};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The stats command implementation.
pub struct StatsCommand {
    data_dir: PathBuf,
    args: StatsArgs,
}

impl StatsCommand {
    /// Create a new stats command.
    pub fn new(data_dir: &Path, args: StatsArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }

    /// Get the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the command arguments.
    pub fn args(&self) -> &StatsArgs {
        &self.args
    }
}

impl Command for StatsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let backend = FileBackend::new(&self.data_dir);
        let store = WorkoutStore::initialize(Box::new(backend));

        let stats = query::compute_stats(store.list());

        ui.show_header("Workout Stats");
        ui.message(&format!("Total workouts: {}", stats.total));
        ui.message(&format!("Top category:   {}", stats.top_category));
        ui.message(&format!("Last workout:   {}", stats.last_date));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::NO_DATA;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn stats_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = StatsCommand::new(temp.path(), StatsArgs::default());

        assert_eq!(cmd.data_dir(), temp.path());
    }

    #[test]
    fn stats_empty_store_shows_sentinels() {
        let temp = TempDir::new().unwrap();
        let cmd = StatsCommand::new(temp.path(), StatsArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Total workouts: 0"));
        assert!(ui.has_message(&format!("Top category:   {}", NO_DATA)));
        assert!(ui.has_message(&format!("Last workout:   {}", NO_DATA)));
    }

    #[test]
    fn stats_counts_top_category() {
        let temp = TempDir::new().unwrap();
        {
            let mut store = WorkoutStore::initialize(Box::new(FileBackend::new(temp.path())));
            store.create("Run", "cardio", "").unwrap();
            store.create("Swim", "cardio", "").unwrap();
            store.create("Lift", "strength", "").unwrap();
        }

        let cmd = StatsCommand::new(temp.path(), StatsArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.headers(), ["Workout Stats".to_string()]);
        assert!(ui.has_message("Total workouts: 3"));
        assert!(ui.has_message("Top category:   cardio"));
    }
}
