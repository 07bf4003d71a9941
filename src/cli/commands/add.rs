//! Add command implementation.
//!
//! The `fitfuel add` command logs a new workout.

use std::path::{Path, PathBuf};

use crate::cli::args::AddArgs;
use crate::error::{FitfuelError, Result};
use crate::store::{FileBackend, WorkoutStore};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The add command implementation.
pub struct AddCommand {
    data_dir: PathBuf,
    args: AddArgs,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(data_dir: &Path, args: AddArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for AddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let backend = FileBackend::new(&self.data_dir);
        let mut store = WorkoutStore::initialize(Box::new(backend));

        match store.create(&self.args.name, &self.args.category, &self.args.notes) {
            Ok(record) => {
                ui.success("Workout added.");
                ui.message(&format!(
                    "  {} [{}] id: {}",
                    record.name, record.category, record.id
                ));
                Ok(CommandResult::success())
            }
            Err(e @ FitfuelError::Validation { .. }) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn add_args(name: &str) -> AddArgs {
        AddArgs {
            name: name.to_string(),
            category: "cardio".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn add_logs_a_workout() {
        let temp = TempDir::new().unwrap();
        let cmd = AddCommand::new(temp.path(), add_args("Run"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.successes().iter().any(|m| m.contains("Workout added.")));

        let store = WorkoutStore::initialize(Box::new(FileBackend::new(temp.path())));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].name, "Run");
    }

    #[test]
    fn add_empty_name_fails_without_mutation() {
        let temp = TempDir::new().unwrap();
        let cmd = AddCommand::new(temp.path(), add_args("   "));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert!(ui.has_error("name cannot be empty"));

        let store = WorkoutStore::initialize(Box::new(FileBackend::new(temp.path())));
        assert!(store.is_empty());
    }

    #[test]
    fn add_newest_workout_comes_first() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        AddCommand::new(temp.path(), add_args("Run"))
            .execute(&mut ui)
            .unwrap();
        AddCommand::new(temp.path(), add_args("Swim"))
            .execute(&mut ui)
            .unwrap();

        let store = WorkoutStore::initialize(Box::new(FileBackend::new(temp.path())));
        assert_eq!(store.list()[0].name, "Swim");
        assert_eq!(store.list()[1].name, "Run");
    }
}
