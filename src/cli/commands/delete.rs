//! Delete command implementation.
//!
//! The `fitfuel delete` command removes a single workout by id.

use std::path::{Path, PathBuf};

use crate::cli::args::DeleteArgs;
use crate::error::Result;
use crate::store::{FileBackend, WorkoutStore};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The delete command implementation.
pub struct DeleteCommand {
    data_dir: PathBuf,
    args: DeleteArgs,
}

impl DeleteCommand {
    /// Create a new delete command.
    pub fn new(data_dir: &Path, args: DeleteArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for DeleteCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let backend = FileBackend::new(&self.data_dir);
        let mut store = WorkoutStore::initialize(Box::new(backend));

        if store.remove(&self.args.id)? {
            ui.success("Workout deleted.");
        } else {
            ui.warning(&format!("No workout found with id '{}'", self.args.id));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn seed_one(dir: &Path) -> String {
        let mut store = WorkoutStore::initialize(Box::new(FileBackend::new(dir)));
        store.create("Run", "cardio", "").unwrap().id
    }

    #[test]
    fn delete_removes_the_workout() {
        let temp = TempDir::new().unwrap();
        let id = seed_one(temp.path());

        let args = DeleteArgs { id };
        let mut ui = MockUI::new();

        let result = DeleteCommand::new(temp.path(), args).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.successes().iter().any(|m| m.contains("Workout deleted.")));

        let store = WorkoutStore::initialize(Box::new(FileBackend::new(temp.path())));
        assert!(store.is_empty());
    }

    #[test]
    fn delete_unknown_id_warns_but_succeeds() {
        let temp = TempDir::new().unwrap();
        seed_one(temp.path());

        let args = DeleteArgs {
            id: "missing".to_string(),
        };
        let mut ui = MockUI::new();

        let result = DeleteCommand::new(temp.path(), args).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.warnings().iter().any(|m| m.contains("No workout found")));

        let store = WorkoutStore::initialize(Box::new(FileBackend::new(temp.path())));
        assert_eq!(store.len(), 1);
    }
}
