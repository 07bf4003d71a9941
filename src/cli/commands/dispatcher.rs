//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ListArgs};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    data_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given data directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Add(args)) => {
                let cmd = super::add::AddCommand::new(&self.data_dir, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(&self.data_dir, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Edit(args)) => {
                let cmd = super::edit::EditCommand::new(&self.data_dir, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Delete(args)) => {
                let cmd = super::delete::DeleteCommand::new(&self.data_dir, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Clear(args)) => {
                let cmd = super::clear::ClearCommand::new(&self.data_dir, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Stats(args)) => {
                let cmd = super::stats::StatsCommand::new(&self.data_dir, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Theme(args)) => {
                let cmd = super::theme::ThemeCommand::new(&self.data_dir, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to showing the workout list
                let cmd = super::list::ListCommand::new(&self.data_dir, ListArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
