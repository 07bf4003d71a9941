//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// FitFuel - Personal workout tracker.
#[derive(Debug, Parser)]
#[command(name = "fitfuel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the data directory (overrides default ~/.fitfuel)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log a new workout
    Add(AddArgs),

    /// Show workouts (default if no command specified)
    List(ListArgs),

    /// Edit an existing workout
    Edit(EditArgs),

    /// Delete a workout
    Delete(DeleteArgs),

    /// Delete all workouts
    Clear(ClearArgs),

    /// Show summary statistics
    Stats(StatsArgs),

    /// Show or set the display theme
    Theme(ThemeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AddArgs {
    /// Workout name
    pub name: String,

    /// Workout category (e.g. cardio, strength, mobility)
    #[arg(short, long, default_value = "cardio")]
    pub category: String,

    /// Free-text notes
    #[arg(short, long, default_value = "")]
    pub notes: String,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ListArgs {
    /// Show only workouts whose name or notes contain this text
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Show only workouts in this category ("all" for every category)
    #[arg(short, long, default_value = "all")]
    pub category: String,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: "all".to_string(),
        }
    }
}

/// Arguments for the `edit` command.
///
/// Omitted fields keep their current values.
#[derive(Debug, Clone, clap::Args)]
pub struct EditArgs {
    /// Id of the workout to edit
    pub id: String,

    /// New workout name
    #[arg(long)]
    pub name: Option<String>,

    /// New category
    #[arg(short, long)]
    pub category: Option<String>,

    /// New notes
    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for the `delete` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DeleteArgs {
    /// Id of the workout to delete
    pub id: String,
}

/// Arguments for the `clear` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `stats` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatsArgs {}

/// Arguments for the `theme` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ThemeArgs {
    /// Theme to set (dark or light); omit to show the current theme
    pub theme: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
