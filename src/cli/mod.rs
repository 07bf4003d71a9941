//! Command-line interface for FitFuel.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    AddArgs, ClearArgs, Cli, Commands, CompletionsArgs, DeleteArgs, EditArgs, ListArgs, StatsArgs,
    ThemeArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
