//! FitFuel - Personal workout tracker for the terminal.
//!
//! FitFuel records named workouts with a category and optional notes,
//! supports searching, filtering, editing, and deleting entries, and
//! reports summary statistics. Everything persists to a local key-value
//! store under `~/.fitfuel`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`query`] - Pure filtering and statistics over a collection snapshot
//! - [`store`] - Workout collection ownership and write-through persistence
//! - [`ui`] - Terminal output behind a mockable trait
//!
//! # Example
//!
//! ```
//! use fitfuel::query;
//! use fitfuel::store::{MemoryBackend, WorkoutStore};
//!
//! let mut store = WorkoutStore::initialize(Box::new(MemoryBackend::new()));
//! store.create("Leg day", "strength", "heavy squats").unwrap();
//!
//! let stats = query::compute_stats(store.list());
//! assert_eq!(stats.total, 1);
//! assert_eq!(stats.top_category, "strength");
//! ```

pub mod cli;
pub mod error;
pub mod query;
pub mod store;
pub mod ui;

pub use error::{FitfuelError, Result};
