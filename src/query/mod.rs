//! Pure derived views over a collection snapshot.
//!
//! Nothing in this module mutates, persists, or errors; every function can
//! be called repeatedly with identical inputs for identical outputs.

pub mod filter;
pub mod stats;

pub use filter::{filter, ALL_CATEGORIES};
pub use stats::{compute_stats, format_date, WorkoutStats, NO_DATA};
