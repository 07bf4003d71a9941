//! Workout storage and persistence.
//!
//! This module owns the workout collection and its write-through
//! persistence, along with the theme preference that shares the same
//! key-value backend.

pub mod backend;
pub mod theme;
pub mod workouts;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use theme::{load_theme, save_theme, Theme, THEME_KEY};
pub use workouts::{LoadOutcome, WorkoutRecord, WorkoutStore};
