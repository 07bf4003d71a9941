//! Error types for FitFuel operations.
//!
//! This module defines [`FitfuelError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `FitfuelError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `FitfuelError::Other`) for unexpected errors
//! - Corrupt persisted data at startup is never an error: the store recovers
//!   to an empty collection and reports it through
//!   [`LoadOutcome`](crate::store::LoadOutcome)

use thiserror::Error;

/// Core error type for FitFuel operations.
#[derive(Debug, Error)]
pub enum FitfuelError {
    /// Invalid user input rejected at the store boundary.
    #[error("Invalid workout: {message}")]
    Validation { message: String },

    /// Update targeted an id that is not in the collection.
    #[error("No workout found with id '{id}'")]
    NotFound { id: String },

    /// Backing store write failed; in-memory state may be ahead of storage.
    #[error("Failed to persist workouts: {message}")]
    Persistence { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for FitFuel operations.
pub type Result<T> = std::result::Result<T, FitfuelError>;
