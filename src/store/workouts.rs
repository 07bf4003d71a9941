//! Persistent workout storage.
//!
//! This module provides [`WorkoutStore`], the sole owner of the in-memory
//! workout collection. Every mutation is write-through: the full collection
//! is re-serialized to the backing store before the operation returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FitfuelError, Result};

use super::backend::StorageBackend;

/// One logged workout.
///
/// Serialized field names match the persisted wire format
/// (`id, name, notes, category, createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    /// Opaque unique id, generated at creation, immutable.
    pub id: String,

    /// Display name, non-empty after trimming.
    pub name: String,

    /// Free-text notes; empty string means "no notes".
    #[serde(default)]
    pub notes: String,

    /// Category label. The store treats it as opaque.
    pub category: String,

    /// Creation instant, persisted as integer milliseconds since epoch.
    /// Never changed by edit.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl WorkoutRecord {
    /// Whether this workout carries any notes.
    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}

/// How the persisted collection was read at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No persisted collection existed.
    Empty,
    /// Collection deserialized from storage.
    Loaded,
    /// Persisted data was unreadable and was discarded.
    Recovered,
}

/// Owner of the workout collection.
///
/// The collection is newest-first: new records are prepended. The in-memory
/// collection is the source of truth; the backend is a write-through mirror
/// read once at [`initialize`](WorkoutStore::initialize).
pub struct WorkoutStore {
    workouts: Vec<WorkoutRecord>,
    backend: Box<dyn StorageBackend>,
    load_outcome: LoadOutcome,
}

impl WorkoutStore {
    /// Storage key for the serialized collection.
    pub const STORAGE_KEY: &'static str = "fitfuel_workouts_v2";

    /// Read the persisted collection from the backend.
    ///
    /// Fails open: a missing key yields an empty collection, and unreadable
    /// or corrupt data is discarded in favor of an empty collection rather
    /// than propagating an error. The outcome is reported through
    /// [`load_outcome`](WorkoutStore::load_outcome) so recovery is
    /// observable. Call exactly once, at startup.
    pub fn initialize(backend: Box<dyn StorageBackend>) -> Self {
        let (workouts, load_outcome) = match backend.get(Self::STORAGE_KEY) {
            Ok(None) => (Vec::new(), LoadOutcome::Empty),
            Ok(Some(raw)) => match serde_json::from_str::<Vec<WorkoutRecord>>(&raw) {
                Ok(workouts) => (workouts, LoadOutcome::Loaded),
                Err(e) => {
                    tracing::warn!("Discarding corrupt workout data: {}", e);
                    (Vec::new(), LoadOutcome::Recovered)
                }
            },
            Err(e) => {
                tracing::warn!("Discarding unreadable workout data: {}", e);
                (Vec::new(), LoadOutcome::Recovered)
            }
        };

        tracing::debug!("Loaded {} workout(s)", workouts.len());

        Self {
            workouts,
            backend,
            load_outcome,
        }
    }

    /// How the persisted collection was read at startup.
    pub fn load_outcome(&self) -> LoadOutcome {
        self.load_outcome
    }

    /// Log a new workout.
    ///
    /// `name` must be non-empty after trimming. The new record is prepended
    /// (the collection is newest-first), persisted, and returned.
    pub fn create(&mut self, name: &str, category: &str, notes: &str) -> Result<WorkoutRecord> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FitfuelError::Validation {
                message: "workout name cannot be empty".to_string(),
            });
        }

        // `created_at` is defined as integer milliseconds since epoch (see the
        // `ts_milliseconds` wire format); normalize to that resolution so the
        // in-memory value matches what persistence round-trips.
        let now = DateTime::from_timestamp_millis(Utc::now().timestamp_millis())
            .expect("current time is within representable range");
        let record = WorkoutRecord {
            id: generate_id(now),
            name: name.to_string(),
            notes: notes.trim().to_string(),
            category: category.to_string(),
            created_at: now,
        };

        self.workouts.insert(0, record.clone());
        self.persist()?;

        tracing::debug!("Created workout {}", record.id);
        Ok(record)
    }

    /// Edit an existing workout in place.
    ///
    /// Only name, category, and notes change; id and creation time are
    /// immutable. Unknown ids signal [`FitfuelError::NotFound`], an empty
    /// trimmed name signals [`FitfuelError::Validation`]; neither mutates.
    pub fn update(
        &mut self,
        id: &str,
        name: &str,
        category: &str,
        notes: &str,
    ) -> Result<WorkoutRecord> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FitfuelError::Validation {
                message: "workout name cannot be empty".to_string(),
            });
        }

        let record = self
            .workouts
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| FitfuelError::NotFound { id: id.to_string() })?;

        record.name = name.to_string();
        record.category = category.to_string();
        record.notes = notes.trim().to_string();
        let updated = record.clone();

        self.persist()?;

        tracing::debug!("Updated workout {}", updated.id);
        Ok(updated)
    }

    /// Remove the workout with the given id.
    ///
    /// Absent ids are a no-op, not an error. Returns whether a record was
    /// removed; persists only when one was.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.workouts.len();
        self.workouts.retain(|w| w.id != id);

        if self.workouts.len() == before {
            return Ok(false);
        }

        self.persist()?;
        tracing::debug!("Removed workout {}", id);
        Ok(true)
    }

    /// Empty the collection unconditionally.
    ///
    /// Any confirmation prompt is the caller's concern.
    pub fn clear_all(&mut self) -> Result<()> {
        self.workouts.clear();
        self.persist()?;
        tracing::debug!("Cleared all workouts");
        Ok(())
    }

    /// The collection in canonical newest-first order.
    pub fn list(&self) -> &[WorkoutRecord] {
        &self.workouts
    }

    /// Number of logged workouts.
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Write the full serialized collection through to the backend.
    ///
    /// On failure the in-memory collection has already been mutated; the
    /// caller must treat memory and storage as diverged until the next
    /// successful persist.
    fn persist(&mut self) -> Result<()> {
        let json =
            serde_json::to_string(&self.workouts).map_err(|e| FitfuelError::Persistence {
                message: e.to_string(),
            })?;

        self.backend
            .set(Self::STORAGE_KEY, &json)
            .map_err(|e| FitfuelError::Persistence {
                message: e.to_string(),
            })
    }
}

/// Generate a collision-resistant record id.
///
/// Millisecond timestamp plus a random hex suffix, matching the persisted
/// id format of existing collections.
fn generate_id(now: DateTime<Utc>) -> String {
    format!("{}-{:012x}", now.timestamp_millis(), rand::random::<u64>() >> 16)
}
