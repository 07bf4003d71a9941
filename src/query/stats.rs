//! Aggregate statistics over the workout collection.

use chrono::{DateTime, Utc};

use crate::store::WorkoutRecord;

/// Sentinel shown when the collection holds no data.
pub const NO_DATA: &str = "—";

/// Summary statistics for the full (unfiltered) collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutStats {
    /// Total number of logged workouts.
    pub total: usize,

    /// Category with the highest occurrence count, ties broken by
    /// first-encountered order scanning the collection.
    pub top_category: String,

    /// Formatted date of the most recent workout (the first record, given
    /// the newest-first order).
    pub last_date: String,
}

/// Compute summary statistics for a collection snapshot.
///
/// Pure: no mutation, no hidden state, never errors. An empty collection
/// yields the [`NO_DATA`] sentinel for both `top_category` and `last_date`.
pub fn compute_stats(workouts: &[WorkoutRecord]) -> WorkoutStats {
    let Some(newest) = workouts.first() else {
        return WorkoutStats {
            total: 0,
            top_category: NO_DATA.to_string(),
            last_date: NO_DATA.to_string(),
        };
    };

    // Counts keep first-seen order so ties resolve deterministically to the
    // category encountered first in collection order.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for w in workouts {
        match counts.iter_mut().find(|(c, _)| *c == w.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((w.category.as_str(), 1)),
        }
    }

    let mut top_category = NO_DATA;
    let mut top_count = 0;
    for &(category, count) in &counts {
        if count > top_count {
            top_category = category;
            top_count = count;
        }
    }

    WorkoutStats {
        total: workouts.len(),
        top_category: top_category.to_string(),
        last_date: format_date(newest.created_at),
    }
}

/// Format a timestamp as a calendar date.
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}
