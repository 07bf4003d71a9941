//! Collection filtering.

use crate::store::WorkoutRecord;

/// Sentinel category meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Filter a collection snapshot by search text and category.
///
/// The query is trimmed and lowercased; a record matches the text criterion
/// when the query is empty or its lowercased name or notes contain it. The
/// category criterion is an exact, case-sensitive match unless `category` is
/// [`ALL_CATEGORIES`]. Input order is preserved. Pure: the collection is
/// never touched.
pub fn filter<'a>(
    workouts: &'a [WorkoutRecord],
    query: &str,
    category: &str,
) -> Vec<&'a WorkoutRecord> {
    let query = query.trim().to_lowercase();

    workouts
        .iter()
        .filter(|w| {
            let text_ok = query.is_empty()
                || w.name.to_lowercase().contains(&query)
                || (w.has_notes() && w.notes.to_lowercase().contains(&query));

            let category_ok = category == ALL_CATEGORIES || w.category == category;

            text_ok && category_ok
        })
        .collect()
}
