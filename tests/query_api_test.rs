//! Integration tests for the query/stats API, driven through the store.

use fitfuel::query::{self, ALL_CATEGORIES, NO_DATA};
use fitfuel::store::{MemoryBackend, WorkoutStore};

fn memory_store() -> WorkoutStore {
    WorkoutStore::initialize(Box::new(MemoryBackend::new()))
}

#[test]
fn filter_with_empty_query_and_all_is_identity() {
    let mut store = memory_store();
    store.create("Run", "cardio", "").unwrap();
    store.create("Lift", "strength", "").unwrap();

    let result = query::filter(store.list(), "", ALL_CATEGORIES);

    assert_eq!(result.len(), store.len());
    assert!(result.iter().zip(store.list()).all(|(a, b)| *a == b));
}

#[test]
fn filter_results_all_satisfy_the_predicate() {
    let mut store = memory_store();
    store.create("Run", "cardio", "morning jog").unwrap();
    store.create("Swim", "cardio", "").unwrap();
    store.create("Lift", "strength", "jog warmup").unwrap();

    let result = query::filter(store.list(), "jog", ALL_CATEGORIES);

    // Soundness: every returned record matches.
    assert!(result.iter().all(|w| {
        w.name.to_lowercase().contains("jog") || w.notes.to_lowercase().contains("jog")
    }));
    // Completeness: both jog mentions are present.
    assert_eq!(result.len(), 2);
}

#[test]
fn filter_does_not_mutate_the_collection() {
    let mut store = memory_store();
    store.create("Run", "cardio", "").unwrap();
    let snapshot = store.list().to_vec();

    query::filter(store.list(), "run", "cardio");
    query::filter(store.list(), "run", "cardio");

    assert_eq!(store.list(), snapshot.as_slice());
}

#[test]
fn scenario_single_strength_workout() {
    let mut store = memory_store();
    store.create("Leg day", "strength", "heavy squats").unwrap();

    let stats = query::compute_stats(store.list());

    assert_eq!(store.len(), 1);
    assert_eq!(stats.total, 1);
    assert_eq!(stats.top_category, "strength");
}

#[test]
fn scenario_top_category_and_last_date() {
    let mut store = memory_store();
    store.create("Run", "cardio", "").unwrap();
    store.create("Swim", "cardio", "").unwrap();
    store.create("Lift", "strength", "").unwrap();

    let stats = query::compute_stats(store.list());

    assert_eq!(stats.total, 3);
    assert_eq!(stats.top_category, "cardio");
    // "Lift" was created last and sits at position 0.
    assert_eq!(store.list()[0].name, "Lift");
    assert_eq!(
        stats.last_date,
        query::format_date(store.list()[0].created_at)
    );
}

#[test]
fn scenario_case_insensitive_name_search() {
    let mut store = memory_store();
    store.create("Leg day", "strength", "heavy squats").unwrap();
    store.create("Run", "cardio", "").unwrap();
    store.create("Swim", "cardio", "").unwrap();

    let result = query::filter(store.list(), "leg", ALL_CATEGORIES);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Leg day");
}

#[test]
fn scenario_clear_all_resets_stats_to_sentinels() {
    let mut store = memory_store();
    store.create("Run", "cardio", "").unwrap();
    store.create("Lift", "strength", "").unwrap();

    store.clear_all().unwrap();

    let stats = query::compute_stats(store.list());
    assert_eq!(store.list().len(), 0);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.top_category, NO_DATA);
    assert_eq!(stats.last_date, NO_DATA);
}

#[test]
fn compute_stats_twice_yields_identical_results() {
    let mut store = memory_store();
    store.create("Run", "cardio", "").unwrap();

    let first = query::compute_stats(store.list());
    let second = query::compute_stats(store.list());

    assert_eq!(first, second);
}
