#![cfg(not(target_arch = "wasm32"))]

mod common;

use proptest::prelude::*;
use stepwise::progress::calculate_progress;
use stepwise::{CompletionSet, KeyValueStore, MemoryStore, WorkoutTracker};

proptest! {
    #[test]
    fn progress_is_rounded_percentage(total in 1usize..500, seed in 0usize..500) {
        let completed = seed % (total + 1);
        let expected = (100.0 * completed as f64 / total as f64).round();
        let progress = calculate_progress(completed, total);
        prop_assert_eq!(progress, expected);
        prop_assert!((0.0..=100.0).contains(&progress));
    }

    #[test]
    fn double_toggle_restores_completion_set(
        checked in proptest::collection::vec(any::<bool>(), 3),
        target in 0usize..3,
    ) {
        let mut tracker = WorkoutTracker::new(common::plan(), MemoryStore::new());
        for (i, (section, exercise)) in common::DAY1.iter().enumerate() {
            // The target always starts unchecked
            if checked[i] && i != target {
                tracker.toggle_exercise("day1", section, exercise).unwrap();
            }
        }
        let before = tracker.day("day1").unwrap().completed_exercises().clone();
        let stored_before = tracker.store().get("day1_exercises");

        let (section, exercise) = common::DAY1[target];
        tracker.toggle_exercise("day1", section, exercise).unwrap();
        let after_one: CompletionSet =
            serde_json::from_str(&tracker.store().get("day1_exercises").unwrap()).unwrap();
        prop_assert_eq!(&after_one, tracker.day("day1").unwrap().completed_exercises());

        tracker.toggle_exercise("day1", section, exercise).unwrap();
        prop_assert_eq!(tracker.day("day1").unwrap().completed_exercises(), &before);

        let stored_after: CompletionSet =
            serde_json::from_str(&tracker.store().get("day1_exercises").unwrap()).unwrap();
        prop_assert_eq!(&stored_after, &before);
        if let Some(raw) = stored_before {
            let parsed: CompletionSet = serde_json::from_str(&raw).unwrap();
            prop_assert_eq!(parsed, before);
        }
    }

    #[test]
    fn completion_set_round_trips_through_store(ids in proptest::collection::btree_set("[a-z]{1,6}_[a-z]{1,6}", 0..20)) {
        let store = MemoryStore::new();
        let set: CompletionSet = ids.iter().cloned().collect();
        stepwise::storage::save_completed_exercises(&store, "day1", &set);
        let loaded = stepwise::storage::load_completed_exercises(&store, "day1").unwrap();
        prop_assert_eq!(loaded, set);
    }
}
