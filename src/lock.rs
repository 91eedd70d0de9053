use crate::keys::{self, DayField};
use crate::storage::{self, KeyValueStore};

/// Whether `day_key` is still gated behind its predecessor.
///
/// Days with ordinal 0 or 1 are always open. Day N opens once
/// `day{N-1}_completed` holds the literal `"true"`. A key with no
/// numeric ordinal stays locked.
pub fn is_day_locked<S: KeyValueStore + ?Sized>(store: &S, day_key: &str) -> bool {
    let Some(ordinal) = keys::parse_ordinal(day_key) else {
        log::warn!("day key {:?} has no numeric ordinal, keeping it locked", day_key);
        return true;
    };
    if ordinal <= 1 {
        return false;
    }
    let previous = keys::day_key_for(ordinal - 1);
    !storage::is_flag_set(store, &previous, DayField::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_first_day_never_locked() {
        assert!(!is_day_locked(&MemoryStore::new(), "day1"));
        let store = MemoryStore::with_entries([("day0_completed", "false"), ("day1_completed", "nope")]);
        assert!(!is_day_locked(&store, "day1"));
    }

    #[test]
    fn test_day_zero_unlocked() {
        assert!(!is_day_locked(&MemoryStore::new(), "day0"));
    }

    #[test]
    fn test_unlocked_when_previous_completed() {
        let store = MemoryStore::with_entries([("day1_completed", "true")]);
        assert!(!is_day_locked(&store, "day2"));
    }

    #[test]
    fn test_locked_when_previous_not_completed() {
        assert!(is_day_locked(&MemoryStore::new(), "day3"));

        let store = MemoryStore::with_entries([("day2_completed", "True")]);
        assert!(is_day_locked(&store, "day3"));

        // Only the direct predecessor counts
        let store = MemoryStore::with_entries([("day1_completed", "true")]);
        assert!(is_day_locked(&store, "day3"));
    }

    #[test]
    fn test_multi_digit_ordinal() {
        let store = MemoryStore::with_entries([("day9_completed", "true")]);
        assert!(!is_day_locked(&store, "day10"));
        assert!(is_day_locked(&store, "day11"));
    }

    #[test]
    fn test_key_without_ordinal_is_locked() {
        let store = MemoryStore::with_entries([("dayNaN_completed", "true")]);
        assert!(is_day_locked(&store, "rest"));
        assert!(is_day_locked(&store, "dayNaN"));
    }
}
