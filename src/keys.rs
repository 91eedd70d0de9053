//! Naming scheme for everything the tracker keeps in the key-value store.
//!
//! All persisted keys are built here so the rest of the crate never
//! formats a storage key by hand.

/// Global flag set by the start/reset control: `"true"` or `"false"`.
pub const WORKOUT_IN_PROGRESS_KEY: &str = "workoutInProgress";

/// Literal stored for a set flag. Anything else, including absence, reads as unset.
pub const FLAG_SET: &str = "true";

const DAY_PREFIX: &str = "day";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DayField {
    Started,
    Completed,
    Exercises,
    SubActivities,
}

impl DayField {
    pub const ALL: [DayField; 4] = [
        DayField::Started,
        DayField::Completed,
        DayField::Exercises,
        DayField::SubActivities,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            DayField::Started => "started",
            DayField::Completed => "completed",
            DayField::Exercises => "exercises",
            DayField::SubActivities => "subactivities",
        }
    }
}

/// `{day}_{field}`, e.g. `day2_completed`.
pub fn day_key(day: &str, field: DayField) -> String {
    format!("{}_{}", day, field.suffix())
}

/// Completion-tracking id of an exercise: `{section}_{exercise}`.
pub fn composite_id(section: &str, exercise: &str) -> String {
    format!("{}_{}", section, exercise)
}

/// Ordinal of a day key, taken from its digits alone ("day12" -> 12).
///
/// Every non-digit is dropped before parsing, so "d1ay2" reads as 12.
/// Returns `None` when no digits remain or the number does not fit a `u32`.
pub fn parse_ordinal(day_key: &str) -> Option<u32> {
    let digits: String = day_key.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

pub fn day_key_for(ordinal: u32) -> String {
    format!("{}{}", DAY_PREFIX, ordinal)
}

/// The day that auto-opens on first visit.
pub fn is_first_day(day_key: &str) -> bool {
    parse_ordinal(day_key) == Some(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_keys_follow_naming_scheme() {
        assert_eq!(day_key("day1", DayField::Started), "day1_started");
        assert_eq!(day_key("day1", DayField::Completed), "day1_completed");
        assert_eq!(day_key("day3", DayField::Exercises), "day3_exercises");
        assert_eq!(day_key("day3", DayField::SubActivities), "day3_subactivities");
    }

    #[test]
    fn test_composite_id() {
        assert_eq!(composite_id("warmup", "jumping_jacks"), "warmup_jumping_jacks");
    }

    #[test]
    fn test_parse_ordinal() {
        assert_eq!(parse_ordinal("day1"), Some(1));
        assert_eq!(parse_ordinal("day10"), Some(10));
        assert_eq!(parse_ordinal("day0"), Some(0));
        assert_eq!(parse_ordinal("d1ay2"), Some(12));
        assert_eq!(parse_ordinal("day"), None);
        assert_eq!(parse_ordinal(""), None);
        assert_eq!(parse_ordinal("day99999999999"), None);
    }

    #[test]
    fn test_first_day() {
        assert!(is_first_day("day1"));
        assert!(is_first_day("day01"));
        assert!(!is_first_day("day0"));
        assert!(!is_first_day("day2"));
        assert!(!is_first_day("rest"));
    }

    #[test]
    fn test_day_key_for() {
        assert_eq!(day_key_for(9), "day9");
    }
}
