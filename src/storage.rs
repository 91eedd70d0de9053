use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::keys::{self, DayField, FLAG_SET, WORKOUT_IN_PROGRESS_KEY};
use crate::types::{CompletionSet, SubActivitySet};

/// Synchronous string key-value store holding the durable copy of day state.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// The browser's localStorage.
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .map(|inner| Self { inner })
            .ok_or(Error::StorageUnavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.inner.set_item(key, value) {
            log::warn!("failed to write {}: {:?}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.inner.remove_item(key) {
            log::warn!("failed to remove {}: {:?}", key, e);
        }
    }
}

/// In-memory store, for tests and for browsers without localStorage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RefCell::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.borrow().clone()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

pub fn is_flag_set<S: KeyValueStore + ?Sized>(store: &S, day: &str, field: DayField) -> bool {
    store.get(&keys::day_key(day, field)).as_deref() == Some(FLAG_SET)
}

pub fn set_flag<S: KeyValueStore + ?Sized>(store: &S, day: &str, field: DayField) {
    store.set(&keys::day_key(day, field), FLAG_SET);
}

pub fn load_completed_exercises<S: KeyValueStore + ?Sized>(
    store: &S,
    day: &str,
) -> Result<CompletionSet> {
    load_json(store, &keys::day_key(day, DayField::Exercises))
}

pub fn save_completed_exercises<S: KeyValueStore + ?Sized>(
    store: &S,
    day: &str,
    exercises: &CompletionSet,
) {
    save_json(store, &keys::day_key(day, DayField::Exercises), exercises);
}

pub fn load_sub_activities<S: KeyValueStore + ?Sized>(
    store: &S,
    day: &str,
) -> Result<SubActivitySet> {
    load_json(store, &keys::day_key(day, DayField::SubActivities))
}

pub fn save_sub_activities<S: KeyValueStore + ?Sized>(
    store: &S,
    day: &str,
    subs: &SubActivitySet,
) {
    save_json(store, &keys::day_key(day, DayField::SubActivities), subs);
}

pub fn is_workout_in_progress<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    store.get(WORKOUT_IN_PROGRESS_KEY).as_deref() == Some(FLAG_SET)
}

pub fn set_workout_in_progress<S: KeyValueStore + ?Sized>(store: &S, in_progress: bool) {
    store.set(WORKOUT_IN_PROGRESS_KEY, if in_progress { "true" } else { "false" });
}

pub fn clear_day<S: KeyValueStore + ?Sized>(store: &S, day: &str) {
    for field in DayField::ALL {
        store.remove(&keys::day_key(day, field));
    }
}

/// Wipes all tracker state for the given days and marks the workout as not running.
pub fn reset_all<'a, S: KeyValueStore + ?Sized>(store: &S, days: impl IntoIterator<Item = &'a str>) {
    set_workout_in_progress(store, false);
    for day in days {
        clear_day(store, day);
    }
}

// Absent key reads as the default value
fn load_json<S, T>(store: &S, key: &str) -> Result<T>
where
    S: KeyValueStore + ?Sized,
    T: serde::de::DeserializeOwned + Default,
{
    match store.get(key) {
        Some(json) => serde_json::from_str(&json).map_err(|source| Error::MalformedState {
            key: key.to_string(),
            source,
        }),
        None => Ok(T::default()),
    }
}

fn save_json<S, T>(store: &S, key: &str, value: &T)
where
    S: KeyValueStore + ?Sized,
    T: serde::Serialize,
{
    match serde_json::to_string(value) {
        Ok(json) => store.set(key, &json),
        Err(e) => log::warn!("failed to serialize {}: {}", key, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_memory_store_basics() {
        let store = MemoryStore::new();
        assert_eq!(store.get("a"), None);
        store.set("a", "1");
        assert_eq!(store.get("a").as_deref(), Some("1"));
        store.remove("a");
        assert!(store.is_empty());
    }

    #[test]
    fn test_flags_require_literal_true() {
        let store = MemoryStore::with_entries([("day1_completed", "TRUE"), ("day2_completed", "true")]);
        assert!(!is_flag_set(&store, "day1", DayField::Completed));
        assert!(is_flag_set(&store, "day2", DayField::Completed));
        assert!(!is_flag_set(&store, "day3", DayField::Completed));

        set_flag(&store, "day3", DayField::Started);
        assert_eq!(store.get("day3_started").as_deref(), Some("true"));
    }

    #[test]
    fn test_completed_exercises_round_trip() {
        let store = MemoryStore::new();
        let exercises: CompletionSet = ["warmup_a", "main_b", "main_c"].into_iter().collect();
        save_completed_exercises(&store, "day1", &exercises);

        let raw = store.get("day1_exercises").unwrap();
        let as_array: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(as_array.len(), 3);

        assert_eq!(load_completed_exercises(&store, "day1").unwrap(), exercises);
    }

    #[test]
    fn test_missing_exercises_load_empty() {
        let store = MemoryStore::new();
        assert!(load_completed_exercises(&store, "day1").unwrap().is_empty());
        assert!(load_sub_activities(&store, "day1").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_exercises_is_an_error() {
        let store = MemoryStore::with_entries([("day1_exercises", "[\"warmup_a\"")]);
        let err = load_completed_exercises(&store, "day1").unwrap_err();
        match err {
            Error::MalformedState { key, .. } => assert_eq!(key, "day1_exercises"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_sub_activities_stored_as_object_of_arrays() {
        let store = MemoryStore::with_entries([(
            "day1_subactivities",
            r#"{"main_a":["s1","s2"],"main_b":["s3"]}"#,
        )]);
        let subs = load_sub_activities(&store, "day1").unwrap();
        assert!(subs.contains("main_a", "s1"));
        assert!(subs.contains("main_a", "s2"));
        assert!(subs.contains("main_b", "s3"));
        assert!(!subs.contains("main_b", "s1"));

        save_sub_activities(&store, "day2", &subs);
        assert_eq!(
            store.get("day2_subactivities").as_deref(),
            Some(r#"{"main_a":["s1","s2"],"main_b":["s3"]}"#)
        );
    }

    #[test]
    fn test_workout_in_progress_flag() {
        let store = MemoryStore::new();
        assert!(!is_workout_in_progress(&store));
        set_workout_in_progress(&store, true);
        assert!(is_workout_in_progress(&store));
        set_workout_in_progress(&store, false);
        assert_eq!(store.get(WORKOUT_IN_PROGRESS_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn test_reset_all_clears_every_day_key() {
        let store = MemoryStore::with_entries([
            ("workoutInProgress", "true"),
            ("day1_started", "true"),
            ("day1_completed", "true"),
            ("day1_exercises", "[]"),
            ("day1_subactivities", "{}"),
            ("day2_started", "true"),
            ("day2_exercises", "[\"warmup_a\"]"),
            ("i18nextLng", "es"),
        ]);

        reset_all(&store, ["day1", "day2", "day3"]);

        let mut expected = HashMap::new();
        expected.insert("workoutInProgress".to_string(), "false".to_string());
        expected.insert("i18nextLng".to_string(), "es".to_string());
        assert_eq!(store.snapshot(), expected);
    }

    #[test]
    fn test_shared_store_through_rc() {
        let store = Rc::new(MemoryStore::new());
        let handle = Rc::clone(&store);
        set_flag(&handle, "day1", DayField::Completed);
        assert!(is_flag_set(&*store, "day1", DayField::Completed));
    }
}
