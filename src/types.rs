use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::config::TrackerConfig;
use crate::keys;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPlan {
    pub title: String,
    #[serde(default)]
    pub tip: Option<String>,
    #[serde(default)]
    pub settings: TrackerConfig,
    pub days: Vec<DayContent>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DayContent {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub sets: Option<String>,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub sub_activities: Vec<SubActivity>,
    #[serde(default)]
    pub video_id: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SubActivity {
    pub id: String,
    pub description: String,
}

impl DayContent {
    pub fn exercise(&self, section: &str, exercise: &str) -> Option<&Exercise> {
        self.sections
            .iter()
            .find(|s| s.key == section)?
            .exercises
            .iter()
            .find(|e| e.key == exercise)
    }

    pub fn exercise_by_id(&self, exercise_id: &str) -> Option<&Exercise> {
        self.sections.iter().find_map(|s| {
            s.exercises
                .iter()
                .find(|e| keys::composite_id(&s.key, &e.key) == exercise_id)
        })
    }

    /// Composite ids of every exercise, in display order.
    pub fn exercise_ids(&self) -> impl Iterator<Item = String> + '_ {
        self.sections.iter().flat_map(|s| {
            s.exercises
                .iter()
                .map(move |e| keys::composite_id(&s.key, &e.key))
        })
    }
}

impl Exercise {
    pub fn video_url(&self) -> Option<String> {
        self.video_id
            .as_ref()
            .map(|id| format!("https://www.youtube.com/watch?v={}", id))
    }

    pub fn video_embed_url(&self) -> Option<String> {
        self.video_id
            .as_ref()
            .map(|id| format!("https://www.youtube.com/embed/{}", id))
    }

    pub fn has_sub_activity(&self, id: &str) -> bool {
        self.sub_activities.iter().any(|s| s.id == id)
    }
}

/// Composite ids of the exercises marked done on one day.
///
/// Stored as a JSON array under `{day}_exercises`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CompletionSet(BTreeSet<String>);

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.0.insert(id.into())
    }

    /// Flips membership of `id`. Returns whether it is now present.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.0.remove(id) {
            false
        } else {
            self.0.insert(id.to_string());
            true
        }
    }

    pub fn retain(&mut self, keep: impl FnMut(&String) -> bool) {
        self.0.retain(keep);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Sub-steps marked done, keyed by exercise composite id.
///
/// Stored as a JSON object of arrays under `{day}_subactivities`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SubActivitySet(BTreeMap<String, BTreeSet<String>>);

impl SubActivitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, exercise_id: &str, sub_id: &str) -> bool {
        self.0
            .get(exercise_id)
            .map(|subs| subs.contains(sub_id))
            .unwrap_or(false)
    }

    /// Flips membership of `sub_id` under `exercise_id`. Returns whether it is now present.
    pub fn toggle(&mut self, exercise_id: &str, sub_id: &str) -> bool {
        let subs = self.0.entry(exercise_id.to_string()).or_default();
        let checked = if subs.remove(sub_id) {
            false
        } else {
            subs.insert(sub_id.to_string());
            true
        };
        if subs.is_empty() {
            self.0.remove(exercise_id);
        }
        checked
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What a toggle event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Checked,
    Unchecked,
    /// Dropped: the day is locked, or sequential mode and not the current exercise.
    Ignored,
}
