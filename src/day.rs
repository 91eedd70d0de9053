//! Per-day state machine.
//!
//! A `WorkoutDay` is rebuilt from the store on every mount. Each transition
//! that changes persisted truth writes to the store before it updates the
//! in-memory copy, so the durable state is never behind what was rendered.

use crate::config::ToggleMode;
use crate::error::{Error, Result};
use crate::keys::{self, DayField};
use crate::lock;
use crate::progress;
use crate::storage::{self, KeyValueStore};
use crate::types::{CompletionSet, DayContent, SubActivitySet, Toggle};

#[derive(Clone, Debug, PartialEq)]
pub struct WorkoutDay {
    key: String,
    locked: bool,
    open: bool,
    started: bool,
    completed: bool,
    exercises: CompletionSet,
    sub_activities: SubActivitySet,
}

impl WorkoutDay {
    /// Rehydrates a day from the store.
    ///
    /// The first day auto-opens the first time it is seen and records that
    /// it was started.
    pub fn mount<S: KeyValueStore + ?Sized>(store: &S, content: &DayContent) -> Self {
        let key = content.key.clone();
        let locked = lock::is_day_locked(store, &key);
        let mut started = storage::is_flag_set(store, &key, DayField::Started);
        let completed = storage::is_flag_set(store, &key, DayField::Completed);

        let mut exercises = storage::load_completed_exercises(store, &key).unwrap_or_else(|e| {
            log::warn!("{}; starting {} with no completed exercises", e, key);
            CompletionSet::new()
        });
        let known: Vec<String> = content.exercise_ids().collect();
        let before = exercises.len();
        exercises.retain(|id| known.contains(id));
        if exercises.len() != before {
            log::debug!("{}: dropped {} unknown exercise ids", key, before - exercises.len());
        }

        let sub_activities = storage::load_sub_activities(store, &key).unwrap_or_else(|e| {
            log::warn!("{}; starting {} with no completed sub-activities", e, key);
            SubActivitySet::new()
        });

        let mut open = false;
        if !locked && keys::is_first_day(&key) && !started {
            storage::set_flag(store, &key, DayField::Started);
            started = true;
            open = true;
        }

        let mut day = Self {
            key,
            locked,
            open,
            started,
            completed,
            exercises,
            sub_activities,
        };
        // Leftover state on a day that is still gated must not unlock the next one
        if !day.locked {
            day.check_completion(store, content);
        }
        log::debug!(
            "mounted {} (locked: {}, open: {}, done: {}/{})",
            day.key,
            day.locked,
            day.open,
            day.exercises.len(),
            progress::get_total_exercises(&content.sections)
        );
        day
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn completed_exercises(&self) -> &CompletionSet {
        &self.exercises
    }

    pub fn sub_activities(&self) -> &SubActivitySet {
        &self.sub_activities
    }

    pub fn is_exercise_completed(&self, section: &str, exercise: &str) -> bool {
        self.exercises.contains(&keys::composite_id(section, exercise))
    }

    pub fn progress(&self, content: &DayContent) -> f64 {
        progress::calculate_progress(
            self.exercises.len(),
            progress::get_total_exercises(&content.sections),
        )
    }

    /// First exercise, in display order, that is not done yet.
    pub fn current_exercise(&self, content: &DayContent) -> Option<String> {
        content.exercise_ids().find(|id| !self.exercises.contains(id))
    }

    /// Header click. Locked days stay closed; otherwise open and closed alternate.
    ///
    /// Returns the resulting open state.
    pub fn toggle_open<S: KeyValueStore + ?Sized>(&mut self, store: &S) -> bool {
        if self.locked {
            log::debug!("{} is locked, ignoring open toggle", self.key);
            return false;
        }
        if self.open {
            self.open = false;
        } else {
            self.open_unlocked(store);
        }
        self.open
    }

    /// Opens the day if it is unlocked, recording the first start.
    pub fn open_unlocked<S: KeyValueStore + ?Sized>(&mut self, store: &S) {
        if self.locked || self.open {
            return;
        }
        if !self.started {
            storage::set_flag(store, &self.key, DayField::Started);
            self.started = true;
        }
        self.open = true;
    }

    pub fn toggle_exercise<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &S,
        content: &DayContent,
        mode: ToggleMode,
        section: &str,
        exercise: &str,
    ) -> Result<Toggle> {
        if content.exercise(section, exercise).is_none() {
            return Err(Error::UnknownExercise {
                day: self.key.clone(),
                exercise: keys::composite_id(section, exercise),
            });
        }
        if self.locked {
            log::debug!("{} is locked, ignoring exercise toggle", self.key);
            return Ok(Toggle::Ignored);
        }

        let id = keys::composite_id(section, exercise);
        let mut next = self.exercises.clone();
        let toggle = match mode {
            ToggleMode::Free => {
                if next.toggle(&id) {
                    Toggle::Checked
                } else {
                    Toggle::Unchecked
                }
            }
            ToggleMode::Sequential => {
                if self.current_exercise(content).as_deref() != Some(id.as_str()) {
                    log::debug!("{}: {} is not the current exercise", self.key, id);
                    return Ok(Toggle::Ignored);
                }
                next.insert(id.clone());
                Toggle::Checked
            }
        };

        storage::save_completed_exercises(store, &self.key, &next);
        self.exercises = next;
        log::debug!("{}: {} {:?}", self.key, id, toggle);

        self.check_completion(store, content);
        Ok(toggle)
    }

    pub fn toggle_sub_activity<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &S,
        content: &DayContent,
        exercise_id: &str,
        sub_id: &str,
    ) -> Result<Toggle> {
        let Some(exercise) = content.exercise_by_id(exercise_id) else {
            return Err(Error::UnknownExercise {
                day: self.key.clone(),
                exercise: exercise_id.to_string(),
            });
        };
        if !exercise.has_sub_activity(sub_id) {
            return Err(Error::UnknownSubActivity {
                exercise: exercise_id.to_string(),
                sub_activity: sub_id.to_string(),
            });
        }
        if self.locked {
            return Ok(Toggle::Ignored);
        }

        let mut next = self.sub_activities.clone();
        let toggle = if next.toggle(exercise_id, sub_id) {
            Toggle::Checked
        } else {
            Toggle::Unchecked
        };
        storage::save_sub_activities(store, &self.key, &next);
        self.sub_activities = next;
        Ok(toggle)
    }

    /// Re-reads the lock gate. Unlocking only goes one way until a reset.
    ///
    /// Returns true when this call unlocked the day.
    pub fn refresh_lock<S: KeyValueStore + ?Sized>(&mut self, store: &S) -> bool {
        if self.locked && !lock::is_day_locked(store, &self.key) {
            self.locked = false;
            log::info!("{} unlocked", self.key);
            return true;
        }
        false
    }

    // Marks the day done once every exercise is checked
    fn check_completion<S: KeyValueStore + ?Sized>(&mut self, store: &S, content: &DayContent) {
        let total = progress::get_total_exercises(&content.sections);
        if self.completed || total == 0 || self.exercises.len() != total {
            return;
        }
        storage::set_flag(store, &self.key, DayField::Completed);
        self.completed = true;
        self.open = false;
        log::info!("{} completed", self.key);
    }
}
