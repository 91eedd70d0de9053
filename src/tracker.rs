use crate::config::TrackerConfig;
use crate::day::WorkoutDay;
use crate::error::{Error, Result};
use crate::lock;
use crate::storage::{self, KeyValueStore};
use crate::types::{Toggle, WorkoutPlan};

/// Every day of a plan plus the store that backs them.
///
/// This is the surface the view layer talks to. Each method handles one user
/// event to completion, including lock recomputation for dependent days.
pub struct WorkoutTracker<S> {
    plan: WorkoutPlan,
    store: S,
    days: Vec<WorkoutDay>,
    in_progress: bool,
}

impl<S: KeyValueStore> WorkoutTracker<S> {
    pub fn new(plan: WorkoutPlan, store: S) -> Self {
        let days = mount_all(&plan, &store);
        let in_progress = storage::is_workout_in_progress(&store);
        Self {
            plan,
            store,
            days,
            in_progress,
        }
    }

    pub fn plan(&self) -> &WorkoutPlan {
        &self.plan
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.plan.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn day(&self, key: &str) -> Option<&WorkoutDay> {
        self.days.iter().find(|d| d.key() == key)
    }

    pub fn is_workout_in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn is_locked(&self, day: &str) -> bool {
        lock::is_day_locked(&self.store, day)
    }

    pub fn get_progress(&self, day: &str) -> Result<f64> {
        let idx = self.position(day)?;
        Ok(self.days[idx].progress(&self.plan.days[idx]))
    }

    pub fn current_exercise(&self, day: &str) -> Result<Option<String>> {
        let idx = self.position(day)?;
        Ok(self.days[idx].current_exercise(&self.plan.days[idx]))
    }

    pub fn toggle_day_open(&mut self, day: &str) -> Result<bool> {
        let idx = self.position(day)?;
        Ok(self.days[idx].toggle_open(&self.store))
    }

    pub fn toggle_exercise(&mut self, day: &str, section: &str, exercise: &str) -> Result<Toggle> {
        let idx = self.position(day)?;
        let mode = self.plan.settings.toggle_mode;
        let state = &mut self.days[idx];
        let was_completed = state.is_completed();

        let toggle = state.toggle_exercise(&self.store, &self.plan.days[idx], mode, section, exercise)?;

        if !was_completed && self.days[idx].is_completed() {
            self.on_day_completed(idx);
        }
        Ok(toggle)
    }

    pub fn toggle_sub_activity(&mut self, day: &str, exercise_id: &str, sub_id: &str) -> Result<Toggle> {
        let idx = self.position(day)?;
        self.days[idx].toggle_sub_activity(&self.store, &self.plan.days[idx], exercise_id, sub_id)
    }

    pub fn start_workout(&mut self) {
        storage::set_workout_in_progress(&self.store, true);
        self.in_progress = true;
        log::info!("workout started");
    }

    /// Clears every persisted key of every day, then remounts all days.
    pub fn reset_workout(&mut self) {
        storage::reset_all(&self.store, self.plan.day_keys());
        self.days = mount_all(&self.plan, &self.store);
        self.in_progress = false;
        log::info!("workout reset");
    }

    /// The start/reset control: resets a running workout, otherwise starts one.
    ///
    /// Returns whether a workout is in progress afterwards.
    pub fn toggle_workout(&mut self) -> bool {
        if self.in_progress {
            self.reset_workout();
        } else {
            self.start_workout();
        }
        self.in_progress
    }

    fn position(&self, day: &str) -> Result<usize> {
        self.days
            .iter()
            .position(|d| d.key() == day)
            .ok_or_else(|| Error::UnknownDay(day.to_string()))
    }

    fn on_day_completed(&mut self, idx: usize) {
        for day in &mut self.days {
            day.refresh_lock(&self.store);
        }
        if self.plan.settings.open_next_on_complete {
            if let Some(next) = self.days.get_mut(idx + 1) {
                next.open_unlocked(&self.store);
            }
        }
    }
}

fn mount_all<S: KeyValueStore + ?Sized>(plan: &WorkoutPlan, store: &S) -> Vec<WorkoutDay> {
    plan.days.iter().map(|d| WorkoutDay::mount(store, d)).collect()
}
