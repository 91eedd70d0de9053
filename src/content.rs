//! Static workout definitions: which days exist, their sections and exercises.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::keys;
use crate::types::{DayContent, WorkoutPlan};

const DEFAULT_PLAN: &str = include_str!("../content/workout.json");

/// The plan bundled with the app.
pub fn default_plan() -> Result<WorkoutPlan> {
    WorkoutPlan::from_json(DEFAULT_PLAN)
}

impl WorkoutPlan {
    pub fn from_json(json: &str) -> Result<Self> {
        let plan: WorkoutPlan = serde_json::from_str(json).map_err(Error::ContentParse)?;
        plan.validate()?;
        Ok(plan)
    }

    pub fn day(&self, key: &str) -> Option<&DayContent> {
        self.days.iter().find(|d| d.key == key)
    }

    pub fn day_keys(&self) -> impl Iterator<Item = &str> {
        self.days.iter().map(|d| d.key.as_str())
    }

    /// Rejects plans whose keys would collide in storage, or whose days could
    /// never unlock.
    ///
    /// The lock gate reads `day{N-1}_completed`, so days must be keyed
    /// `day1`, `day2`, ... in plan order with no gaps.
    pub fn validate(&self) -> Result<()> {
        let mut day_keys = HashSet::new();
        for (idx, day) in self.days.iter().enumerate() {
            let Some(ordinal) = keys::parse_ordinal(&day.key) else {
                return Err(invalid(format!("day key `{}` has no numeric ordinal", day.key)));
            };
            if !day_keys.insert(day.key.as_str()) {
                return Err(invalid(format!("duplicate day `{}`", day.key)));
            }
            let expected = keys::day_key_for(idx as u32 + 1);
            if ordinal as usize != idx + 1 || day.key != expected {
                return Err(invalid(format!(
                    "day key `{}` at position {} should be `{}`",
                    day.key,
                    idx + 1,
                    expected
                )));
            }
            validate_day(day)?;
        }
        Ok(())
    }
}

fn validate_day(day: &DayContent) -> Result<()> {
    let mut section_keys = HashSet::new();
    let mut exercise_ids = HashSet::new();

    for section in &day.sections {
        if !section_keys.insert(section.key.as_str()) {
            return Err(invalid(format!(
                "duplicate section `{}` in {}",
                section.key, day.key
            )));
        }

        let mut exercise_keys = HashSet::new();
        for exercise in &section.exercises {
            if !exercise_keys.insert(exercise.key.as_str()) {
                return Err(invalid(format!(
                    "duplicate exercise `{}` in {}/{}",
                    exercise.key, day.key, section.key
                )));
            }

            let id = keys::composite_id(&section.key, &exercise.key);
            if !exercise_ids.insert(id.clone()) {
                return Err(invalid(format!("exercise id `{}` is ambiguous in {}", id, day.key)));
            }

            let mut sub_ids = HashSet::new();
            for sub in &exercise.sub_activities {
                if !sub_ids.insert(sub.id.as_str()) {
                    return Err(invalid(format!(
                        "duplicate sub-activity `{}` in {}",
                        sub.id, id
                    )));
                }
            }
        }
    }
    Ok(())
}

fn invalid(msg: String) -> Error {
    Error::InvalidContent(msg)
}
