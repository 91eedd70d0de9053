use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How exercise checkboxes react to clicks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleMode {
    /// Any exercise can be checked or unchecked at any time.
    #[default]
    Free,
    /// Only the first unfinished exercise can be checked; checks are never undone.
    Sequential,
}

/// Tracker settings, read from the `settings` object of the workout plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackerConfig {
    pub toggle_mode: ToggleMode,
    /// Open the following day as soon as the current one completes.
    pub open_next_on_complete: bool,
    pub log_level: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            toggle_mode: ToggleMode::Free,
            open_next_on_complete: true,
            log_level: "info".to_string(),
        }
    }
}

impl TrackerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::ContentParse)
    }

    pub fn log_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
