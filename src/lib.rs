pub mod app;
pub mod config;
pub mod content;
pub mod day;
pub mod error;
pub mod keys;
pub mod lock;
pub mod logging;
mod pages;
pub mod progress;
pub mod storage;
pub mod tracker;
pub mod types;

pub use config::{ToggleMode, TrackerConfig};
pub use day::WorkoutDay;
pub use error::{Error, Result};
pub use storage::{KeyValueStore, LocalStorage, MemoryStore};
pub use tracker::WorkoutTracker;
pub use types::{CompletionSet, DayContent, Exercise, Section, SubActivitySet, Toggle, WorkoutPlan};

use leptos::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // App narrows this to the plan's configured level once it loads
    logging::init(log::LevelFilter::Info);

    mount_to_body(app::App);
}
