use leptos::*;

use crate::content;
use crate::pages::{WorkoutControls, WorkoutDayCard};
use crate::storage::{KeyValueStore, LocalStorage, MemoryStore};
use crate::tracker::WorkoutTracker;

pub type BrowserTracker = WorkoutTracker<Box<dyn KeyValueStore>>;

/// localStorage when the browser has it, otherwise a store that forgets on reload.
pub fn open_store() -> Box<dyn KeyValueStore> {
    match LocalStorage::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("{}; progress will not survive a reload", e);
            Box::new(MemoryStore::new())
        }
    }
}

/// "43% completed"; a day without exercises shows NaN.
pub(crate) fn format_progress(progress: f64) -> String {
    format!("{}%", progress)
}

/// Width of the progress bar fill, always a valid CSS percentage.
pub(crate) fn progress_bar_width(progress: f64) -> String {
    let clamped = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 100.0) };
    format!("{}%", clamped)
}

#[component]
pub fn App() -> impl IntoView {
    let plan = match content::default_plan() {
        Ok(plan) => plan,
        Err(e) => {
            log::error!("{}", e);
            return view! { <div class="loading">"Could not load the workout plan"</div> }.into_view();
        }
    };
    log::set_max_level(plan.settings.log_filter());

    let title = plan.title.clone();
    let tip = plan.tip.clone();
    let day_keys: Vec<String> = plan.day_keys().map(str::to_string).collect();
    let tracker = create_rw_signal(WorkoutTracker::new(plan, open_store()));

    view! {
        <div class="app">
            <header class="app-header">
                <h1 class="app-title">{title}</h1>
                {tip.map(|tip| view! { <blockquote class="app-tip">{tip}</blockquote> })}
                <WorkoutControls tracker=tracker />
            </header>
            <div class="days">
                {day_keys
                    .into_iter()
                    .map(|day_key| view! { <WorkoutDayCard tracker=tracker day_key=day_key /> })
                    .collect_view()}
            </div>
        </div>
    }
    .into_view()
}
