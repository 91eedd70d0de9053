use leptos::*;

use crate::app::BrowserTracker;

/// Start / reset button. Resetting wipes every day's progress.
#[component]
pub fn WorkoutControls(tracker: RwSignal<BrowserTracker>) -> impl IntoView {
    let in_progress = move || tracker.with(|t| t.is_workout_in_progress());

    let on_click = move |_| {
        tracker.update(|t| {
            t.toggle_workout();
        });
    };

    view! {
        <div class="buttons-bar">
            <button
                class="workout-control"
                class:active=in_progress
                aria-label=move || if in_progress() { "Reset workout" } else { "Start workout" }
                on:click=on_click
            >
                {move || if in_progress() { "↺ Reset workout" } else { "▶ Start workout" }}
            </button>
        </div>
    }
}
