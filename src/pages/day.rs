use leptos::*;

use crate::app::{format_progress, progress_bar_width, BrowserTracker};
use crate::keys;
use crate::types::{DayContent, Exercise};

#[component]
pub fn WorkoutDayCard(tracker: RwSignal<BrowserTracker>, day_key: String) -> impl IntoView {
    let Some(content) = tracker.with_untracked(|t| t.plan().day(&day_key).cloned()) else {
        log::warn!("no content for {}", day_key);
        return ().into_view();
    };
    let key = store_value(day_key);

    let is_locked = move || {
        key.with_value(|k| tracker.with(|t| t.day(k).map(|d| d.is_locked()).unwrap_or(true)))
    };
    // Memoized so the section list is only rebuilt when the day opens or closes
    let is_open = create_memo(move |_| {
        key.with_value(|k| tracker.with(|t| t.day(k).map(|d| d.is_open()).unwrap_or(false)))
    });
    let progress = move || {
        key.with_value(|k| tracker.with(|t| t.get_progress(k).unwrap_or(f64::NAN)))
    };

    let toggle_open = move |_| {
        let day = key.get_value();
        tracker.update(|t| {
            if let Err(e) = t.toggle_day_open(&day) {
                log::warn!("{}", e);
            }
        });
    };

    let title = content.title.clone();

    view! {
        <div class="workout-day" class:locked=is_locked class:open=move || is_open.get()>
            <div class="day-header">
                <div class="day-heading">
                    <button class="day-toggle" disabled=is_locked on:click=toggle_open>
                        {move || if is_open.get() { "▲" } else { "▼" }}
                    </button>
                    <h2 class="day-title">{title}</h2>
                    {move || is_locked().then(|| view! { <span class="lock-icon">"🔒"</span> })}
                </div>
                <div class="day-progress">
                    <div class="progress-text">{move || format!("{} completed", format_progress(progress()))}</div>
                    <div class="progress-bar">
                        <div class="progress-fill" style:width=move || progress_bar_width(progress())></div>
                    </div>
                </div>
            </div>
            {move || is_open.get().then(|| render_sections(tracker, &key.get_value(), &content))}
        </div>
    }
    .into_view()
}

fn render_sections(tracker: RwSignal<BrowserTracker>, day_key: &str, content: &DayContent) -> View {
    content
        .sections
        .iter()
        .map(|section| {
            let items = section
                .exercises
                .iter()
                .map(|exercise| {
                    view! {
                        <ExerciseItem
                            tracker=tracker
                            day_key=day_key.to_string()
                            section_key=section.key.clone()
                            exercise=exercise.clone()
                        />
                    }
                })
                .collect_view();
            view! {
                <section class="workout-section">
                    <h3 class="section-title">{section.title.clone()}</h3>
                    <div class="exercise-list">{items}</div>
                </section>
            }
        })
        .collect_view()
}

#[component]
fn ExerciseItem(
    tracker: RwSignal<BrowserTracker>,
    day_key: String,
    section_key: String,
    exercise: Exercise,
) -> impl IntoView {
    let exercise_id = keys::composite_id(&section_key, &exercise.key);
    let ids = store_value((day_key, section_key, exercise.key.clone(), exercise_id));
    let (show_video, set_show_video) = create_signal(false);

    let is_done = move || {
        ids.with_value(|(day, section, ex, _)| {
            tracker.with(|t| t.day(day).map(|d| d.is_exercise_completed(section, ex)).unwrap_or(false))
        })
    };
    let is_current = move || {
        ids.with_value(|(day, _, _, id)| {
            tracker.with(|t| {
                t.config().toggle_mode == crate::config::ToggleMode::Sequential
                    && t.current_exercise(day).ok().flatten().as_deref() == Some(id.as_str())
            })
        })
    };

    let on_toggle = move |_| {
        let (day, section, ex, _) = ids.get_value();
        tracker.update(|t| {
            if let Err(e) = t.toggle_exercise(&day, &section, &ex) {
                log::warn!("{}", e);
            }
        });
    };

    let sub_activities = exercise
        .sub_activities
        .iter()
        .map(|sub| {
            let sub_id = store_value(sub.id.clone());
            let is_checked = move || {
                ids.with_value(|(day, _, _, id)| {
                    sub_id.with_value(|s| {
                        tracker.with(|t| t.day(day).map(|d| d.sub_activities().contains(id, s)).unwrap_or(false))
                    })
                })
            };
            let on_sub_toggle = move |_| {
                let (day, _, _, id) = ids.get_value();
                let sub = sub_id.get_value();
                tracker.update(|t| {
                    if let Err(e) = t.toggle_sub_activity(&day, &id, &sub) {
                        log::warn!("{}", e);
                    }
                });
            };
            view! {
                <li class="sub-activity">
                    <label>
                        <input type="checkbox" prop:checked=is_checked on:change=on_sub_toggle />
                        {sub.description.clone()}
                    </label>
                </li>
            }
        })
        .collect_view();

    let embed_url = exercise.video_embed_url();
    let video_url = exercise.video_url();

    view! {
        <div class="exercise" class:done=is_done class:current=is_current>
            <label class="exercise-label">
                <input type="checkbox" class="exercise-checkbox" prop:checked=is_done on:change=on_toggle />
                <div class="exercise-body">
                    <h4 class="exercise-title">{exercise.title.clone()}</h4>
                    {exercise.sets.clone().map(|sets| view! { <p class="exercise-sets">{sets}</p> })}
                    {(!exercise.steps.is_empty()).then(|| view! {
                        <ul class="exercise-steps">
                            {exercise.steps.iter().map(|step| view! { <li>"• "{step.clone()}</li> }).collect_view()}
                        </ul>
                    })}
                    {(!exercise.notes.is_empty()).then(|| view! {
                        <ul class="exercise-notes">
                            {exercise.notes.iter().map(|note| view! { <li>"ℹ "{note.clone()}</li> }).collect_view()}
                        </ul>
                    })}
                </div>
            </label>
            {(!exercise.sub_activities.is_empty()).then(|| view! {
                <ul class="sub-activities">{sub_activities}</ul>
            })}
            {embed_url.map(|src| view! {
                <div class="exercise-video">
                    <button class="video-toggle" on:click=move |_| set_show_video.update(|v| *v = !*v)>
                        {move || if show_video.get() { "Hide video" } else { "Watch video" }}
                    </button>
                    {move || show_video.get().then(|| view! {
                        <div class="video-modal">
                            <iframe
                                src=src.clone()
                                title="Exercise video"
                                allow="accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture"
                                allowfullscreen=true
                            ></iframe>
                            {video_url.clone().map(|href| view! {
                                <a href=href target="_blank" rel="noopener noreferrer">"Open on YouTube"</a>
                            })}
                        </div>
                    })}
                </div>
            })}
        </div>
    }
}
