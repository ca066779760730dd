//! Modal dialog for logging daily metrics against a selected plant.
//!
//! Opens when the engine reports a `MarkerSelected`. Offers EC/pH/notes
//! entry with a date-time stamp, plus a toggleable history of previous
//! entries fetched from the server.

use leptos::prelude::*;

use crate::net::types::MetricEntry;
use crate::state::auth::AuthState;
use crate::state::garden::GardenState;

/// Metrics dialog — entry form and history browser for the selected plant.
#[component]
pub fn MetricsDialog() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let garden = expect_context::<RwSignal<GardenState>>();

    let (default_date, default_time) = now_parts();
    let date = RwSignal::new(default_date);
    let time = RwSignal::new(default_time);
    let ec = RwSignal::new(String::new());
    let ph = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let show_history = RwSignal::new(false);

    let close = move || garden.update(|g| g.selected = None);

    let plant_name = move || {
        garden
            .get()
            .selected
            .map_or_else(String::new, |p| p.name)
    };
    let plant_position = move || {
        garden
            .get()
            .selected
            .map(|p| format!("at ({:.0}, {:.0})", p.x, p.y))
    };

    // History is fetched lazily, only once the user asks for it.
    let history = LocalResource::new(move || {
        let token = auth.get().token;
        let plant = garden.get().selected;
        let wanted = show_history.get();
        async move {
            if !wanted {
                return Vec::new();
            }
            let (Some(token), Some(plant)) = (token, plant) else {
                return Vec::new();
            };
            crate::net::api::fetch_metrics(&token, &plant.id)
                .await
                .unwrap_or_default()
        }
    });

    let submit = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            let Some(plant) = garden.get_untracked().selected else {
                return;
            };
            let payload = crate::net::types::NewMetrics {
                plant_id: plant.id,
                date: format!("{}T{}:00", date.get_untracked(), time.get_untracked()),
                ec: ec.get_untracked().trim().parse().ok(),
                ph: ph.get_untracked().trim().parse().ok(),
                notes: notes.get_untracked().trim().to_owned(),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::log_metrics(&token, &plant.id, &payload).await {
                    Ok(()) => garden.update(|g| g.selected = None),
                    Err(err) => {
                        log::warn!("metrics log failed: {err}");
                        garden.update(|g| g.error = Some("Failed to log metrics".to_owned()));
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &auth;
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || format!("Log Daily Metrics — {}", plant_name())}</h2>
                {move || plant_position().map(|text| view! { <p class="dialog__subtitle">{text}</p> })}

                <div class="dialog__row">
                    <label class="dialog__label">
                        "Date"
                        <input
                            class="dialog__input"
                            type="date"
                            prop:value=move || date.get()
                            on:input=move |ev| date.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Time"
                        <input
                            class="dialog__input"
                            type="time"
                            prop:value=move || time.get()
                            on:input=move |ev| time.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="dialog__row">
                    <label class="dialog__label">
                        "EC (mS/cm)"
                        <input
                            class="dialog__input"
                            type="number"
                            step="0.1"
                            prop:value=move || ec.get()
                            on:input=move |ev| ec.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "pH"
                        <input
                            class="dialog__input"
                            type="number"
                            step="0.1"
                            prop:value=move || ph.get()
                            on:input=move |ev| ph.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="dialog__label">
                    "Notes"
                    <textarea
                        class="dialog__input"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close()>
                        "Cancel"
                    </button>
                    <button class="btn" on:click=move |_| show_history.update(|s| *s = !*s)>
                        {move || if show_history.get() { "Hide History" } else { "View History" }}
                    </button>
                    <button class="btn btn--primary" on:click=submit>
                        "Log Metrics"
                    </button>
                </div>

                <Show when=move || show_history.get()>
                    <div class="dialog__history">
                        <h3>"Previous Entries"</h3>
                        <Suspense fallback=move || view! { <p>"Loading history..."</p> }>
                            {move || {
                                history
                                    .get()
                                    .map(|entries| {
                                        if entries.is_empty() {
                                            view! { <p>"No metrics logged yet."</p> }.into_any()
                                        } else {
                                            view! {
                                                <ul class="dialog__history-list">
                                                    {entries
                                                        .into_iter()
                                                        .map(history_row)
                                                        .collect::<Vec<_>>()}
                                                </ul>
                                            }
                                                .into_any()
                                        }
                                    })
                            }}
                        </Suspense>
                    </div>
                </Show>
            </div>
        </div>
    }
}

fn history_row(entry: MetricEntry) -> impl IntoView {
    let date = entry.date.unwrap_or_else(|| "(no date)".to_owned());
    let readings = [
        entry.ec.map(|v| format!("EC {v:.1}")),
        entry.ph.map(|v| format!("pH {v:.1}")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ");

    view! {
        <li class="dialog__history-item">
            <span class="dialog__history-date">{date}</span>
            <span class="dialog__history-readings">{readings}</span>
            {entry.notes.map(|text| view! { <span class="dialog__history-notes">{text}</span> })}
        </li>
    }
}

/// Current local date and time as (`YYYY-MM-DD`, `HH:MM`), used to pre-fill
/// the entry form. Empty outside the browser.
fn now_parts() -> (String, String) {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let date = format!(
            "{:04}-{:02}-{:02}",
            now.get_full_year(),
            now.get_month() + 1,
            now.get_date()
        );
        let time = format!("{:02}:{:02}", now.get_hours(), now.get_minutes());
        (date, time)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (String::new(), String::new())
    }
}
