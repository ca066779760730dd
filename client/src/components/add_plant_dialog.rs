//! Modal dialog confirming a new plant at a clicked canvas point.
//!
//! Opens when the engine reports a `PlacementRequested`; the click point
//! sits in `GardenState::pending_placement` until the dialog is confirmed
//! or dismissed. Creation is not optimistic — the plant appears on the
//! canvas via a plant-list refetch after the server accepts it.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::garden::GardenState;

/// Plant types offered in the picker.
const PLANT_TYPES: [&str; 5] = ["Tomato", "Lettuce", "Basil", "Pepper", "Spinach"];

/// Add-plant dialog — type picker, name field, and confirm/cancel actions.
#[component]
pub fn AddPlantDialog() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let garden = expect_context::<RwSignal<GardenState>>();

    let kind = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());

    let close = move || garden.update(|g| g.pending_placement = None);

    // Picking a type pre-fills the name until the user edits it.
    let on_kind_change = move |ev| {
        let picked = event_target_value(&ev);
        if name.with(|n| n.trim().is_empty()) || PLANT_TYPES.contains(&name.get().as_str()) {
            name.set(picked.clone());
        }
        kind.set(picked);
    };

    let ready = move || !kind.get().is_empty() && !name.get().trim().is_empty();

    let submit = move |_| {
        if !ready() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            let state = garden.get_untracked();
            let (Some(garden_id), Some((x, y))) = (state.garden_id, state.pending_placement)
            else {
                return;
            };
            let payload = crate::net::types::NewPlant {
                name: name.get_untracked().trim().to_owned(),
                kind: kind.get_untracked(),
                x,
                y,
                planting_date: today_iso_date(),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::create_plant(&token, &garden_id, &payload).await {
                    Ok(_) => garden.update(|g| {
                        g.pending_placement = None;
                        g.request_plants_refresh();
                    }),
                    Err(err) => {
                        log::warn!("plant create failed: {err}");
                        garden.update(|g| g.error = Some("Failed to add plant".to_owned()));
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &auth;
        }
    };

    let title = move || {
        garden
            .get()
            .pending_placement
            .map_or_else(|| "Add Plant".to_owned(), |(x, y)| {
                format!("Add Plant at ({x:.0}, {y:.0})")
            })
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <label class="dialog__label">
                    "Plant Type"
                    <select class="dialog__input" on:change=on_kind_change>
                        <option value="" disabled selected>
                            "Choose a type"
                        </option>
                        {PLANT_TYPES
                            .into_iter()
                            .map(|t| view! { <option value=t>{t}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close()>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || !ready() on:click=submit>
                        "Add Plant"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Today's date as `YYYY-MM-DD`, used as the default planting date.
#[cfg(feature = "hydrate")]
fn today_iso_date() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.split('T').next().unwrap_or_default().to_owned()
}
