//! Garden page — the canvas workspace for a single garden.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_params_map;

use crate::components::add_plant_dialog::AddPlantDialog;
use crate::components::canvas_host::CanvasHost;
use crate::components::metrics_dialog::MetricsDialog;
use crate::state::auth::AuthState;
use crate::state::garden::GardenState;

/// Garden page — header, error banner, interactive canvas, and the two
/// dialogs (add-plant, metrics). Reads the garden ID from the route
/// parameter and resets `GardenState` when it changes.
#[component]
pub fn GardenPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let garden = expect_context::<RwSignal<GardenState>>();
    let params = use_params_map();

    let garden_id = move || params.read().get("id");

    // Reset page state when the route param changes, then fetch metadata.
    Effect::new(move || {
        let id = garden_id();
        garden.update(|g| g.reset_for(id.clone()));

        #[cfg(feature = "hydrate")]
        {
            let Some(id) = id else {
                return;
            };
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_garden(&token, &id).await {
                    Ok(info) => garden.update(|g| {
                        // A slow response for a garden we already left is stale.
                        if g.garden_id.as_deref() == Some(info.id.as_str()) {
                            g.info = Some(info);
                        }
                    }),
                    Err(err) => {
                        log::warn!("garden fetch failed: {err}");
                        garden.update(|g| g.error = Some("Failed to load garden".to_owned()));
                    }
                }
            });
        }
    });

    // Redirect to login if not authenticated.
    let navigate = leptos_router::hooks::use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let title = move || {
        garden
            .get()
            .info
            .map_or_else(|| "Garden".to_owned(), |info| info.name)
    };
    let description = move || garden.get().info.and_then(|info| info.description);
    let dimensions = move || {
        garden
            .get()
            .info
            .map(|info| format!("{:.0}×{:.0}", info.width, info.height))
    };

    view! {
        <div class="garden-page">
            <header class="garden-page__header">
                <a class="garden-page__back" href="/">
                    "← My Gardens"
                </a>
                <div class="garden-page__heading">
                    <h1>{title}</h1>
                    {move || description().map(|text| view! { <p class="garden-page__description">{text}</p> })}
                </div>
                {move || dimensions().map(|dims| view! { <span class="garden-page__dims">{dims}</span> })}
            </header>

            <p class="garden-page__hint">
                "Click an empty spot to add a plant. Click a plant to log metrics. Drag to rearrange."
            </p>

            <Show when=move || garden.get().error.is_some()>
                <div class="garden-page__error" role="alert">
                    {move || garden.get().error.unwrap_or_default()}
                    <button
                        class="garden-page__error-dismiss"
                        on:click=move |_| garden.update(|g| g.error = None)
                    >
                        "Dismiss"
                    </button>
                </div>
            </Show>

            <div class="garden-page__canvas">
                <CanvasHost/>
            </div>

            <Show when=move || garden.get().pending_placement.is_some()>
                <AddPlantDialog/>
            </Show>

            <Show when=move || garden.get().selected.is_some()>
                <MetricsDialog/>
            </Show>
        </div>
    }
}
