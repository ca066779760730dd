//! Dashboard page listing gardens with create and open actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::garden_card::GardenCard;
use crate::net::types::Garden;
use crate::state::auth::AuthState;

/// Dashboard page — shows the garden list and a create-garden button.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    // Garden list resource — refetches when the session token changes.
    let gardens = LocalResource::new(move || {
        let token = auth.get().token;
        async move {
            match token {
                Some(token) => crate::net::api::fetch_gardens(&token).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    let show_create = RwSignal::new(false);
    let on_create = move |_| show_create.set(true);
    let on_cancel = Callback::new(move |()| show_create.set(false));

    let greeting = move || {
        auth.get()
            .user
            .and_then(|u| u.name.or(u.email))
            .map(|who| format!("Welcome back, {who}"))
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h1>"My Gardens"</h1>
                    {move || greeting().map(|text| view! { <p class="dashboard-page__greeting">{text}</p> })}
                </div>
                <button class="btn btn--primary" on:click=on_create>
                    "+ New Garden"
                </button>
            </header>

            <div class="dashboard-page__grid">
                <Suspense fallback=move || view! { <p>"Loading gardens..."</p> }>
                    {move || {
                        gardens
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! {
                                        <p class="dashboard-page__empty">
                                            "No gardens yet. Create one to start planting."
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="dashboard-page__cards">
                                            {list
                                                .into_iter()
                                                .map(|g| {
                                                    view! {
                                                        <GardenCard
                                                            id=g.id
                                                            name=g.name
                                                            description=g.description
                                                            width=g.width
                                                            height=g.height
                                                        />
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>

            <Show when=move || show_create.get()>
                <CreateGardenDialog on_cancel=on_cancel gardens=gardens/>
            </Show>
        </div>
    }
}

/// Modal dialog for creating a new garden.
///
/// Dimensions default to the classic 800×600 surface; anything that does
/// not parse as a number falls back to the default rather than blocking
/// the submit.
#[component]
fn CreateGardenDialog(
    on_cancel: Callback<()>,
    gardens: LocalResource<Vec<Garden>>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let width = RwSignal::new("800".to_owned());
    let height = RwSignal::new("600".to_owned());

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        let garden_name = name.get();
        if garden_name.trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            let payload = crate::net::types::NewGarden {
                name: garden_name.trim().to_owned(),
                description: description.get().trim().to_owned(),
                width: width.get().trim().parse().unwrap_or(800.0),
                height: height.get().trim().parse().unwrap_or(600.0),
            };
            let navigate = navigate.clone();
            let gardens = gardens.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_garden(&token, &payload).await {
                    Ok(garden) => {
                        gardens.refetch();
                        navigate(&format!("/garden/{}", garden.id), NavigateOptions::default());
                    }
                    Err(err) => log::warn!("garden create failed: {err}"),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (garden_name, &auth, &gardens);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Garden"</h2>
                <label class="dialog__label">
                    "Garden Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__row">
                    <label class="dialog__label">
                        "Width (px)"
                        <input
                            class="dialog__input"
                            type="number"
                            prop:value=move || width.get()
                            on:input=move |ev| width.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Height (px)"
                        <input
                            class="dialog__input"
                            type="number"
                            prop:value=move || height.get()
                            on:input=move |ev| height.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
