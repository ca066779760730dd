//! Bridge component between the Leptos UI and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The engine owns the scene and the gesture state machine; this component
//! owns the `<canvas>` element and the network side effects. Pointer events
//! flow into the engine, and the `Action`s it returns flow back out here:
//!
//! - `PlacementRequested` / `MarkerSelected` open the dialogs via `GardenState`.
//! - `PositionCommitted` is persisted with a `PUT`; the engine has already
//!   applied the move optimistically, so a failure rolls back by refetching
//!   the authoritative plant list and reloading it wholesale.
//! - `SetCursor` / `RenderNeeded` are applied to the DOM directly.
//!
//! The engine is imperative state outside the reactive graph, held in an
//! `Rc<RefCell<Option<Engine>>>` shared by the mount effect and the event
//! closures.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::garden::GardenState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use canvas::engine::{Action, Engine};
#[cfg(feature = "hydrate")]
use canvas::geom::{CanvasDimensions, Point};
#[cfg(feature = "hydrate")]
use canvas::input::InputState;
#[cfg(feature = "hydrate")]
use canvas::scene::PlantId;

#[cfg(feature = "hydrate")]
type SharedEngine = Rc<RefCell<Option<Engine>>>;

/// Canvas host — mounts the `<canvas>` element, creates the engine, and
/// routes pointer events and engine actions between the DOM and the state.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let garden = expect_context::<RwSignal<GardenState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let engine: SharedEngine = Rc::new(RefCell::new(None));

    // Create the engine once the element exists, and keep its dimensions in
    // step with the garden metadata (which may arrive after first mount).
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(element) = canvas_ref.get() else {
                return;
            };
            let dims = garden
                .get()
                .info
                .map_or_else(CanvasDimensions::default, |info| {
                    CanvasDimensions::new(info.width, info.height)
                });

            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.set_dimensions(dims);
                render_now(engine);
                return;
            }

            let mut created = Engine::new(element);
            created.set_dimensions(dims);
            render_now(&created);
            *engine.borrow_mut() = Some(created);
        });
    }

    // Load the plant list on entry and whenever a refetch is requested.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let last_sync_key = RwSignal::new(None::<(String, u64)>);
        Effect::new(move || {
            let state = garden.get();
            let Some(garden_id) = state.garden_id else {
                return;
            };
            let key = (garden_id, state.plants_refresh_seq);
            if last_sync_key.get_untracked().as_ref() == Some(&key) {
                return;
            }
            last_sync_key.set(Some(key));
            reload_plants(Rc::clone(&engine), auth, garden);
        });
    }

    // Keep the engine's selection highlight in step with the dialog state.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let selected: Option<PlantId> = garden.get().selected.map(|p| p.id);
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.set_selected(selected);
                render_now(engine);
            }
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if ev.button() != 0 {
                    return;
                }
                let actions = match engine.borrow_mut().as_mut() {
                    Some(engine) => engine.on_pointer_down(pointer_point(&ev)),
                    None => return,
                };
                process_actions(actions, &engine, &canvas_ref, auth, garden);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let actions = match engine.borrow_mut().as_mut() {
                    Some(engine) => engine.on_pointer_move(pointer_point(&ev)),
                    None => return,
                };
                process_actions(actions, &engine, &canvas_ref, auth, garden);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let actions = match engine.borrow_mut().as_mut() {
                    Some(engine) => engine.on_pointer_up(pointer_point(&ev)),
                    None => return,
                };
                process_actions(actions, &engine, &canvas_ref, auth, garden);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            |_ev: leptos::ev::PointerEvent| {}
        }
    };

    // Leaving mid-gesture finishes it at the exit point. A plain leave with
    // no gesture must NOT run the pointer-up path, which would read as a
    // placement click.
    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let actions = match engine.borrow_mut().as_mut() {
                    Some(engine) if engine.input() != InputState::Idle => {
                        engine.on_pointer_up(pointer_point(&ev))
                    }
                    _ => return,
                };
                process_actions(actions, &engine, &canvas_ref, auth, garden);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            |_ev: leptos::ev::PointerEvent| {}
        }
    };

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, garden);
    }

    view! {
        <canvas
            node_ref=canvas_ref
            class="canvas-host"
            width="800"
            height="600"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
        >
            "Your browser does not support canvas."
        </canvas>
    }
}

#[cfg(feature = "hydrate")]
fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "hydrate")]
fn render_now(engine: &Engine) {
    if let Err(err) = engine.render() {
        log::error!("canvas render failed: {err:?}");
    }
}

#[cfg(feature = "hydrate")]
fn set_cursor(canvas_ref: &NodeRef<leptos::html::Canvas>, cursor: &str) {
    if let Some(element) = canvas_ref.get_untracked() {
        let _ = element.style().set_property("cursor", cursor);
    }
}

/// Apply the engine's side-effect requests.
#[cfg(feature = "hydrate")]
fn process_actions(
    actions: Vec<Action>,
    engine: &SharedEngine,
    canvas_ref: &NodeRef<leptos::html::Canvas>,
    auth: RwSignal<AuthState>,
    garden: RwSignal<GardenState>,
) {
    for action in actions {
        match action {
            Action::PlacementRequested(point) => {
                garden.update(|g| g.pending_placement = Some((point.x, point.y)));
            }
            Action::MarkerSelected(id) => {
                let selected = engine
                    .borrow()
                    .as_ref()
                    .and_then(|engine| engine.marker(&id).cloned());
                garden.update(|g| g.selected = selected);
            }
            Action::PositionCommitted { id, position } => {
                commit_position(Rc::clone(engine), auth, garden, id, position);
            }
            Action::SetCursor(cursor) => set_cursor(canvas_ref, &cursor),
            Action::RenderNeeded => {
                if let Some(engine) = engine.borrow().as_ref() {
                    render_now(engine);
                }
            }
        }
    }
}

/// Persist a committed drag.
///
/// The engine already applied the clamped position optimistically. On
/// failure the authoritative plant list is refetched wholesale, which
/// discards the optimistic move.
#[cfg(feature = "hydrate")]
fn commit_position(
    engine: SharedEngine,
    auth: RwSignal<AuthState>,
    garden: RwSignal<GardenState>,
    id: PlantId,
    position: Point,
) {
    let Some(token) = auth.get_untracked().token else {
        return;
    };
    leptos::task::spawn_local(async move {
        let payload = crate::net::types::PlantPosition {
            x: position.x,
            y: position.y,
        };
        if let Err(err) = crate::net::api::update_plant_position(&token, &id, &payload).await {
            log::warn!("position update failed for {id}: {err}");
            garden.update(|g| g.error = Some("Failed to update plant position".to_owned()));
            reload_plants(engine, auth, garden);
        }
    });
}

/// Fetch the authoritative plant list and load it into the engine.
#[cfg(feature = "hydrate")]
fn reload_plants(engine: SharedEngine, auth: RwSignal<AuthState>, garden: RwSignal<GardenState>) {
    let Some(token) = auth.get_untracked().token else {
        return;
    };
    let Some(garden_id) = garden.get_untracked().garden_id else {
        return;
    };
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_plants(&token, &garden_id).await {
            Ok(plants) => {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.load_snapshot(plants);
                    render_now(engine);
                }
            }
            Err(err) => {
                log::warn!("plant list fetch failed: {err}");
                garden.update(|g| g.error = Some("Failed to fetch plants".to_owned()));
            }
        }
    });
}
