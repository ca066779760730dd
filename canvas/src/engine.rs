use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::DRAG_THRESHOLD;
use crate::geom::{CanvasDimensions, Point};
use crate::hit;
use crate::input::InputState;
use crate::render;
use crate::scene::{PlantId, PlantMarker, SceneModel};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
///
/// The engine mutates its own scene optimistically; actions tell the host
/// what side effects are now required (persistence, dialogs, cursor, redraw).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Pointer released over empty space — the host should open the
    /// add-plant flow at this exact point.
    PlacementRequested(Point),
    /// Click (no drag) on a marker — the host should open its detail /
    /// metrics view.
    MarkerSelected(PlantId),
    /// A drag finished. The clamped position is already applied to the
    /// scene; the host must persist it and roll back by refetch on failure.
    PositionCommitted {
        id: PlantId,
        position: Point,
    },
    /// Update the canvas cursor affordance (cosmetic only).
    SetCursor(String),
    /// State changed in a way that requires a full redraw.
    RenderNeeded,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so the full gesture state machine can be tested
/// natively, without WASM or a browser.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub scene: SceneModel,
    pub dimensions: CanvasDimensions,
    pub input: InputState,
    pub selected_id: Option<PlantId>,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Replace the scene with an authoritative server snapshot.
    ///
    /// If the marker involved in the active gesture or selection no longer
    /// exists, that state is dropped — a deletion elsewhere simply ends the
    /// gesture.
    pub fn load_snapshot(&mut self, markers: Vec<PlantMarker>) {
        self.scene.load_snapshot(markers);
        if let Some(id) = self.input.active_marker() {
            if !self.scene.contains(&id) {
                self.input = InputState::Idle;
            }
        }
        if let Some(id) = self.selected_id {
            if !self.scene.contains(&id) {
                self.selected_id = None;
            }
        }
    }

    /// Set the clamp bounds for marker positions.
    pub fn set_dimensions(&mut self, dimensions: CanvasDimensions) {
        self.dimensions = dimensions;
    }

    // --- Selection ---

    pub fn set_selected(&mut self, id: Option<PlantId>) {
        self.selected_id = id;
    }

    // --- Pointer events ---

    /// Pointer-down: arm a gesture if a marker is under the pointer.
    ///
    /// A press on empty space stays `Idle`; placement is signalled on the
    /// matching pointer-up so the placement point is the release point.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        match hit::marker_at(pt, self.scene.markers()) {
            Some(marker) => {
                self.input = InputState::Armed {
                    id: marker.id,
                    down: pt,
                    offset: Point::new(pt.x - marker.x, pt.y - marker.y),
                };
                vec![Action::SetCursor("grabbing".to_owned())]
            }
            None => Vec::new(),
        }
    }

    /// Pointer-move: promote `Armed` to `Dragging` past the threshold and
    /// track the pointer live while dragging. In `Idle` this only updates
    /// the hover cursor.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => {
                let cursor = if hit::marker_at(pt, self.scene.markers()).is_some() {
                    "grab"
                } else {
                    "crosshair"
                };
                vec![Action::SetCursor(cursor.to_owned())]
            }
            InputState::Armed { id, down, offset } => {
                if pt.distance_to(down) <= DRAG_THRESHOLD {
                    return Vec::new();
                }
                self.input = InputState::Dragging { id, offset };
                self.drag_to(&id, pt, offset)
            }
            InputState::Dragging { id, offset } => self.drag_to(&id, pt, offset),
        }
    }

    /// Pointer-up: resolve the gesture into one of the three intents.
    pub fn on_pointer_up(&mut self, pt: Point) -> Vec<Action> {
        match self.input {
            // The press never landed on a marker; release over empty space
            // asks the host to place a new one at the release point.
            InputState::Idle => {
                if hit::marker_at(pt, self.scene.markers()).is_none() {
                    vec![Action::PlacementRequested(pt)]
                } else {
                    Vec::new()
                }
            }
            InputState::Armed { id, .. } => {
                self.input = InputState::Idle;
                self.selected_id = Some(id);
                vec![
                    Action::MarkerSelected(id),
                    Action::SetCursor("crosshair".to_owned()),
                    Action::RenderNeeded,
                ]
            }
            InputState::Dragging { id, offset } => {
                self.input = InputState::Idle;
                let position = self
                    .dimensions
                    .clamp_marker(Point::new(pt.x - offset.x, pt.y - offset.y));
                let mut actions = Vec::new();
                if self.scene.set_position(&id, position) {
                    actions.push(Action::PositionCommitted { id, position });
                }
                actions.push(Action::SetCursor("crosshair".to_owned()));
                actions.push(Action::RenderNeeded);
                actions
            }
        }
    }

    fn drag_to(&mut self, id: &PlantId, pt: Point, offset: Point) -> Vec<Action> {
        let position = self
            .dimensions
            .clamp_marker(Point::new(pt.x - offset.x, pt.y - offset.y));
        if self.scene.set_position(id, position) {
            vec![Action::RenderNeeded]
        } else {
            // Marker vanished mid-gesture (deleted by a snapshot reload).
            self.input = InputState::Idle;
            vec![Action::RenderNeeded]
        }
    }

    // --- Queries ---

    /// The currently selected marker, if any.
    #[must_use]
    pub fn selection(&self) -> Option<PlantId> {
        self.selected_id
    }

    /// Look up a marker by id.
    #[must_use]
    pub fn marker(&self, id: &PlantId) -> Option<&PlantMarker> {
        self.scene.get(id)
    }
}

/// The full canvas engine. Wraps [`EngineCore`] and owns the browser canvas
/// element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    // --- Delegated data inputs ---

    pub fn load_snapshot(&mut self, markers: Vec<PlantMarker>) {
        self.core.load_snapshot(markers);
    }

    /// Set clamp bounds and resize the backing element to match.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_dimensions(&mut self, dimensions: CanvasDimensions) {
        self.core.set_dimensions(dimensions);
        self.canvas.set_width(dimensions.width.max(0.0) as u32);
        self.canvas.set_height(dimensions.height.max(0.0) as u32);
    }

    pub fn set_selected(&mut self, id: Option<PlantId>) {
        self.core.set_selected(id);
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_down(pt)
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(pt)
    }

    pub fn on_pointer_up(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_up(pt)
    }

    // --- Render ---

    /// Draw the current scene to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call
    /// fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        let ops = render::plan(
            &self.core.scene,
            self.core.dimensions,
            &self.core.input,
            self.core.selected_id,
        );
        render::paint(&ctx, &ops)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<PlantId> {
        self.core.selection()
    }

    #[must_use]
    pub fn input(&self) -> InputState {
        self.core.input
    }

    #[must_use]
    pub fn marker(&self, id: &PlantId) -> Option<&PlantMarker> {
        self.core.marker(id)
    }
}
