//! Rendering: deterministic redraw of the full garden scene.
//!
//! Drawing is split in two. [`plan`] is a pure function of
//! `(scene, dimensions, input state, selection)` that produces an ordered
//! display list — identical inputs always produce an identical list, so a
//! redraw with unchanged state is pixel-identical. [`paint`] executes a
//! display list against a [`web_sys::CanvasRenderingContext2d`] and is the
//! only code in the crate that touches the 2D context.
//!
//! No partial redraw: every state change repaints the whole scene. Marker
//! counts are small, so correctness wins over cleverness here.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`;
//! the top-level caller ([`crate::engine::Engine::render`]) handles the
//! result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    BACKGROUND_COLOR, DRAG_RING_COLOR, DRAG_RING_DASH, DRAG_RING_RADIUS, GRID_COLOR, GRID_SPACING,
    LABEL_COLOR, LABEL_FONT, MARKER_COLOR, MARKER_DRAGGING_COLOR, MARKER_RADIUS,
    MARKER_SELECTED_COLOR,
};
use crate::geom::{CanvasDimensions, Point};
use crate::input::InputState;
use crate::scene::{PlantId, SceneModel};

/// Vertical offset of the label baseline from the marker center, so the
/// text sits visually centered in the circle.
const LABEL_BASELINE_OFFSET: f64 = 4.0;

/// One drawing instruction. A full redraw is an ordered `Vec<DrawOp>`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill the whole surface with the background color.
    Clear { width: f64, height: f64 },
    /// One grid line.
    GridLine { from: Point, to: Point },
    /// A filled marker circle. `fill` encodes the marker's visual state
    /// (normal / selected / dragging), which are mutually exclusive.
    MarkerCircle { center: Point, fill: &'static str },
    /// The marker's name, centered on the circle.
    Label { text: String, at: Point },
    /// Dashed ring drawn around the marker currently being dragged.
    DragRing { center: Point },
}

/// Build the display list for the current scene.
///
/// Draw order: background, grid, then markers in list order (circle, label,
/// and — for the dragged marker — the dashed ring).
#[must_use]
pub fn plan(
    scene: &SceneModel,
    dimensions: CanvasDimensions,
    input: &InputState,
    selected_id: Option<PlantId>,
) -> Vec<DrawOp> {
    let mut ops = vec![DrawOp::Clear { width: dimensions.width, height: dimensions.height }];

    let mut x = 0.0;
    while x <= dimensions.width {
        ops.push(DrawOp::GridLine {
            from: Point::new(x, 0.0),
            to: Point::new(x, dimensions.height),
        });
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y <= dimensions.height {
        ops.push(DrawOp::GridLine {
            from: Point::new(0.0, y),
            to: Point::new(dimensions.width, y),
        });
        y += GRID_SPACING;
    }

    for marker in scene.markers() {
        let center = marker.position();
        let dragging = input.is_dragging(&marker.id);
        let fill = if dragging {
            MARKER_DRAGGING_COLOR
        } else if selected_id == Some(marker.id) {
            MARKER_SELECTED_COLOR
        } else {
            MARKER_COLOR
        };
        ops.push(DrawOp::MarkerCircle { center, fill });
        ops.push(DrawOp::Label {
            text: marker.name.clone(),
            at: Point::new(center.x, center.y + LABEL_BASELINE_OFFSET),
        });
        if dragging {
            ops.push(DrawOp::DragRing { center });
        }
    }

    ops
}

/// Execute a display list against a 2D context.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn paint(ctx: &CanvasRenderingContext2d, ops: &[DrawOp]) -> Result<(), JsValue> {
    for op in ops {
        match op {
            DrawOp::Clear { width, height } => {
                ctx.set_fill_style_str(BACKGROUND_COLOR);
                ctx.fill_rect(0.0, 0.0, *width, *height);
            }
            DrawOp::GridLine { from, to } => {
                ctx.set_stroke_style_str(GRID_COLOR);
                ctx.set_line_width(1.0);
                ctx.begin_path();
                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
                ctx.stroke();
            }
            DrawOp::MarkerCircle { center, fill } => {
                ctx.set_fill_style_str(fill);
                ctx.begin_path();
                ctx.arc(center.x, center.y, MARKER_RADIUS, 0.0, 2.0 * PI)?;
                ctx.fill();
            }
            DrawOp::Label { text, at } => {
                ctx.set_fill_style_str(LABEL_COLOR);
                ctx.set_font(LABEL_FONT);
                ctx.set_text_align("center");
                ctx.fill_text(text, at.x, at.y)?;
            }
            DrawOp::DragRing { center } => {
                let dash = js_sys::Array::of2(
                    &JsValue::from_f64(DRAG_RING_DASH),
                    &JsValue::from_f64(DRAG_RING_DASH),
                );
                ctx.set_stroke_style_str(DRAG_RING_COLOR);
                ctx.set_line_width(2.0);
                ctx.set_line_dash(&dash)?;
                ctx.begin_path();
                ctx.arc(center.x, center.y, DRAG_RING_RADIUS, 0.0, 2.0 * PI)?;
                ctx.stroke();
                ctx.set_line_dash(&js_sys::Array::new())?;
            }
        }
    }
    Ok(())
}
