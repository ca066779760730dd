//! Shared numeric and palette constants for the garden canvas.

// ── Geometry ────────────────────────────────────────────────────

/// Radius of a plant marker circle in canvas pixels. Doubles as the
/// hit-test radius: a pointer within this distance of a marker center
/// is "on" the marker.
pub const MARKER_RADIUS: f64 = 25.0;

/// Pointer travel in pixels beyond which a press on a marker becomes a
/// drag instead of a click.
pub const DRAG_THRESHOLD: f64 = 5.0;

/// Grid line spacing in canvas pixels.
pub const GRID_SPACING: f64 = 50.0;

/// Radius of the dashed ring drawn around the marker being dragged.
pub const DRAG_RING_RADIUS: f64 = 30.0;

/// Dash segment length for the drag ring, in pixels.
pub const DRAG_RING_DASH: f64 = 5.0;

// ── Palette ─────────────────────────────────────────────────────

/// Canvas background fill.
pub const BACKGROUND_COLOR: &str = "#f1f8e9";

/// Grid line stroke.
pub const GRID_COLOR: &str = "#e0e0e0";

/// Marker fill in its resting state.
pub const MARKER_COLOR: &str = "#4caf50";

/// Marker fill when it is the current selection.
pub const MARKER_SELECTED_COLOR: &str = "#ff9800";

/// Marker fill while it is being dragged.
pub const MARKER_DRAGGING_COLOR: &str = "#2196f3";

/// Stroke of the dashed ring around a dragged marker.
pub const DRAG_RING_COLOR: &str = "#1976d2";

/// Marker label text color.
pub const LABEL_COLOR: &str = "#ffffff";

/// Marker label font.
pub const LABEL_FONT: &str = "12px Arial";
