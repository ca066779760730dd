//! Geometry primitives: points, distances, and canvas bounds.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

use crate::consts::MARKER_RADIUS;

/// A point in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Fixed pixel dimensions of a garden canvas.
///
/// Fetched once per garden and used both to size the drawing surface and as
/// the clamp bounds for marker positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasDimensions {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasDimensions {
    fn default() -> Self {
        Self { width: 800.0, height: 600.0 }
    }
}

impl CanvasDimensions {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp a marker center into `[radius, width-radius] × [radius, height-radius]`
    /// so the full marker circle stays within the visible surface.
    ///
    /// When an axis is narrower than a marker diameter the minimum bound wins,
    /// matching `max(r, min(extent - r, v))` evaluation order.
    #[must_use]
    pub fn clamp_marker(&self, p: Point) -> Point {
        Point {
            x: p.x.min(self.width - MARKER_RADIUS).max(MARKER_RADIUS),
            y: p.y.min(self.height - MARKER_RADIUS).max(MARKER_RADIUS),
        }
    }
}
