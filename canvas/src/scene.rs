//! Scene model: plant markers and the ordered in-memory store.
//!
//! This module defines the data types that describe what is on the garden
//! canvas (`PlantMarker`) and the runtime store that owns the live markers
//! for the currently open garden (`SceneModel`).
//!
//! Data flows into this layer from the network (JSON deserialization of the
//! plant list) and from the input engine (live position updates during a
//! drag). The renderer reads markers in list order; list order is also the
//! hit-test priority, so draw order and pick order always agree.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::Point;

/// Unique identifier for a plant marker, assigned by the backend.
pub type PlantId = Uuid;

/// A plant placed on a garden's 2-D surface, as stored in the scene and on
/// the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantMarker {
    /// Backend-assigned identifier, stable across position edits.
    pub id: PlantId,
    /// Display name drawn as the marker label.
    pub name: String,
    /// Plant type (e.g. `"Tomato"`). Open-ended, backend-defined.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Marker center x in canvas pixel coordinates.
    pub x: f64,
    /// Marker center y in canvas pixel coordinates.
    pub y: f64,
    /// ISO date the plant was placed, if the backend recorded one.
    #[serde(rename = "planting-date", default, skip_serializing_if = "Option::is_none")]
    pub planting_date: Option<String>,
}

impl PlantMarker {
    /// The marker center as a point.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Ordered in-memory store of the open garden's plant markers.
///
/// List order is stable and deterministic: it is the order the backend
/// returned the markers in, and it decides both draw order and which marker
/// wins a hit-test tie when circles overlap (first match wins).
#[derive(Debug, Default)]
pub struct SceneModel {
    markers: Vec<PlantMarker>,
}

impl SceneModel {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self { markers: Vec::new() }
    }

    /// Replace all markers with an authoritative snapshot from the server.
    ///
    /// Used both for the initial fetch and for rollback-by-refetch after a
    /// failed position commit. Markers deleted elsewhere simply stop
    /// appearing in the next snapshot.
    pub fn load_snapshot(&mut self, markers: Vec<PlantMarker>) {
        self.markers = markers;
    }

    /// All markers in list order.
    #[must_use]
    pub fn markers(&self) -> &[PlantMarker] {
        &self.markers
    }

    /// Look up a marker by id.
    #[must_use]
    pub fn get(&self, id: &PlantId) -> Option<&PlantMarker> {
        self.markers.iter().find(|m| m.id == *id)
    }

    /// Whether a marker with this id is present.
    #[must_use]
    pub fn contains(&self, id: &PlantId) -> bool {
        self.get(id).is_some()
    }

    /// Move a marker to a new (already clamped) position.
    ///
    /// Returns `false` if the marker no longer exists — it may have been
    /// removed by a concurrent snapshot reload, which the caller tolerates
    /// by abandoning the gesture.
    pub fn set_position(&mut self, id: &PlantId, position: Point) -> bool {
        let Some(marker) = self.markers.iter_mut().find(|m| m.id == *id) else {
            return false;
        };
        marker.x = position.x;
        marker.y = position.y;
        true
    }

    /// Number of markers currently in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Returns `true` if the scene contains no markers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
