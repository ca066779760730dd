//! Hit-testing pointer positions against plant markers.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::MARKER_RADIUS;
use crate::geom::Point;
use crate::scene::PlantMarker;

/// Find the marker under `pt`, if any.
///
/// A marker is hit when the pointer is within [`MARKER_RADIUS`] of its
/// center. When circles overlap, the first match in list order wins — there
/// is no z-order concept beyond the list, so ties resolve deterministically.
#[must_use]
pub fn marker_at(pt: Point, markers: &[PlantMarker]) -> Option<&PlantMarker> {
    markers.iter().find(|m| pt.distance_to(m.position()) <= MARKER_RADIUS)
}
