//! Input model: the drag-vs-click gesture state machine.
//!
//! A pointer-down on a marker does not immediately start a drag; the gesture
//! is *armed* until pointer travel exceeds the drag threshold. Release while
//! still armed is a click (select), release while dragging is a move. Each
//! active variant carries the context needed to compute positions and emit a
//! final action on pointer-up. At most one marker can be armed or dragging
//! at a time.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;
use crate::scene::PlantId;

/// The active gesture being tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// Pointer went down on a marker; not yet known whether this is a click
    /// or a drag.
    Armed {
        /// The candidate marker under the pointer at press time.
        id: PlantId,
        /// Pointer position at press time, against which travel is measured.
        down: Point,
        /// Pointer position minus marker center, so the marker doesn't jump
        /// to the cursor when the drag starts.
        offset: Point,
    },
    /// Travel exceeded the threshold; the marker tracks the pointer live.
    Dragging {
        /// The marker being moved.
        id: PlantId,
        /// Grab offset carried forward from the armed phase.
        offset: Point,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}

impl InputState {
    /// Id of the marker involved in the active gesture, if any.
    #[must_use]
    pub fn active_marker(&self) -> Option<PlantId> {
        match self {
            Self::Idle => None,
            Self::Armed { id, .. } | Self::Dragging { id, .. } => Some(*id),
        }
    }

    /// Whether this marker is the one currently being dragged.
    #[must_use]
    pub fn is_dragging(&self, id: &PlantId) -> bool {
        matches!(self, Self::Dragging { id: dragged, .. } if dragged == id)
    }
}
