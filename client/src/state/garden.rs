#[cfg(test)]
#[path = "garden_test.rs"]
mod garden_test;

use canvas::scene::PlantMarker;

use crate::net::types::Garden;

/// State for the currently open garden page.
///
/// The canvas engine owns the live marker positions; this model carries
/// everything around it — which garden is open, its metadata, the plant a
/// dialog is focused on, and the refetch counter the canvas host watches.
#[derive(Clone, Debug, Default)]
pub struct GardenState {
    pub garden_id: Option<String>,
    pub info: Option<Garden>,
    pub error: Option<String>,
    /// Plant whose metrics dialog is open, set by a click-select on the canvas.
    pub selected: Option<PlantMarker>,
    /// Click point awaiting confirmation in the add-plant dialog.
    pub pending_placement: Option<(f64, f64)>,
    /// Bumped whenever the plant list must be refetched wholesale.
    pub plants_refresh_seq: u64,
}

impl GardenState {
    /// Ask the canvas host to refetch the authoritative plant list.
    pub fn request_plants_refresh(&mut self) {
        self.plants_refresh_seq = self.plants_refresh_seq.wrapping_add(1);
    }

    /// Reset everything for a newly routed garden.
    pub fn reset_for(&mut self, garden_id: Option<String>) {
        *self = Self {
            garden_id,
            ..Self::default()
        };
    }
}
