//! Reusable UI components.

pub mod add_plant_dialog;
pub mod canvas_host;
pub mod garden_card;
pub mod metrics_dialog;
