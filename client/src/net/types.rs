//! Wire types for the garden REST API.
//!
//! Field names follow the server's kebab-case convention where it uses one
//! (`type`, `planting-date`, `plant-id`); everything else is plain
//! lower-case JSON.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use canvas::scene::{PlantId, PlantMarker};

fn default_width() -> f64 {
    800.0
}

fn default_height() -> f64 {
    600.0
}

/// A garden as returned by `/api/canvases`.
///
/// Older records predate configurable dimensions, so `width`/`height`
/// default to the classic 800×600 surface when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Garden {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
}

/// Payload for creating a garden via `POST /api/canvases`.
#[derive(Clone, Debug, Serialize)]
pub struct NewGarden {
    pub name: String,
    pub description: String,
    pub width: f64,
    pub height: f64,
}

/// Payload for creating a plant via `POST /api/canvases/{id}/plants`.
#[derive(Clone, Debug, Serialize)]
pub struct NewPlant {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "planting-date")]
    pub planting_date: String,
}

/// Position payload for `PUT /api/plants/{id}`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PlantPosition {
    pub x: f64,
    pub y: f64,
}

/// Payload for logging metrics via `POST /api/plants/{id}/metrics`.
#[derive(Clone, Debug, Serialize)]
pub struct NewMetrics {
    #[serde(rename = "plant-id")]
    pub plant_id: PlantId,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ec: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ph: Option<f64>,
    pub notes: String,
}

/// A logged metrics entry as returned by `GET /api/plants/{id}/metrics`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MetricEntry {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub ec: Option<f64>,
    #[serde(default)]
    pub ph: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Claims decoded from the session JWT payload. The token is decoded
/// client-side for display and expiry checks only; the server verifies it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserClaims {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}
