//! REST API helpers for communicating with the garden server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with a bearer
//! token from the session. Server-side (SSR): stubs returning errors since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so fetch
//! failures degrade UI behavior (error banners, refetches) without
//! crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Garden, MetricEntry, NewGarden, NewMetrics, NewPlant, PlantPosition};
use canvas::scene::{PlantId, PlantMarker};

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn gardens_endpoint() -> &'static str {
    "/api/canvases"
}

#[cfg(any(test, feature = "hydrate"))]
fn garden_endpoint(garden_id: &str) -> String {
    format!("/api/canvases/{garden_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn garden_plants_endpoint(garden_id: &str) -> String {
    format!("/api/canvases/{garden_id}/plants")
}

#[cfg(any(test, feature = "hydrate"))]
fn plant_endpoint(plant_id: &PlantId) -> String {
    format!("/api/plants/{plant_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn plant_metrics_endpoint(plant_id: &PlantId) -> String {
    format!("/api/plants/{plant_id}/metrics")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> Result<T, String> {
    Err("not available on server".to_owned())
}

/// Fetch the garden list from `GET /api/canvases`.
///
/// # Errors
///
/// Returns an error string if the request fails or the response is not OK.
pub async fn fetch_gardens(token: &str) -> Result<Vec<Garden>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(gardens_endpoint())
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("garden list", resp.status()));
        }
        resp.json::<Vec<Garden>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        server_stub()
    }
}

/// Create a garden via `POST /api/canvases`.
///
/// # Errors
///
/// Returns an error string if the request fails or the response is not OK.
pub async fn create_garden(token: &str, garden: &NewGarden) -> Result<Garden, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(gardens_endpoint())
            .header("Authorization", &bearer(token))
            .json(garden)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("garden create", resp.status()));
        }
        resp.json::<Garden>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, garden);
        server_stub()
    }
}

/// Fetch a single garden from `GET /api/canvases/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the response is not OK.
pub async fn fetch_garden(token: &str, garden_id: &str) -> Result<Garden, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&garden_endpoint(garden_id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("garden", resp.status()));
        }
        resp.json::<Garden>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, garden_id);
        server_stub()
    }
}

/// Fetch a garden's plant list from `GET /api/canvases/{id}/plants`.
///
/// This is the authoritative snapshot the canvas engine loads wholesale,
/// both on entry and as the rollback path after a failed position update.
///
/// # Errors
///
/// Returns an error string if the request fails or the response is not OK.
pub async fn fetch_plants(token: &str, garden_id: &str) -> Result<Vec<PlantMarker>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&garden_plants_endpoint(garden_id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("plant list", resp.status()));
        }
        resp.json::<Vec<PlantMarker>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, garden_id);
        server_stub()
    }
}

/// Create a plant via `POST /api/canvases/{id}/plants`.
///
/// # Errors
///
/// Returns an error string if the request fails or the response is not OK.
pub async fn create_plant(
    token: &str,
    garden_id: &str,
    plant: &NewPlant,
) -> Result<PlantMarker, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&garden_plants_endpoint(garden_id))
            .header("Authorization", &bearer(token))
            .json(plant)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("plant create", resp.status()));
        }
        resp.json::<PlantMarker>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, garden_id, plant);
        server_stub()
    }
}

/// Persist a plant's position via `PUT /api/plants/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the response is not OK.
/// Callers treat any error as "the optimistic move did not stick" and
/// refetch the authoritative plant list.
pub async fn update_plant_position(
    token: &str,
    plant_id: &PlantId,
    position: &PlantPosition,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&plant_endpoint(plant_id))
            .header("Authorization", &bearer(token))
            .json(position)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("position update", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, plant_id, position);
        server_stub()
    }
}

/// Log a metrics entry via `POST /api/plants/{id}/metrics`.
///
/// # Errors
///
/// Returns an error string if the request fails or the response is not OK.
pub async fn log_metrics(
    token: &str,
    plant_id: &PlantId,
    metrics: &NewMetrics,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&plant_metrics_endpoint(plant_id))
            .header("Authorization", &bearer(token))
            .json(metrics)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("metrics log", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, plant_id, metrics);
        server_stub()
    }
}

/// Fetch a plant's metrics history from `GET /api/plants/{id}/metrics`.
///
/// # Errors
///
/// Returns an error string if the request fails or the response is not OK.
pub async fn fetch_metrics(token: &str, plant_id: &PlantId) -> Result<Vec<MetricEntry>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&plant_metrics_endpoint(plant_id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("metrics history", resp.status()));
        }
        resp.json::<Vec<MetricEntry>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, plant_id);
        server_stub()
    }
}
