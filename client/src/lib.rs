//! # client
//!
//! Leptos + WASM frontend for the Horti garden tracker.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST API helpers. It integrates with the `canvas` crate for
//! imperative garden rendering via the `CanvasHost` bridge component.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point — hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
