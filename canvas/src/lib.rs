//! Canvas rendering and input engine for the garden layout editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! interactive part of a garden canvas: translating raw pointer events into
//! gesture intents (place a plant, select a plant, move a plant), maintaining
//! the in-memory scene of plant markers, clamping marker positions to the
//! canvas bounds, and redrawing the full scene. The host Leptos layer is
//! responsible only for wiring DOM events to the engine and persisting the
//! resulting [`engine::Action`]s to the server.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`scene`] | In-memory plant marker store for the open garden |
//! | [`geom`] | Points, distances, and canvas bounds clamping |
//! | [`input`] | The drag-vs-click gesture state machine |
//! | [`hit`] | Hit-testing pointer positions against markers |
//! | [`render`] | Deterministic scene drawing (display list + painter) |
//! | [`consts`] | Shared numeric and palette constants |

pub mod consts;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod render;
pub mod scene;
