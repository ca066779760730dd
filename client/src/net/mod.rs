//! Network layer: wire types and REST API helpers.

pub mod api;
pub mod types;
