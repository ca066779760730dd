//! Top-level routed pages.

pub mod dashboard;
pub mod garden;
pub mod login;
