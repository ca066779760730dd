//! Small browser-facing utilities.

pub mod session;
