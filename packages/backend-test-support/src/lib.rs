//! Shared helpers for the backend's integration tests.
//!
//! Nothing in here depends on backend types, so the helpers can be used
//! from any test binary without pulling the application in twice.

pub mod fixtures;
pub mod logging;
pub mod problem_details;
