//! Backend test support utilities
//!
//! Shared by the backend's integration test binaries: one idempotent logging
//! initializer and the problem-details contract assertions.

pub mod logging;
pub mod problem_details;
