//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the use cases of the warning system.

mod assessment;

pub use assessment::AssessmentService;
