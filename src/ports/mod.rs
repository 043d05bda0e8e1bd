//! Ports layer: Trait definitions for the outer surfaces.
//!
//! The dosimetry core produces an `Assessment`; how it reaches a user is
//! decided by a renderer behind this boundary.

mod renderer;

pub use renderer::{OutputFormat, ReportRenderer};
