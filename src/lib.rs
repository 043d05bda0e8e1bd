//! # radwarn
//!
//! Radiation health-effect warning system.
//!
//! This crate provides:
//! - Normalization of Roentgen, Curie, Gray and Sievert readings to Sievert
//! - Six-tier health-risk classification with recommended actions
//! - Comparison against the occupational and public annual dose limits
//! - Effective-dose weighting by radiation type
//! - A command-line front end with text and JSON reports
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Dosimetry types and rules (units, tiers, limits, protection)
//! - `ports`: Trait definitions for report rendering
//! - `adapters`: Concrete renderers (plain text, JSON)
//! - `application`: Use cases orchestrating domain and ports
//! - `cli`: Command-line front end
//! - `config`: Environment-driven settings

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ports;

pub use domain::{
    Assessment, CanonicalDose, DoseError, DoseUnit, ExposureReading, LimitStatus,
    ProtectionPrinciple, RadiationType, SeverityTier,
};

/// Result type for radwarn operations
pub type Result<T> = std::result::Result<T, RadwarnError>;

/// Main error type for radwarn
#[derive(Debug, thiserror::Error)]
pub enum RadwarnError {
    #[error("Rejected input: {0}")]
    Dose(#[from] domain::DoseError),

    #[error("Unknown output format '{0}'. Valid formats: text, json")]
    UnknownFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
