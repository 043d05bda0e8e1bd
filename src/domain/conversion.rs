//! Unit normalization to Sievert.
//!
//! The factors are simplified constants, not modeled dosimetry:
//!
//! | Unit | Gamma | Alpha | Beta |
//! |------|-------|-------|------|
//! | R    | 0.01  | 0.02  | 0.015 |
//! | Ci   | 37    | 74    | 45   |
//! | Gy   | 1     | 1     | 1    |
//! | Sv   | 1     | 1     | 1    |

use super::exposure::{CanonicalDose, DoseError};
use super::units::{DoseUnit, RadiationType};

/// Multiplier that takes a reading in `unit` to Sievert.
#[must_use]
pub fn conversion_factor(unit: DoseUnit, radiation_type: RadiationType) -> f64 {
    match unit {
        DoseUnit::Roentgen => match radiation_type {
            RadiationType::Gamma => 0.01,
            RadiationType::Alpha => 0.02,
            RadiationType::Beta => 0.015,
        },
        DoseUnit::Curie => match radiation_type {
            RadiationType::Gamma => 37.0,
            RadiationType::Alpha => 74.0,
            RadiationType::Beta => 45.0,
        },
        DoseUnit::Gray | DoseUnit::Sievert => 1.0,
    }
}

/// Convert a raw reading to a canonical dose.
///
/// Gray and Sievert readings are returned unchanged whatever the radiation
/// type.
#[must_use]
pub fn convert_to_sievert(
    raw_value: f64,
    unit: DoseUnit,
    radiation_type: RadiationType,
) -> CanonicalDose {
    match unit {
        DoseUnit::Gray | DoseUnit::Sievert => CanonicalDose::from_sieverts(raw_value),
        DoseUnit::Roentgen | DoseUnit::Curie => {
            CanonicalDose::from_sieverts(raw_value * conversion_factor(unit, radiation_type))
        }
    }
}

/// Resolve the unit and radiation-type tokens of a submission.
///
/// The unit is checked first. An unrecognized radiation type is only an
/// error for units whose conversion depends on it; otherwise it resolves to
/// `None`.
///
/// # Errors
/// - `DoseError::UnknownUnit` for a unit token outside R, Ci, Gy, Sv.
/// - `DoseError::UnknownRadiationType` for an unrecognized type with R or Ci.
pub fn resolve_tokens(
    unit_token: &str,
    radiation_token: &str,
) -> Result<(DoseUnit, Option<RadiationType>), DoseError> {
    let unit: DoseUnit = unit_token.parse()?;
    match radiation_token.parse::<RadiationType>() {
        Ok(radiation_type) => Ok((unit, Some(radiation_type))),
        Err(err) if unit.depends_on_radiation_type() => Err(err),
        Err(_) => Ok((unit, None)),
    }
}

/// Convert with a radiation type that may be absent.
///
/// Returns `None` when the unit needs a radiation type and none was given.
#[must_use]
pub fn convert_resolved(
    raw_value: f64,
    unit: DoseUnit,
    radiation_type: Option<RadiationType>,
) -> Option<CanonicalDose> {
    match radiation_type {
        Some(radiation_type) => Some(convert_to_sievert(raw_value, unit, radiation_type)),
        None if unit.depends_on_radiation_type() => None,
        None => Some(CanonicalDose::from_sieverts(raw_value)),
    }
}

/// Convert a reading given as string tokens.
///
/// # Errors
/// See [`resolve_tokens`]. A result too large for `f64` is
/// `DoseError::DoseOutOfRange`.
pub fn convert_tokens(
    raw_value: f64,
    unit_token: &str,
    radiation_token: &str,
) -> Result<CanonicalDose, DoseError> {
    let (unit, radiation_type) = resolve_tokens(unit_token, radiation_token)?;
    let dose = convert_resolved(raw_value, unit, radiation_type)
        .ok_or_else(|| DoseError::UnknownRadiationType(radiation_token.trim().to_string()))?;
    CanonicalDose::checked(dose.sieverts(), raw_value)
}
