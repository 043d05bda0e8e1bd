//! Exposure readings and the canonical dose they normalize to.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::conversion;
use super::units::{DoseUnit, RadiationType};

/// Errors raised while turning raw input into a canonical dose.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DoseError {
    #[error("'{0}' is not a valid number for the radiation dose")]
    InvalidNumericInput(String),

    #[error("Unknown unit '{0}'. Please use R (Roentgen), Ci (Curie), Gy (Gray), or Sv (Sievert).")]
    UnknownUnit(String),

    #[error("Unknown radiation type '{0}'. Please use Gamma, Alpha, or Beta.")]
    UnknownRadiationType(String),

    #[error("'{0}' converts to a dose too large to represent")]
    DoseOutOfRange(String),
}

/// A dose in Sievert, the unit all classification operates on.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalDose(f64);

/// Magnitude from which quantities are shown in exponent notation.
const LARGE_QUANTITY: f64 = 1e15;

impl CanonicalDose {
    #[must_use]
    pub const fn from_sieverts(sieverts: f64) -> Self {
        Self(sieverts)
    }

    /// Accept a computed dose only if it is finite.
    ///
    /// Conversion and weighting can overflow a finite reading to infinity;
    /// `raw_value` is what the caller entered and goes into the error.
    ///
    /// # Errors
    /// Returns `DoseError::DoseOutOfRange` if `sieverts` is NaN or infinite.
    pub fn checked(sieverts: f64, raw_value: f64) -> Result<Self, DoseError> {
        if sieverts.is_finite() {
            Ok(Self(sieverts))
        } else {
            Err(DoseError::DoseOutOfRange(format_quantity(raw_value)))
        }
    }

    #[must_use]
    pub const fn sieverts(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn millisieverts(self) -> f64 {
        self.0 * 1000.0
    }
}

impl fmt::Display for CanonicalDose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Sv", format_quantity(self.0))
    }
}

/// One measurement as entered by the user.
///
/// Negative values pass through unchanged: the conversion arithmetic does
/// not range-check, and callers needing physical sanity must add their own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureReading {
    pub raw_value: f64,
    pub unit: DoseUnit,
    pub radiation_type: RadiationType,
}

impl ExposureReading {
    /// Create a reading.
    ///
    /// # Errors
    /// Returns `DoseError::InvalidNumericInput` if `raw_value` is NaN or infinite.
    pub fn new(
        raw_value: f64,
        unit: DoseUnit,
        radiation_type: RadiationType,
    ) -> Result<Self, DoseError> {
        if !raw_value.is_finite() {
            return Err(DoseError::InvalidNumericInput(raw_value.to_string()));
        }
        Ok(Self {
            raw_value,
            unit,
            radiation_type,
        })
    }

    /// Normalize this reading to Sievert.
    #[must_use]
    pub fn to_canonical(&self) -> CanonicalDose {
        conversion::convert_to_sievert(self.raw_value, self.unit, self.radiation_type)
    }
}

/// Parse the numeric text field of the form.
///
/// Surrounding whitespace is ignored. Text that parses to NaN or infinity is
/// rejected like any other non-number.
///
/// # Errors
/// Returns `DoseError::InvalidNumericInput` carrying the offending text.
pub fn parse_raw_value(text: &str) -> Result<f64, DoseError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DoseError::InvalidNumericInput(trimmed.to_string())),
    }
}

/// Format a quantity for display without float noise (`0.015000000000000001` → `0.015`).
///
/// Very small and very large magnitudes use exponent notation.
#[must_use]
pub fn format_quantity(value: f64) -> String {
    if value != 0.0 && (value.abs() < 1e-6 || value.abs() >= LARGE_QUANTITY) {
        return format!("{value:e}");
    }
    let fixed = format!("{value:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
