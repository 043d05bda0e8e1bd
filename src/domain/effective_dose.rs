//! Effective dose weighting by radiation type.
//!
//! Independent of unit conversion: callers apply it to a canonical dose when
//! they want a type-weighted figure. It is never folded into an assessment.

use super::exposure::CanonicalDose;
use super::units::RadiationType;

/// Weight applied when the radiation type is not recognized.
pub const DEFAULT_WEIGHTING_FACTOR: f64 = 1.0;

/// Radiation weighting factor (Gamma 1, Alpha 20, Beta 10).
#[must_use]
pub fn weighting_factor(radiation_type: RadiationType) -> f64 {
    match radiation_type {
        RadiationType::Gamma => 1.0,
        RadiationType::Alpha => 20.0,
        RadiationType::Beta => 10.0,
    }
}

/// Weight a canonical dose by radiation type.
#[must_use]
pub fn effective_dose(dose: CanonicalDose, radiation_type: RadiationType) -> CanonicalDose {
    CanonicalDose::from_sieverts(dose.sieverts() * weighting_factor(radiation_type))
}

/// Weight a canonical dose by an optional radiation type.
///
/// `None` applies [`DEFAULT_WEIGHTING_FACTOR`].
#[must_use]
pub fn effective_dose_or_default(
    dose: CanonicalDose,
    radiation_type: Option<RadiationType>,
) -> CanonicalDose {
    match radiation_type {
        Some(radiation_type) => effective_dose(dose, radiation_type),
        None => CanonicalDose::from_sieverts(dose.sieverts() * DEFAULT_WEIGHTING_FACTOR),
    }
}

/// Weight a canonical dose by a radiation-type token.
///
/// Unlike unit conversion, an unrecognized token is not an error here: it
/// applies [`DEFAULT_WEIGHTING_FACTOR`] and returns the dose unchanged.
#[must_use]
pub fn effective_dose_for_token(dose: CanonicalDose, radiation_token: &str) -> CanonicalDose {
    effective_dose_or_default(dose, radiation_token.parse::<RadiationType>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_weighting_factors() {
        let one = CanonicalDose::from_sieverts(1.0);
        assert_relative_eq!(effective_dose(one, RadiationType::Alpha).sieverts(), 20.0);
        assert_relative_eq!(effective_dose(one, RadiationType::Beta).sieverts(), 10.0);
        assert_relative_eq!(effective_dose(one, RadiationType::Gamma).sieverts(), 1.0);
    }

    #[test]
    fn test_unknown_token_defaults_to_unit_weight() {
        let one = CanonicalDose::from_sieverts(1.0);
        assert_relative_eq!(effective_dose_for_token(one, "Unknown").sieverts(), 1.0);
        assert_relative_eq!(effective_dose_for_token(one, "").sieverts(), 1.0);
        assert_relative_eq!(effective_dose_for_token(one, "alpha").sieverts(), 20.0);
    }

    #[test]
    fn test_missing_type_uses_default_weight() {
        let dose = CanonicalDose::from_sieverts(0.3);
        assert_relative_eq!(effective_dose_or_default(dose, None).sieverts(), 0.3);
        assert_relative_eq!(
            effective_dose_or_default(dose, Some(RadiationType::Beta)).sieverts(),
            3.0
        );
    }

    #[test]
    fn test_weighting_scales_fractional_doses() {
        let dose = CanonicalDose::from_sieverts(0.02);
        assert_relative_eq!(effective_dose(dose, RadiationType::Beta).sieverts(), 0.2);
    }
}
