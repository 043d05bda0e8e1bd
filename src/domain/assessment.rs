//! Assessment: the complete result of one exposure submission.

use serde::Serialize;

use super::exposure::CanonicalDose;
use super::limits::{compare_to_limits, LimitStatus, OCCUPATIONAL_ANNUAL_LIMIT, PUBLIC_ANNUAL_LIMIT};
use super::protection::{all_principles, ProtectionEntry};
use super::severity::SeverityTier;
use super::units::{DoseUnit, RadiationType};

/// Everything a front end needs to display for one reading.
///
/// Recomputed per request and never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    /// Value as entered
    pub raw_value: f64,

    /// Unit the value was entered in
    pub unit: DoseUnit,

    /// Radiation type, `None` when an unrecognized type was given with Gy or Sv
    pub radiation_type: Option<RadiationType>,

    /// Normalized dose
    pub dose: CanonicalDose,

    pub tier: SeverityTier,
    pub health_effect: &'static str,
    pub recommended_action: &'static str,

    pub limit_status: LimitStatus,
    pub limit_message: String,

    /// General protection principles (constant)
    pub protection: Vec<ProtectionEntry>,

    pub occupational_limit_msv: f64,
    pub public_limit_msv: f64,

    pub assessed_at: chrono::DateTime<chrono::Utc>,
}

impl Assessment {
    /// Build the assessment of an already converted dose.
    #[must_use]
    pub fn new(
        raw_value: f64,
        unit: DoseUnit,
        radiation_type: Option<RadiationType>,
        dose: CanonicalDose,
    ) -> Self {
        let tier = SeverityTier::from_dose(dose);
        let limit_status = compare_to_limits(dose);

        Self {
            raw_value,
            unit,
            radiation_type,
            dose,
            tier,
            health_effect: tier.health_effect(),
            recommended_action: tier.recommended_action(),
            limit_status,
            limit_message: limit_status.message(),
            protection: all_principles().iter().copied().map(ProtectionEntry::from).collect(),
            occupational_limit_msv: OCCUPATIONAL_ANNUAL_LIMIT.millisieverts(),
            public_limit_msv: PUBLIC_ANNUAL_LIMIT.millisieverts(),
            assessed_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_two_roentgen_gamma() {
        let dose = CanonicalDose::from_sieverts(0.02);
        let assessment = Assessment::new(2.0, DoseUnit::Roentgen, Some(RadiationType::Gamma), dose);

        assert_eq!(assessment.tier, SeverityTier::Negligible);
        assert_eq!(assessment.limit_status, LimitStatus::ExceedsPublic);
        assert!(assessment.health_effect.starts_with("No immediate health effects"));
        assert_eq!(assessment.protection.len(), 5);
        assert_relative_eq!(assessment.occupational_limit_msv, 50.0);
        assert_relative_eq!(assessment.public_limit_msv, 1.0);
    }

    #[test]
    fn test_serializes_to_json() {
        let assessment = Assessment::new(
            5.0,
            DoseUnit::Sievert,
            None,
            CanonicalDose::from_sieverts(5.0),
        );
        let json = serde_json::to_value(&assessment).expect("Should serialize");

        assert_eq!(json["tier"], "Moderate");
        assert_eq!(json["limit_status"], "ExceedsOccupational");
        assert_eq!(json["unit"], "Sievert");
        assert!(json["radiation_type"].is_null());
        assert_eq!(json["dose"], 5.0);
        assert_eq!(json["protection"][4]["name"], "Medical Check-ups");
    }
}
