//! Severity tiers for a canonical dose.
//!
//! Six half-open bands, closed below and open above, tested from the lowest
//! upward so the first match wins:
//!
//! `[0, 0.1)`, `[0.1, 1)`, `[1, 2)`, `[2, 6)`, `[6, 10)`, `[10, ∞)` Sv
//!
//! Negative doses fall into the lowest tier.

use serde::{Deserialize, Serialize};

use super::exposure::CanonicalDose;

/// Health-risk tier for an acute dose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityTier {
    /// Below 0.1 Sv
    Negligible,
    /// 0.1 to 1 Sv
    Low,
    /// 1 to 2 Sv
    Mild,
    /// 2 to 6 Sv
    Moderate,
    /// 6 to 10 Sv
    Severe,
    /// 10 Sv and above
    Lethal,
}

impl SeverityTier {
    /// Every tier, lowest first.
    pub const ALL: [SeverityTier; 6] = [
        Self::Negligible,
        Self::Low,
        Self::Mild,
        Self::Moderate,
        Self::Severe,
        Self::Lethal,
    ];

    /// Classify a dose.
    ///
    /// Total over `f64`: NaN fails every comparison and lands in the top tier.
    #[must_use]
    pub fn from_dose(dose: CanonicalDose) -> Self {
        let sv = dose.sieverts();
        if sv < 0.1 {
            Self::Negligible
        } else if sv < 1.0 {
            Self::Low
        } else if sv < 2.0 {
            Self::Mild
        } else if sv < 6.0 {
            Self::Moderate
        } else if sv < 10.0 {
            Self::Severe
        } else {
            Self::Lethal
        }
    }

    /// Inclusive lower bound in Sv. The lowest tier has none.
    #[must_use]
    pub fn lower_bound(&self) -> Option<f64> {
        match self {
            Self::Negligible => None,
            Self::Low => Some(0.1),
            Self::Mild => Some(1.0),
            Self::Moderate => Some(2.0),
            Self::Severe => Some(6.0),
            Self::Lethal => Some(10.0),
        }
    }

    /// Exclusive upper bound in Sv. The top tier is open-ended.
    #[must_use]
    pub fn upper_bound(&self) -> Option<f64> {
        match self {
            Self::Negligible => Some(0.1),
            Self::Low => Some(1.0),
            Self::Mild => Some(2.0),
            Self::Moderate => Some(6.0),
            Self::Severe => Some(10.0),
            Self::Lethal => None,
        }
    }

    /// Expected health effect at this tier.
    #[must_use]
    pub fn health_effect(&self) -> &'static str {
        match self {
            Self::Negligible => "No immediate health effects. Long-term exposure may slightly increase the risk of cancer.",
            Self::Low => "Increased risk of cancer with long-term exposure. Acute symptoms unlikely.",
            Self::Mild => "Mild radiation sickness possible, including nausea and fatigue. Higher cancer risk.",
            Self::Moderate => "Moderate to severe radiation sickness. Potential damage to internal organs, bone marrow damage.",
            Self::Severe => "Severe radiation sickness. Death is likely without medical intervention.",
            Self::Lethal => "Extremely high radiation dose. Death is almost certain within days or weeks.",
        }
    }

    /// Recommended action at this tier.
    #[must_use]
    pub fn recommended_action(&self) -> &'static str {
        match self {
            Self::Negligible => "Limit exposure and monitor over time. Regular check-ups advised.",
            Self::Low => "Minimize exposure, wear protective clothing, and stay indoors during high radiation events.",
            Self::Mild => "Seek medical attention for any symptoms. Use shielding and reduce exposure duration.",
            Self::Moderate => "Immediate medical treatment required. Stay indoors, avoid contaminated areas, and use protective gear.",
            Self::Severe => "Emergency medical attention required. Full protection and decontamination necessary.",
            Self::Lethal => "Immediate evacuation and emergency medical intervention required. Avoid exposure at all costs.",
        }
    }
}

impl std::fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negligible => write!(f, "NEGLIGIBLE"),
            Self::Low => write!(f, "LOW"),
            Self::Mild => write!(f, "MILD"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::Severe => write!(f, "SEVERE"),
            Self::Lethal => write!(f, "LETHAL"),
        }
    }
}

/// Health effect and recommended action for a dose.
#[must_use]
pub fn classify(dose: CanonicalDose) -> (&'static str, &'static str) {
    let tier = SeverityTier::from_dose(dose);
    (tier.health_effect(), tier.recommended_action())
}
