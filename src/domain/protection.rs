//! General protection principles against ionizing radiation.
//!
//! Fixed content, independent of dose and radiation type.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProtectionPrinciple {
    Time,
    Distance,
    Shielding,
    Monitoring,
    MedicalCheckups,
}

const ALL_PRINCIPLES: [ProtectionPrinciple; 5] = [
    ProtectionPrinciple::Time,
    ProtectionPrinciple::Distance,
    ProtectionPrinciple::Shielding,
    ProtectionPrinciple::Monitoring,
    ProtectionPrinciple::MedicalCheckups,
];

impl ProtectionPrinciple {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Time => "Time",
            Self::Distance => "Distance",
            Self::Shielding => "Shielding",
            Self::Monitoring => "Monitoring",
            Self::MedicalCheckups => "Medical Check-ups",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Time => "Minimize the time spent in radiation-exposed areas.",
            Self::Distance => "Increase distance from the radiation source to reduce exposure.",
            Self::Shielding => "Use protective barriers (lead, concrete, or water) to block radiation.",
            Self::Monitoring => "Regularly monitor radiation levels in areas where exposure is possible.",
            Self::MedicalCheckups => "Schedule frequent medical check-ups if exposed to ionizing radiation over time.",
        }
    }
}

/// Name and description of one principle, as shown in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProtectionEntry {
    pub name: &'static str,
    pub description: &'static str,
}

impl From<ProtectionPrinciple> for ProtectionEntry {
    fn from(principle: ProtectionPrinciple) -> Self {
        Self {
            name: principle.name(),
            description: principle.description(),
        }
    }
}

/// All principles, always in the same order.
#[must_use]
pub fn all_principles() -> &'static [ProtectionPrinciple] {
    &ALL_PRINCIPLES
}

/// `(name, description)` pairs in catalog order.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    all_principles().iter().map(|p| (p.name(), p.description()))
}
