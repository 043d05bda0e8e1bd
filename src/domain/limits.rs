//! Annual dose limits and the comparison against them.

use serde::{Deserialize, Serialize};

use super::exposure::{format_quantity, CanonicalDose};

/// Occupational annual dose limit (50 mSv).
pub const OCCUPATIONAL_ANNUAL_LIMIT: CanonicalDose = CanonicalDose::from_sieverts(0.05);

/// Public annual dose limit (1 mSv).
pub const PUBLIC_ANNUAL_LIMIT: CanonicalDose = CanonicalDose::from_sieverts(0.001);

/// One of the two regulatory annual limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnualLimit {
    Occupational,
    Public,
}

impl AnnualLimit {
    #[must_use]
    pub fn dose(&self) -> CanonicalDose {
        match self {
            Self::Occupational => OCCUPATIONAL_ANNUAL_LIMIT,
            Self::Public => PUBLIC_ANNUAL_LIMIT,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Occupational => "occupational",
            Self::Public => "public",
        }
    }
}

/// Where a dose sits relative to the annual limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimitStatus {
    ExceedsOccupational,
    ExceedsPublic,
    WithinLimits,
}

impl LimitStatus {
    /// The most severe limit exceeded, if any.
    #[must_use]
    pub fn exceeded_limit(&self) -> Option<AnnualLimit> {
        match self {
            Self::ExceedsOccupational => Some(AnnualLimit::Occupational),
            Self::ExceedsPublic => Some(AnnualLimit::Public),
            Self::WithinLimits => None,
        }
    }

    /// User-facing summary, with the exceeded limit in mSv.
    #[must_use]
    pub fn message(&self) -> String {
        match self.exceeded_limit() {
            Some(limit) => format!(
                "Warning: Your dose exceeds the {} annual dose limit ({} mSv).",
                limit.label(),
                format_quantity(limit.dose().millisieverts())
            ),
            None => "Your dose is within safe limits.".to_string(),
        }
    }
}

/// Compare a dose against the annual limits.
///
/// Both thresholds are exclusive: a dose equal to a limit is within it.
#[must_use]
pub fn compare_to_limits(dose: CanonicalDose) -> LimitStatus {
    if dose > OCCUPATIONAL_ANNUAL_LIMIT {
        LimitStatus::ExceedsOccupational
    } else if dose > PUBLIC_ANNUAL_LIMIT {
        LimitStatus::ExceedsPublic
    } else {
        LimitStatus::WithinLimits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(sv: f64) -> LimitStatus {
        compare_to_limits(CanonicalDose::from_sieverts(sv))
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(status(0.05), LimitStatus::ExceedsPublic);
        assert_eq!(status(0.001), LimitStatus::WithinLimits);
    }

    #[test]
    fn test_limit_comparison() {
        assert_eq!(status(0.0500001), LimitStatus::ExceedsOccupational);
        assert_eq!(status(0.0005), LimitStatus::WithinLimits);
        assert_eq!(status(0.0011), LimitStatus::ExceedsPublic);
        assert_eq!(status(0.02), LimitStatus::ExceedsPublic);
        assert_eq!(status(-1.0), LimitStatus::WithinLimits);
    }

    #[test]
    fn test_messages_quote_limits_in_millisieverts() {
        assert_eq!(
            LimitStatus::ExceedsOccupational.message(),
            "Warning: Your dose exceeds the occupational annual dose limit (50 mSv)."
        );
        assert_eq!(
            LimitStatus::ExceedsPublic.message(),
            "Warning: Your dose exceeds the public annual dose limit (1 mSv)."
        );
        assert_eq!(
            LimitStatus::WithinLimits.message(),
            "Your dose is within safe limits."
        );
    }
}
