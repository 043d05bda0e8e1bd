//! Domain layer: Dosimetry types and rules.
//!
//! Pure functions over value types. No I/O, no shared mutable state; every
//! lookup table is a `'static` constant, so all of it is safe to call from
//! any thread.

mod assessment;
pub mod conversion;
pub mod effective_dose;
mod exposure;
pub mod limits;
pub mod protection;
pub mod severity;
mod units;

pub use assessment::Assessment;
pub use conversion::{convert_to_sievert, convert_tokens};
pub use effective_dose::{effective_dose, effective_dose_for_token, effective_dose_or_default};
pub use exposure::{format_quantity, parse_raw_value, CanonicalDose, DoseError, ExposureReading};
pub use limits::{compare_to_limits, AnnualLimit, LimitStatus};
pub use protection::{ProtectionEntry, ProtectionPrinciple};
pub use severity::{classify, SeverityTier};
pub use units::{DoseUnit, RadiationType};
