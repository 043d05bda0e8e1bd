//! JSON renderer: Machine-readable assessment output.

use crate::domain::Assessment;
use crate::ports::{OutputFormat, ReportRenderer};
use crate::RadwarnError;

#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    /// Pretty-printed output.
    #[must_use]
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line output, one assessment per line.
    #[must_use]
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for JsonRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn render(&self, assessment: &Assessment) -> Result<String, RadwarnError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(assessment)?
        } else {
            serde_json::to_string(assessment)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CanonicalDose, DoseUnit, RadiationType};

    fn sample() -> Assessment {
        Assessment::new(
            1.0,
            DoseUnit::Curie,
            Some(RadiationType::Beta),
            CanonicalDose::from_sieverts(45.0),
        )
    }

    #[test]
    fn test_json_fields() {
        let out = JsonRenderer::new().render(&sample()).expect("Should render");
        let value: serde_json::Value = serde_json::from_str(&out).expect("Should be valid JSON");

        assert_eq!(value["unit"], "Curie");
        assert_eq!(value["radiation_type"], "Beta");
        assert_eq!(value["tier"], "Lethal");
        assert_eq!(value["limit_status"], "ExceedsOccupational");
        assert_eq!(value["occupational_limit_msv"], 50.0);
        assert!(value["assessed_at"].is_string());
    }

    #[test]
    fn test_compact_is_single_line() {
        let out = JsonRenderer::compact().render(&sample()).expect("Should render");
        assert!(!out.contains('\n'));
    }
}
