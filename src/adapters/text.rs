//! Plain-text renderer: Four-panel report for terminals.
//!
//! Panels follow the warning form: Health Warning, Recommended Action,
//! General Protection Solutions, Annual Dose Limit.

use std::fmt::Write;

use crate::domain::{format_quantity, Assessment};
use crate::ports::{OutputFormat, ReportRenderer};
use crate::RadwarnError;

pub const REPORT_TITLE: &str = "Radiation Health Effect Warning System";

#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn section(out: &mut String, title: &str, body: &str) {
        // Writing to a String cannot fail.
        let _ = writeln!(out);
        let _ = writeln!(out, "[ {title} ]");
        let _ = writeln!(out, "{body}");
    }
}

impl ReportRenderer for TextRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Text
    }

    fn render(&self, assessment: &Assessment) -> Result<String, RadwarnError> {
        let mut out = String::new();

        let radiation = assessment
            .radiation_type
            .map(|t| format!(" ({t})"))
            .unwrap_or_default();
        let _ = writeln!(out, "{REPORT_TITLE}");
        let _ = writeln!(
            out,
            "Exposure: {} {}{} = {} ({} mSv)",
            format_quantity(assessment.raw_value),
            assessment.unit,
            radiation,
            assessment.dose,
            format_quantity(assessment.dose.millisieverts())
        );
        let _ = writeln!(out, "Severity: {}", assessment.tier);

        Self::section(&mut out, "Health Warning", assessment.health_effect);
        Self::section(&mut out, "Recommended Action", assessment.recommended_action);

        let protection = assessment
            .protection
            .iter()
            .map(|entry| format!("{}: {}", entry.name, entry.description))
            .collect::<Vec<_>>()
            .join("\n");
        Self::section(&mut out, "General Protection Solutions", &protection);

        let limits = format!(
            "{}\nOccupational limit: {} mSv | Public limit: {} mSv",
            assessment.limit_message,
            format_quantity(assessment.occupational_limit_msv),
            format_quantity(assessment.public_limit_msv)
        );
        Self::section(&mut out, "Annual Dose Limit", &limits);

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CanonicalDose, DoseUnit, RadiationType};

    fn render(raw: f64, unit: DoseUnit, radiation_type: Option<RadiationType>, sv: f64) -> String {
        let assessment = Assessment::new(raw, unit, radiation_type, CanonicalDose::from_sieverts(sv));
        TextRenderer::new().render(&assessment).expect("Should render")
    }

    #[test]
    fn test_report_has_four_panels() {
        let report = render(2.0, DoseUnit::Roentgen, Some(RadiationType::Gamma), 0.02);

        assert!(report.starts_with(REPORT_TITLE));
        assert!(report.contains("Exposure: 2 R (Gamma) = 0.02 Sv (20 mSv)"));
        assert!(report.contains("Severity: NEGLIGIBLE"));
        for panel in [
            "[ Health Warning ]",
            "[ Recommended Action ]",
            "[ General Protection Solutions ]",
            "[ Annual Dose Limit ]",
        ] {
            assert!(report.contains(panel), "missing panel {panel}");
        }
    }

    #[test]
    fn test_report_lists_protection_and_limits() {
        let report = render(2.0, DoseUnit::Roentgen, Some(RadiationType::Gamma), 0.02);

        assert!(report.contains("Time: Minimize the time spent in radiation-exposed areas."));
        assert!(report.contains("Medical Check-ups: Schedule frequent medical check-ups"));
        assert!(report.contains("exceeds the public annual dose limit (1 mSv)"));
        assert!(report.contains("Occupational limit: 50 mSv | Public limit: 1 mSv"));
    }

    #[test]
    fn test_report_without_radiation_type() {
        let report = render(12.0, DoseUnit::Gray, None, 12.0);

        assert!(report.contains("Exposure: 12 Gy = 12 Sv (12000 mSv)"));
        assert!(report.contains("Severity: LETHAL"));
        assert!(report.contains("occupational annual dose limit (50 mSv)"));
    }
}
