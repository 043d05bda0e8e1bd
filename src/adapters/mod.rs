//! Adapters layer: Concrete implementations of ports.
//!
//! - `text`: four-panel plain-text report
//! - `json`: `serde_json` encoding of the assessment

pub mod json;
pub mod text;

use crate::ports::{OutputFormat, ReportRenderer};

pub use json::JsonRenderer;
pub use text::TextRenderer;

/// Renderer for the requested format.
///
/// With `one_per_line`, JSON reports are compact so a session's output reads
/// as JSON lines.
#[must_use]
pub fn renderer_for(format: OutputFormat, one_per_line: bool) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer::new()),
        OutputFormat::Json if one_per_line => Box::new(JsonRenderer::compact()),
        OutputFormat::Json => Box::new(JsonRenderer::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Assessment, CanonicalDose, DoseUnit};

    #[test]
    fn test_renderer_for_reports_its_format() {
        assert_eq!(renderer_for(OutputFormat::Text, false).format(), OutputFormat::Text);
        assert_eq!(renderer_for(OutputFormat::Json, true).format(), OutputFormat::Json);
    }

    #[test]
    fn test_one_per_line_json_is_compact() {
        let assessment =
            Assessment::new(2.0, DoseUnit::Sievert, None, CanonicalDose::from_sieverts(2.0));

        let lines = renderer_for(OutputFormat::Json, true)
            .render(&assessment)
            .expect("Should render");
        assert_eq!(lines.lines().count(), 1);

        let pretty = renderer_for(OutputFormat::Json, false)
            .render(&assessment)
            .expect("Should render");
        assert!(pretty.lines().count() > 1);
    }
}
