//! Report renderer port: Trait for turning an assessment into output text.

use std::fmt;
use std::str::FromStr;

use crate::domain::Assessment;
use crate::RadwarnError;

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = RadwarnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(RadwarnError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Trait for report rendering.
///
/// Implementations receive a finished assessment and must not recompute
/// any of it.
pub trait ReportRenderer: Send + Sync {
    /// Format produced by this renderer.
    fn format(&self) -> OutputFormat;

    /// Render one assessment.
    ///
    /// # Errors
    /// Returns `RadwarnError::Serialization` if the output cannot be encoded.
    fn render(&self, assessment: &Assessment) -> Result<String, RadwarnError>;
}

impl<R> ReportRenderer for Box<R>
where
    R: ReportRenderer + ?Sized,
{
    fn format(&self) -> OutputFormat {
        (**self).format()
    }

    fn render(&self, assessment: &Assessment) -> Result<String, RadwarnError> {
        (**self).render(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().expect("Should parse"), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().expect("Should parse"), OutputFormat::Json);
        assert!(matches!(
            "sarif".parse::<OutputFormat>(),
            Err(RadwarnError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_format_display_round_trip() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(format.to_string().parse::<OutputFormat>().expect("Should parse"), format);
        }
    }
}
