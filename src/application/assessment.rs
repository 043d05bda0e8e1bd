//! Assessment service: Runs one submission through the dosimetry pipeline.
//!
//! This service coordinates:
//! - Parsing and validation of the raw inputs
//! - Unit normalization
//! - Severity classification and annual limit comparison
//! - Report rendering

use crate::domain::{
    conversion, effective_dose, parse_raw_value, Assessment, CanonicalDose, DoseError, DoseUnit,
    ExposureReading, RadiationType,
};
use crate::ports::ReportRenderer;
use crate::RadwarnError;

/// Service for assessing exposure readings.
///
/// Holds no state besides its renderer; every request is independent.
pub struct AssessmentService<R>
where
    R: ReportRenderer,
{
    renderer: R,
}

impl<R> AssessmentService<R>
where
    R: ReportRenderer,
{
    /// Create a new assessment service.
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Renderer used by [`submit`](Self::submit).
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Assess a typed reading.
    ///
    /// # Errors
    /// Returns `DoseError::DoseOutOfRange` if the converted dose overflows.
    pub fn assess(&self, reading: ExposureReading) -> Result<Assessment, DoseError> {
        let dose = Self::finite_dose(reading.to_canonical(), reading.raw_value)?;
        Ok(self.finish(reading.raw_value, reading.unit, Some(reading.radiation_type), dose))
    }

    /// Assess the three raw inputs of the warning form.
    ///
    /// Order of checks: numeric value, unit, radiation type (only where the
    /// unit needs it). The first failure aborts the request.
    ///
    /// # Errors
    /// Returns the `DoseError` of the first rejected input.
    pub fn assess_input(
        &self,
        value_text: &str,
        unit_token: &str,
        radiation_token: &str,
    ) -> Result<Assessment, DoseError> {
        let raw_value = parse_raw_value(value_text).map_err(|e| {
            tracing::warn!("Rejected exposure value: {}", e);
            e
        })?;

        let (unit, radiation_type) =
            conversion::resolve_tokens(unit_token, radiation_token).map_err(|e| {
                tracing::warn!("Rejected exposure selectors: {}", e);
                e
            })?;

        if radiation_type.is_none() {
            tracing::debug!(
                "Ignoring unrecognized radiation type {:?} for {} reading",
                radiation_token,
                unit
            );
        }

        let dose = conversion::convert_resolved(raw_value, unit, radiation_type)
            .ok_or_else(|| DoseError::UnknownRadiationType(radiation_token.trim().to_string()))?;
        let dose = Self::finite_dose(dose, raw_value)?;

        Ok(self.finish(raw_value, unit, radiation_type, dose))
    }

    /// Assess the raw inputs and render the report.
    ///
    /// # Errors
    /// Returns `RadwarnError::Dose` for rejected input, or the renderer's error.
    pub fn submit(
        &self,
        value_text: &str,
        unit_token: &str,
        radiation_token: &str,
    ) -> Result<String, RadwarnError> {
        let assessment = self.assess_input(value_text, unit_token, radiation_token)?;
        self.renderer.render(&assessment)
    }

    /// Weight a dose given as text by a radiation-type token.
    ///
    /// Returns the weighted dose and the recognized type (`None` means the
    /// default weight of 1 was applied).
    ///
    /// # Errors
    /// Returns `DoseError::InvalidNumericInput` if the dose is not a number,
    /// or `DoseError::DoseOutOfRange` if weighting overflows it.
    pub fn effective_dose_input(
        &self,
        dose_text: &str,
        radiation_token: &str,
    ) -> Result<(CanonicalDose, Option<RadiationType>), DoseError> {
        let sieverts = parse_raw_value(dose_text)?;
        let dose = CanonicalDose::from_sieverts(sieverts);
        let radiation_type = radiation_token.parse::<RadiationType>().ok();
        if radiation_type.is_none() {
            tracing::warn!(
                "Unrecognized radiation type {:?}, applying default weighting",
                radiation_token
            );
        }

        let weighted = Self::finite_dose(
            effective_dose::effective_dose_or_default(dose, radiation_type),
            sieverts,
        )?;
        tracing::debug!("Effective dose: {} -> {}", dose, weighted);
        Ok((weighted, radiation_type))
    }

    fn finite_dose(dose: CanonicalDose, raw_value: f64) -> Result<CanonicalDose, DoseError> {
        CanonicalDose::checked(dose.sieverts(), raw_value).map_err(|e| {
            tracing::warn!("Rejected exposure value: {}", e);
            e
        })
    }

    fn finish(
        &self,
        raw_value: f64,
        unit: DoseUnit,
        radiation_type: Option<RadiationType>,
        dose: CanonicalDose,
    ) -> Assessment {
        tracing::debug!("Converted {} {} to {}", raw_value, unit, dose);

        let assessment = Assessment::new(raw_value, unit, radiation_type, dose);

        tracing::info!(
            "Assessment complete: dose={}, tier={}, limits={:?}",
            assessment.dose,
            assessment.tier,
            assessment.limit_status
        );

        assessment
    }
}
