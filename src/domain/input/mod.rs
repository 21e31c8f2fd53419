//! Input Normalizer - request payloads as validated, opaque domain inputs.
//!
//! Uploaded file content and CSV text are not parsed here. They are only
//! checked for presence and carried through to the engines untouched.

use crate::domain::foundation::{ResolvedStrictness, ValidationError};

/// Checks a set of `(name, present)` pairs.
///
/// When anything is missing the error lists every required field, so callers
/// always see the full contract of the endpoint they hit.
pub fn require_fields(fields: &[(&str, bool)]) -> Result<(), ValidationError> {
    if fields.iter().all(|(_, present)| *present) {
        return Ok(());
    }
    Err(ValidationError::missing_fields(
        fields.iter().map(|(name, _)| *name),
    ))
}

fn non_blank(field: &str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(value)
}

/// An uploaded compliance document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    file_name: String,
    content: String,
}

impl UploadedDocument {
    pub fn new(
        file_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            file_name: non_blank("fileName", file_name.into())?,
            content: non_blank("fileData", content.into())?,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Tabular strategy data plus the company the caller is looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategySelection {
    csv_data: String,
    selected_company: String,
}

impl StrategySelection {
    pub fn new(
        csv_data: impl Into<String>,
        selected_company: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            csv_data: non_blank("csvData", csv_data.into())?,
            selected_company: non_blank("selectedCompany", selected_company.into())?,
        })
    }

    pub fn csv_data(&self) -> &str {
        &self.csv_data
    }

    pub fn selected_company(&self) -> &str {
        &self.selected_company
    }
}

/// Knobs for a what-if regulatory scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioParameters {
    scenario: String,
    strictness: ResolvedStrictness,
    timeline_years: u32,
}

impl ScenarioParameters {
    pub fn new(
        scenario: impl Into<String>,
        strictness_label: &str,
        timeline_years: u32,
    ) -> Result<Self, ValidationError> {
        let scenario = non_blank("scenario", scenario.into())?;
        if strictness_label.trim().is_empty() {
            return Err(ValidationError::empty_field("strictness"));
        }
        if timeline_years == 0 {
            return Err(ValidationError::invalid_format(
                "timeline",
                "must be a positive number of years",
            ));
        }
        Ok(Self {
            scenario,
            strictness: ResolvedStrictness::resolve(strictness_label),
            timeline_years,
        })
    }

    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    pub fn strictness(&self) -> &ResolvedStrictness {
        &self.strictness
    }

    pub fn timeline_years(&self) -> u32 {
        self.timeline_years
    }
}
