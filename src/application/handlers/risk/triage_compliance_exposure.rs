//! TriageComplianceExposureHandler - fix-or-accept decisions for uploaded exposures.

use std::sync::Arc;

use crate::domain::foundation::AnalysisError;
use crate::domain::risk::{triage, TriagedExposure};
use crate::ports::ExposureReader;

/// Command carrying the raw exposure table.
#[derive(Debug, Clone)]
pub struct TriageComplianceExposureCommand {
    pub csv_data: String,
}

pub struct TriageComplianceExposureHandler {
    reader: Arc<dyn ExposureReader>,
}

impl TriageComplianceExposureHandler {
    pub fn new(reader: Arc<dyn ExposureReader>) -> Self {
        Self { reader }
    }

    pub fn handle(
        &self,
        cmd: TriageComplianceExposureCommand,
    ) -> Result<Vec<TriagedExposure>, AnalysisError> {
        let exposures = self.reader.read_exposures(&cmd.csv_data)?;
        let results = triage(&exposures);
        tracing::info!(companies = results.len(), "Compliance exposure triage completed");
        Ok(results)
    }
}
