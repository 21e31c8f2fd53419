//! ExposureReader port - compliance exposures from tabular text.

use crate::domain::foundation::AnalysisError;
use crate::domain::risk::ComplianceExposure;

/// Reads compliance exposures from uploaded tabular data.
///
/// Only the fixed `company_name, compliance_cost, penalty_cost` schema is
/// understood. Anything else is an input error.
pub trait ExposureReader: Send + Sync {
    fn read_exposures(&self, data: &str) -> Result<Vec<ComplianceExposure>, AnalysisError>;
}
