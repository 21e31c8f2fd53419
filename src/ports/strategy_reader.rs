//! StrategyReader port - per-company strategy rows from tabular text.

use crate::domain::cost_benefit::CompanyStrategy;
use crate::domain::foundation::AnalysisError;

/// Reads mitigation strategies from an uploaded table.
///
/// The fixed schema is `company, strategy, cost, projected_savings,
/// waste_reduction`. Returns `Ok(None)` when the upload is not a strategy
/// table at all (no `strategy` column), so callers can rank their own catalog
/// instead. A table that claims the schema but breaks it is an input error.
pub trait StrategyReader: Send + Sync {
    fn read_strategies(&self, data: &str) -> Result<Option<Vec<CompanyStrategy>>, AnalysisError>;
}
