//! ImplementationEstimator port - how long a strategy takes to roll out.

use crate::domain::cost_benefit::Strategy;
use crate::domain::foundation::AnalysisError;

/// Estimates implementation time for a mitigation strategy.
pub trait ImplementationEstimator: Send + Sync {
    /// Whole months from kickoff to completion.
    fn estimate_months(&self, strategy: &Strategy) -> Result<u32, AnalysisError>;
}
