//! RiskScorer port - turns an uploaded document into risk sub-scores.

use crate::domain::foundation::AnalysisError;
use crate::domain::input::UploadedDocument;
use crate::domain::risk::RiskFactors;

/// Scoring strategy for compliance documents.
///
/// Implementations decide how the four sub-scores are produced. The content
/// reaching `score` has already been checked for presence; it is otherwise
/// opaque.
pub trait RiskScorer: Send + Sync {
    /// Produces four sub-scores, each within `[0, 100]`.
    fn score(&self, document: &UploadedDocument) -> Result<RiskFactors, AnalysisError>;
}
