//! Scoring adapters - random (optionally seeded) and fixed implementations
//! of the `RiskScorer` and `ImplementationEstimator` ports.

mod estimator;
mod risk_scorer;

pub use estimator::{FixedImplementationEstimator, RandomImplementationEstimator};
pub use risk_scorer::{FixedRiskScorer, RandomRiskScorer};
