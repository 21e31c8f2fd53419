//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RiskScorer` - Pluggable scoring strategy for uploaded documents
//! - `ImplementationEstimator` - Injectable rollout duration estimate
//! - `ExposureReader` - Fixed-schema compliance exposure ingestion
//! - `StrategyReader` - Fixed-schema per-company strategy ingestion

mod exposure_reader;
mod implementation_estimator;
mod risk_scorer;
mod strategy_reader;

pub use exposure_reader::ExposureReader;
pub use implementation_estimator::ImplementationEstimator;
pub use risk_scorer::RiskScorer;
pub use strategy_reader::StrategyReader;
