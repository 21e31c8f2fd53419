//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `scoring` - Random (seedable) and fixed risk scorers and estimators
//! - `csv` - Exposure and strategy ingestion, report rendering
//! - `http` - Axum REST API

pub mod csv;
pub mod http;
pub mod scoring;

pub use self::csv::{
    render_risk_report, render_triage_report, CsvExposureReader, CsvStrategyReader,
};
pub use self::scoring::{
    FixedImplementationEstimator, FixedRiskScorer, RandomImplementationEstimator, RandomRiskScorer,
};
