//! Risk Module - Pure scoring over four weighted risk factors.
//!
//! # Components
//!
//! - `RiskFactors` / `RiskWeights` - sub-scores and their fixed linear weights
//! - `RiskAssessment` - overall score, level, key areas and composed advice
//! - `RemediationTimeline` - phased plan keyed by level
//! - `RiskReport` - the downloadable four-area report
//! - `triage` - compliance cost versus penalty decisions
//!
//! Producing the factors themselves is the job of a `RiskScorer` port
//! implementation; nothing here draws random numbers.

mod assessment;
mod factors;
mod report;
mod timeline;
mod triage;

pub use assessment::RiskAssessment;
pub use factors::{RiskArea, RiskFactors, RiskWeights, DEFAULT_KEY_AREAS, KEY_AREA_THRESHOLD};
pub use report::{RiskReport, RiskReportRow, REPORT_HEADER};
pub use timeline::RemediationTimeline;
pub use triage::{triage, ComplianceExposure, TriageAction, TriagedExposure};
