//! Application handlers.
//!
//! One command and handler per analysis operation exposed over HTTP.

pub mod cost_benefit;
pub mod risk;
pub mod scenario;

pub use cost_benefit::{
    AnalyzeCostBenefitCommand, AnalyzeCostBenefitHandler, CatalogSource, CostBenefitAnalysis,
};
pub use risk::{
    AnalyzeComplianceRiskCommand, AnalyzeComplianceRiskHandler, ComplianceRiskAnalysis,
    GenerateRiskReportHandler, TriageComplianceExposureCommand, TriageComplianceExposureHandler,
};
pub use scenario::{AnalyzeScenarioCommand, AnalyzeScenarioHandler, ScenarioAnalysis};
