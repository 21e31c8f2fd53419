//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    AnalyzeComplianceRiskCommand, AnalyzeComplianceRiskHandler, AnalyzeCostBenefitCommand,
    AnalyzeCostBenefitHandler, AnalyzeScenarioCommand, AnalyzeScenarioHandler, CatalogSource,
    ComplianceRiskAnalysis, CostBenefitAnalysis, GenerateRiskReportHandler, ScenarioAnalysis,
    TriageComplianceExposureCommand, TriageComplianceExposureHandler,
};
