//! Risk analysis handlers.

mod analyze_compliance_risk;
mod generate_risk_report;
mod triage_compliance_exposure;

pub use analyze_compliance_risk::{
    AnalyzeComplianceRiskCommand, AnalyzeComplianceRiskHandler, ComplianceRiskAnalysis,
};
pub use generate_risk_report::GenerateRiskReportHandler;
pub use triage_compliance_exposure::{
    TriageComplianceExposureCommand, TriageComplianceExposureHandler,
};
