//! AnalyzeComplianceRiskHandler - scores an uploaded compliance document.
//!
//! Produces the full assessment plus the remediation timeline and the
//! exposure triage for the reference portfolio.

use std::sync::Arc;

use crate::domain::foundation::AnalysisError;
use crate::domain::input::UploadedDocument;
use crate::domain::risk::{
    triage, ComplianceExposure, RemediationTimeline, RiskAssessment, TriagedExposure,
};
use crate::ports::RiskScorer;

/// Command to analyze one uploaded document.
#[derive(Debug, Clone)]
pub struct AnalyzeComplianceRiskCommand {
    pub document: UploadedDocument,
}

/// Result of a compliance risk analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceRiskAnalysis {
    pub file_name: String,
    pub assessment: RiskAssessment,
    pub timeline: RemediationTimeline,
    pub company_risk_data: Vec<TriagedExposure>,
}

/// Handler for compliance risk analysis.
pub struct AnalyzeComplianceRiskHandler {
    scorer: Arc<dyn RiskScorer>,
}

impl AnalyzeComplianceRiskHandler {
    pub fn new(scorer: Arc<dyn RiskScorer>) -> Self {
        Self { scorer }
    }

    pub fn handle(
        &self,
        cmd: AnalyzeComplianceRiskCommand,
    ) -> Result<ComplianceRiskAnalysis, AnalysisError> {
        let factors = self.scorer.score(&cmd.document)?;
        let assessment = RiskAssessment::assess(factors);

        tracing::info!(
            file_name = %cmd.document.file_name(),
            overall_score = assessment.overall_score,
            level = %assessment.level,
            recommendations = assessment.recommendations.len(),
            action_items = assessment.action_items.len(),
            "Compliance risk analysis completed"
        );

        Ok(ComplianceRiskAnalysis {
            file_name: cmd.document.file_name().to_string(),
            timeline: RemediationTimeline::for_level(assessment.level),
            company_risk_data: triage(&ComplianceExposure::reference_portfolio()),
            assessment,
        })
    }
}
