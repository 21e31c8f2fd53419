//! Data Transfer Objects for risk endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::ComplianceRiskAnalysis;
use crate::domain::foundation::{RiskLevel, ValidationError};
use crate::domain::input::{require_fields, UploadedDocument};
use crate::domain::recommendation::ActionItem;
use crate::domain::risk::{RemediationTimeline, RiskFactors, TriagedExposure};

use super::super::request::{is_provided, take_provided};

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /risk-analysis`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysisRequest {
    #[serde(default)]
    pub file_data: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
}

impl RiskAnalysisRequest {
    pub fn into_document(self) -> Result<UploadedDocument, ValidationError> {
        require_fields(&[
            ("fileData", is_provided(&self.file_data)),
            ("fileName", is_provided(&self.file_name)),
        ])?;
        UploadedDocument::new(take_provided(self.file_name), take_provided(self.file_data))
    }
}

/// Body of `POST /compliance-triage`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageRequest {
    #[serde(default)]
    pub csv_data: Option<String>,
}

impl TriageRequest {
    pub fn into_csv(self) -> Result<String, ValidationError> {
        require_fields(&[("csvData", is_provided(&self.csv_data))])?;
        Ok(take_provided(self.csv_data))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

/// Raw sub-scores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceMetrics {
    pub regulatory_compliance: f64,
    pub data_privacy: f64,
    pub environmental_impact: f64,
    pub operational_risk: f64,
}

impl From<&RiskFactors> for ComplianceMetrics {
    fn from(f: &RiskFactors) -> Self {
        Self {
            regulatory_compliance: f.regulatory(),
            data_privacy: f.privacy(),
            environmental_impact: f.environmental(),
            operational_risk: f.operational(),
        }
    }
}

/// Phased remediation plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineView {
    pub immediate: String,
    pub short_term: String,
    pub medium_term: String,
    pub long_term: String,
}

impl From<RemediationTimeline> for TimelineView {
    fn from(t: RemediationTimeline) -> Self {
        Self {
            immediate: t.immediate.to_string(),
            short_term: t.short_term.to_string(),
            medium_term: t.medium_term.to_string(),
            long_term: t.long_term.to_string(),
        }
    }
}

/// Assessment plus the supporting detail shown on the risk dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysisView {
    pub file_name: String,
    pub overall_score: f64,
    pub level: RiskLevel,
    pub key_areas: Vec<String>,
    pub recommendations: Vec<String>,
    pub action_items: Vec<ActionItem>,
    pub compliance_metrics: ComplianceMetrics,
    pub timeline: TimelineView,
    pub company_risk_data: Vec<TriagedExposure>,
}

impl From<ComplianceRiskAnalysis> for RiskAnalysisView {
    fn from(result: ComplianceRiskAnalysis) -> Self {
        let assessment = result.assessment;
        Self {
            file_name: result.file_name,
            overall_score: assessment.overall_score,
            level: assessment.level,
            key_areas: assessment
                .key_areas
                .iter()
                .map(|a| a.key_area_label().to_string())
                .collect(),
            compliance_metrics: ComplianceMetrics::from(&assessment.factors),
            recommendations: assessment.recommendations,
            action_items: assessment.action_items,
            timeline: result.timeline.into(),
            company_risk_data: result.company_risk_data,
        }
    }
}

/// Response of `POST /risk-analysis`.
#[derive(Debug, Clone, Serialize)]
pub struct RiskAnalysisResponse {
    pub success: bool,
    pub analysis: RiskAnalysisView,
}

/// Response of `POST /compliance-triage`.
#[derive(Debug, Clone, Serialize)]
pub struct TriageResponse {
    pub success: bool,
    pub results: Vec<TriagedExposure>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_file_name_lists_both_fields() {
        let request: RiskAnalysisRequest =
            serde_json::from_value(json!({ "fileData": "abc" })).unwrap();
        let err = request.into_document().unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields: fileData, fileName");
    }

    #[test]
    fn empty_file_data_counts_as_missing() {
        let request: RiskAnalysisRequest =
            serde_json::from_value(json!({ "fileData": "", "fileName": "a.csv" })).unwrap();
        assert!(matches!(
            request.into_document(),
            Err(ValidationError::MissingFields { .. })
        ));
    }

    #[test]
    fn valid_request_builds_document() {
        let request: RiskAnalysisRequest =
            serde_json::from_value(json!({ "fileData": "abc", "fileName": "a.csv" })).unwrap();
        let doc = request.into_document().unwrap();
        assert_eq!(doc.file_name(), "a.csv");
        assert_eq!(doc.content(), "abc");
    }

    #[test]
    fn timeline_serializes_camel_case() {
        let view = TimelineView::from(RemediationTimeline::for_level(RiskLevel::Low));
        let value = serde_json::to_value(view).unwrap();
        assert_eq!(value["immediate"], "Initial risk assessment and planning");
        assert_eq!(value["shortTerm"], "Implement recommended improvements");
    }
}
