//! Data Transfer Objects for the scenario endpoint.

use serde::{Deserialize, Serialize};

use crate::application::handlers::ScenarioAnalysis;
use crate::domain::foundation::{RiskLevel, ValidationError};
use crate::domain::input::{require_fields, ScenarioParameters};
use crate::domain::recommendation::COMPLIANCE_ACTIONS;
use crate::domain::scenario::{round_cents, CompanyProfile, CompanyProjection};

use super::super::request::{is_provided, take_provided};

/// Body of `POST /scenario`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRequest {
    #[serde(default)]
    pub scenario: Option<String>,
    #[serde(default)]
    pub strictness: Option<String>,
    /// Whole years; zero counts as missing.
    #[serde(default)]
    pub timeline: Option<u32>,
}

impl ScenarioRequest {
    pub fn into_parameters(self) -> Result<ScenarioParameters, ValidationError> {
        let timeline = self.timeline.filter(|years| *years > 0);
        require_fields(&[
            ("scenario", is_provided(&self.scenario)),
            ("strictness", is_provided(&self.strictness)),
            ("timeline", timeline.is_some()),
        ])?;
        ScenarioParameters::new(
            take_provided(self.scenario),
            &take_provided(self.strictness),
            timeline.unwrap_or_default(),
        )
    }
}

/// A company with its projected cost, rounded to cents.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceCostView {
    #[serde(flatten)]
    pub company: CompanyProfile,
    pub predicted_cost: f64,
}

impl From<CompanyProjection> for ComplianceCostView {
    fn from(projection: CompanyProjection) -> Self {
        Self {
            company: projection.company,
            predicted_cost: round_cents(projection.predicted_cost),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioView {
    pub scenario: String,
    pub summary: String,
    pub potential_costs: String,
    pub total_cost: f64,
    pub timeline: String,
    pub strictness: String,
    pub risk_level: RiskLevel,
    pub risk_score: f64,
    pub recommendations: Vec<String>,
    pub company_inputs: Vec<CompanyProfile>,
    pub compliance_costs: Vec<ComplianceCostView>,
    pub compliance_actions: Vec<String>,
    pub warnings: Vec<String>,
}

impl From<ScenarioAnalysis> for ScenarioView {
    fn from(analysis: ScenarioAnalysis) -> Self {
        let projection = analysis.projection;
        let parameters = analysis.parameters;
        Self {
            scenario: parameters.scenario().to_string(),
            summary: format!(
                "Based on the scenario analysis, the estimated operational impact is {}.",
                projection.risk_level.label().to_lowercase()
            ),
            potential_costs: format!("${:.1} million", projection.total_cost),
            total_cost: projection.total_cost,
            timeline: format!("{} years", parameters.timeline_years()),
            strictness: parameters.strictness().label().to_string(),
            risk_level: projection.risk_level,
            risk_score: projection.risk_score,
            recommendations: analysis.recommendations,
            company_inputs: analysis.companies,
            compliance_costs: projection
                .projections
                .into_iter()
                .map(ComplianceCostView::from)
                .collect(),
            compliance_actions: COMPLIANCE_ACTIONS.iter().map(|s| s.to_string()).collect(),
            warnings: analysis.warnings,
        }
    }
}

/// Response of `POST /scenario`.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResponse {
    pub success: bool,
    pub analysis: ScenarioView,
}
