//! AnalyzeScenarioHandler - projects compliance costs under a what-if scenario.

use std::sync::Arc;

use crate::domain::foundation::{AnalysisError, ResolvedStrictness, FALLBACK_MULTIPLIER};
use crate::domain::input::ScenarioParameters;
use crate::domain::recommendation::scenario_advice;
use crate::domain::scenario::{CompanyProfile, ScenarioProjection, ScenarioProjector};

/// Command to analyze one scenario.
#[derive(Debug, Clone)]
pub struct AnalyzeScenarioCommand {
    pub parameters: ScenarioParameters,
}

/// Result of a scenario analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioAnalysis {
    pub parameters: ScenarioParameters,
    pub companies: Vec<CompanyProfile>,
    pub projection: ScenarioProjection,
    pub recommendations: Vec<String>,
    /// Fallback decisions taken while interpreting the parameters.
    pub warnings: Vec<String>,
}

/// Handler for what-if scenario projection over a company portfolio.
pub struct AnalyzeScenarioHandler {
    companies: Arc<[CompanyProfile]>,
    reject_unknown_strictness: bool,
}

impl AnalyzeScenarioHandler {
    pub fn new(companies: Arc<[CompanyProfile]>, reject_unknown_strictness: bool) -> Self {
        Self {
            companies,
            reject_unknown_strictness,
        }
    }

    pub fn handle(&self, cmd: AnalyzeScenarioCommand) -> Result<ScenarioAnalysis, AnalysisError> {
        let parameters = cmd.parameters;
        let mut warnings = Vec::new();

        if let ResolvedStrictness::Fallback { label } = parameters.strictness() {
            if self.reject_unknown_strictness {
                return Err(AnalysisError::UnknownStrictness(label.clone()));
            }
            tracing::warn!(
                strictness = %label,
                multiplier = FALLBACK_MULTIPLIER,
                "Unrecognized strictness level, using fallback multiplier"
            );
            warnings.push(format!(
                "Unrecognized strictness level '{}'; using multiplier {}",
                label, FALLBACK_MULTIPLIER
            ));
        }

        let timeline_years = parameters.timeline_years();
        let projection = ScenarioProjector::project(
            &self.companies,
            parameters.strictness().multiplier(),
            timeline_years,
        );
        let recommendations = scenario_advice(parameters.strictness().level(), timeline_years);

        tracing::info!(
            scenario = %parameters.scenario(),
            strictness = %parameters.strictness().label(),
            timeline_years,
            total_cost = projection.total_cost,
            risk_level = %projection.risk_level,
            "Scenario analysis completed"
        );

        Ok(ScenarioAnalysis {
            companies: self.companies.to_vec(),
            parameters,
            projection,
            recommendations,
            warnings,
        })
    }
}
