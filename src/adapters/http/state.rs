//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::adapters::csv::{CsvExposureReader, CsvStrategyReader};
use crate::adapters::scoring::{
    FixedImplementationEstimator, FixedRiskScorer, RandomImplementationEstimator, RandomRiskScorer,
};
use crate::application::handlers::{
    AnalyzeComplianceRiskHandler, AnalyzeCostBenefitHandler, AnalyzeScenarioHandler,
    GenerateRiskReportHandler, TriageComplianceExposureHandler,
};
use crate::config::{AppConfig, ScoringMode};
use crate::domain::cost_benefit::{reference_catalog, Strategy};
use crate::domain::foundation::ValidationError;
use crate::domain::risk::RiskFactors;
use crate::domain::scenario::CompanyProfile;
use crate::ports::{ExposureReader, ImplementationEstimator, RiskScorer, StrategyReader};

/// Shared application state containing analysis dependencies.
#[derive(Clone)]
pub struct AppState {
    pub risk_scorer: Arc<dyn RiskScorer>,
    pub estimator: Arc<dyn ImplementationEstimator>,
    pub exposure_reader: Arc<dyn ExposureReader>,
    pub strategy_reader: Arc<dyn StrategyReader>,
    pub catalog: Arc<[Strategy]>,
    pub companies: Arc<[CompanyProfile]>,
    pub reject_unknown_strictness: bool,
}

impl AppState {
    /// State over the reference catalog and baseline portfolio.
    pub fn new(
        risk_scorer: Arc<dyn RiskScorer>,
        estimator: Arc<dyn ImplementationEstimator>,
    ) -> Self {
        Self {
            risk_scorer,
            estimator,
            exposure_reader: Arc::new(CsvExposureReader::new()),
            strategy_reader: Arc::new(CsvStrategyReader::new()),
            catalog: reference_catalog().into(),
            companies: CompanyProfile::baseline_portfolio().into(),
            reject_unknown_strictness: false,
        }
    }

    /// Wires scorer and estimator implementations from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ValidationError> {
        let seed = config.scoring.seed;

        let risk_scorer: Arc<dyn RiskScorer> = match config.scoring.mode {
            ScoringMode::Fixed => {
                let f = &config.scoring.fixed_factors;
                let factors =
                    RiskFactors::new(f.regulatory, f.privacy, f.environmental, f.operational)?;
                Arc::new(FixedRiskScorer::new(factors))
            }
            ScoringMode::Random => match seed {
                Some(seed) => Arc::new(RandomRiskScorer::seeded(seed)),
                None => Arc::new(RandomRiskScorer::new()),
            },
        };

        let est = &config.estimation;
        let estimator: Arc<dyn ImplementationEstimator> = match (est.fixed_months, seed) {
            (Some(months), _) => Arc::new(FixedImplementationEstimator::new(months)),
            // Offset so scorer and estimator do not share a stream.
            (None, Some(seed)) => Arc::new(RandomImplementationEstimator::seeded(
                est.min_months,
                est.max_months,
                seed.wrapping_add(1),
            )),
            (None, None) => Arc::new(RandomImplementationEstimator::new(
                est.min_months,
                est.max_months,
            )),
        };

        Ok(Self::new(risk_scorer, estimator)
            .rejecting_unknown_strictness(config.scenario.reject_unknown_strictness))
    }

    pub fn with_catalog(mut self, catalog: Vec<Strategy>) -> Self {
        self.catalog = catalog.into();
        self
    }

    pub fn with_companies(mut self, companies: Vec<CompanyProfile>) -> Self {
        self.companies = companies.into();
        self
    }

    pub fn rejecting_unknown_strictness(mut self, reject: bool) -> Self {
        self.reject_unknown_strictness = reject;
        self
    }

    pub fn analyze_compliance_risk_handler(&self) -> AnalyzeComplianceRiskHandler {
        AnalyzeComplianceRiskHandler::new(self.risk_scorer.clone())
    }

    pub fn generate_risk_report_handler(&self) -> GenerateRiskReportHandler {
        GenerateRiskReportHandler::new()
    }

    pub fn triage_compliance_exposure_handler(&self) -> TriageComplianceExposureHandler {
        TriageComplianceExposureHandler::new(self.exposure_reader.clone())
    }

    pub fn analyze_cost_benefit_handler(&self) -> AnalyzeCostBenefitHandler {
        AnalyzeCostBenefitHandler::new(
            self.catalog.clone(),
            self.strategy_reader.clone(),
            self.estimator.clone(),
        )
    }

    pub fn analyze_scenario_handler(&self) -> AnalyzeScenarioHandler {
        AnalyzeScenarioHandler::new(self.companies.clone(), self.reject_unknown_strictness)
    }
}
