//! Data Transfer Objects for the cost-benefit endpoint.

use serde::{Deserialize, Serialize};

use crate::application::handlers::CostBenefitAnalysis;
use crate::domain::cost_benefit::RankedStrategy;
use crate::domain::foundation::{AnalysisError, ValidationError};
use crate::domain::input::{require_fields, StrategySelection};

use super::super::format::{format_currency, one_decimal};
use super::super::request::{is_provided, take_provided};

/// Body of `POST /cost-benefit`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBenefitRequest {
    #[serde(default)]
    pub csv_data: Option<String>,
    #[serde(default)]
    pub selected_company: Option<String>,
}

impl CostBenefitRequest {
    pub fn into_selection(self) -> Result<StrategySelection, ValidationError> {
        require_fields(&[
            ("csvData", is_provided(&self.csv_data)),
            ("selectedCompany", is_provided(&self.selected_company)),
        ])?;
        StrategySelection::new(take_provided(self.csv_data), take_provided(self.selected_company))
    }
}

/// Display summary of the top-ranked strategy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDataView {
    pub initial_cost: String,
    pub annual_savings: String,
    pub roi: String,
    pub payback_period: String,
    pub implementation_time: String,
}

impl From<&RankedStrategy> for CompanyDataView {
    fn from(best: &RankedStrategy) -> Self {
        Self {
            initial_cost: format_currency(best.strategy.cost),
            annual_savings: format_currency(best.strategy.savings),
            roi: format!("{:.1}%", best.roi),
            payback_period: format!("{:.1} months", best.payback_period_months),
            implementation_time: format!("{} months", best.implementation_months),
        }
    }
}

/// Parallel series for charting, in ranking order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartData {
    pub costs: Vec<f64>,
    pub savings: Vec<f64>,
    pub strategies: Vec<String>,
    pub roi: Vec<f64>,
}

impl ChartData {
    fn from_rankings(rankings: &[RankedStrategy]) -> Self {
        Self {
            costs: rankings.iter().map(|r| r.strategy.cost).collect(),
            savings: rankings.iter().map(|r| r.strategy.savings).collect(),
            strategies: rankings.iter().map(|r| r.strategy.name.clone()).collect(),
            roi: rankings.iter().map(|r| one_decimal(r.roi)).collect(),
        }
    }
}

/// A ranked strategy with its display strings attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyEntryView {
    #[serde(flatten)]
    pub ranked: RankedStrategy,
    pub payback_period: String,
    pub implementation_time: String,
}

impl From<&RankedStrategy> for StrategyEntryView {
    fn from(ranked: &RankedStrategy) -> Self {
        Self {
            payback_period: format!("{:.1} months", ranked.payback_period_months),
            implementation_time: format!("{} months", ranked.implementation_months),
            ranked: ranked.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBenefitView {
    pub selected_company: String,
    pub company_data: CompanyDataView,
    pub roi_rankings: Vec<RankedStrategy>,
    /// Same order as `roi_rankings`.
    pub strategies: Vec<StrategyEntryView>,
    pub recommendations: Vec<String>,
    pub chart_data: ChartData,
    /// `"uploaded"` or `"reference"`.
    pub catalog_source: &'static str,
    pub companies: Vec<String>,
}

impl TryFrom<CostBenefitAnalysis> for CostBenefitView {
    type Error = AnalysisError;

    fn try_from(analysis: CostBenefitAnalysis) -> Result<Self, Self::Error> {
        let company_data = analysis
            .best()
            .map(CompanyDataView::from)
            .ok_or(AnalysisError::EmptyCatalog)?;
        let chart_data = ChartData::from_rankings(&analysis.rankings);
        let strategies = analysis.rankings.iter().map(StrategyEntryView::from).collect();

        Ok(Self {
            selected_company: analysis.selected_company,
            company_data,
            roi_rankings: analysis.rankings,
            strategies,
            recommendations: analysis.recommendations,
            chart_data,
            catalog_source: analysis.catalog_source.label(),
            companies: analysis.companies,
        })
    }
}

/// Response of `POST /cost-benefit`.
#[derive(Debug, Clone, Serialize)]
pub struct CostBenefitResponse {
    pub success: bool,
    pub analysis: CostBenefitView,
}
