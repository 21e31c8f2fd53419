//! HTTP handlers for the cost-benefit endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};

use crate::application::handlers::AnalyzeCostBenefitCommand;

use super::super::error::ApiError;
use super::super::request::json_body;
use super::super::state::AppState;
use super::dto::{CostBenefitRequest, CostBenefitResponse, CostBenefitView};

/// POST /cost-benefit
///
/// Ranks mitigation strategies by ROI for the selected company.
pub async fn analyze_cost_benefit(
    State(state): State<AppState>,
    payload: Result<Json<CostBenefitRequest>, JsonRejection>,
) -> Result<Json<CostBenefitResponse>, ApiError> {
    let selection = json_body(payload)?.into_selection()?;

    let handler = state.analyze_cost_benefit_handler();
    let result = handler.handle(AnalyzeCostBenefitCommand { selection })?;

    Ok(Json(CostBenefitResponse {
        success: true,
        analysis: CostBenefitView::try_from(result)?,
    }))
}
