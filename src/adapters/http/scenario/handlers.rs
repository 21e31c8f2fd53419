//! HTTP handlers for the scenario endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};

use crate::application::handlers::AnalyzeScenarioCommand;

use super::super::error::ApiError;
use super::super::request::json_body;
use super::super::state::AppState;
use super::dto::{ScenarioRequest, ScenarioResponse};

/// POST /scenario
///
/// Projects compliance costs for the company portfolio under a what-if scenario.
pub async fn analyze_scenario(
    State(state): State<AppState>,
    payload: Result<Json<ScenarioRequest>, JsonRejection>,
) -> Result<Json<ScenarioResponse>, ApiError> {
    let parameters = json_body(payload)?.into_parameters()?;

    let handler = state.analyze_scenario_handler();
    let result = handler.handle(AnalyzeScenarioCommand { parameters })?;

    Ok(Json(ScenarioResponse {
        success: true,
        analysis: result.into(),
    }))
}
