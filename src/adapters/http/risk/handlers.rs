//! HTTP handlers for risk endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::header;
use axum::response::IntoResponse;

use crate::adapters::csv::{render_risk_report, render_triage_report};
use crate::application::handlers::{AnalyzeComplianceRiskCommand, TriageComplianceExposureCommand};

use super::super::error::ApiError;
use super::super::request::json_body;
use super::super::state::AppState;
use super::dto::{RiskAnalysisRequest, RiskAnalysisResponse, TriageRequest, TriageResponse};

/// Filename offered to the browser for the report download.
pub const REPORT_FILE_NAME: &str = "compliance-risk-report.csv";

/// Filename offered for the triage download.
pub const TRIAGE_FILE_NAME: &str = "compliance_risk_output.csv";

/// POST /risk-analysis
///
/// Scores an uploaded compliance document.
pub async fn analyze_risk(
    State(state): State<AppState>,
    payload: Result<Json<RiskAnalysisRequest>, JsonRejection>,
) -> Result<Json<RiskAnalysisResponse>, ApiError> {
    let document = json_body(payload)?.into_document()?;

    let handler = state.analyze_compliance_risk_handler();
    let result = handler.handle(AnalyzeComplianceRiskCommand { document })?;

    Ok(Json(RiskAnalysisResponse {
        success: true,
        analysis: result.into(),
    }))
}

/// GET /risk-report
///
/// Downloads the four-area risk report as CSV.
pub async fn download_risk_report(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let report = state.generate_risk_report_handler().handle();
    let body = render_risk_report(&report)?;

    Ok(csv_attachment(REPORT_FILE_NAME, body))
}

/// POST /compliance-triage
///
/// Decides fix-or-accept for each uploaded compliance exposure.
pub async fn triage_exposures(
    State(state): State<AppState>,
    payload: Result<Json<TriageRequest>, JsonRejection>,
) -> Result<Json<TriageResponse>, ApiError> {
    let csv_data = json_body(payload)?.into_csv()?;

    let handler = state.triage_compliance_exposure_handler();
    let results = handler.handle(TriageComplianceExposureCommand { csv_data })?;

    Ok(Json(TriageResponse {
        success: true,
        results,
    }))
}

/// POST /compliance-triage/download
///
/// Same triage as `POST /compliance-triage`, returned as a CSV attachment.
pub async fn download_triage_report(
    State(state): State<AppState>,
    payload: Result<Json<TriageRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let csv_data = json_body(payload)?.into_csv()?;

    let handler = state.triage_compliance_exposure_handler();
    let results = handler.handle(TriageComplianceExposureCommand { csv_data })?;
    let body = render_triage_report(&results)?;

    Ok(csv_attachment(TRIAGE_FILE_NAME, body))
}

fn csv_attachment(file_name: &str, body: String) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        body,
    )
}
