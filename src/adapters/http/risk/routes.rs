//! HTTP routes for risk endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{
    analyze_risk, download_risk_report, download_triage_report, triage_exposures,
};

/// Creates the risk router.
///
/// # Routes
/// - `POST /risk-analysis` - Score an uploaded document
/// - `GET /risk-report` - Download the CSV risk report
/// - `POST /compliance-triage` - Fix-or-accept decisions for uploaded exposures
/// - `POST /compliance-triage/download` - The same decisions as a CSV attachment
pub fn risk_routes() -> Router<AppState> {
    Router::new()
        .route("/risk-analysis", post(analyze_risk))
        .route("/risk-report", get(download_risk_report))
        .route("/compliance-triage", post(triage_exposures))
        .route("/compliance-triage/download", post(download_triage_report))
}
