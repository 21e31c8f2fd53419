//! HTTP routes for the scenario endpoint.

use axum::routing::post;
use axum::Router;

use super::super::state::AppState;
use super::handlers::analyze_scenario;

/// Creates the scenario router.
pub fn scenario_routes() -> Router<AppState> {
    Router::new().route("/scenario", post(analyze_scenario))
}
