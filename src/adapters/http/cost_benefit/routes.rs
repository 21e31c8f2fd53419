//! HTTP routes for the cost-benefit endpoint.

use axum::routing::post;
use axum::Router;

use super::super::state::AppState;
use super::handlers::analyze_cost_benefit;

/// Creates the cost-benefit router.
pub fn cost_benefit_routes() -> Router<AppState> {
    Router::new().route("/cost-benefit", post(analyze_cost_benefit))
}
