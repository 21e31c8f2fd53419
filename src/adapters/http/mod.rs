//! HTTP adapters - REST API implementations.
//!
//! Each analysis area has its own HTTP adapter (`dto`, `handlers`, `routes`).
//! [`app_router`] merges them under one [`AppState`] and applies the
//! cross-cutting tower layers.

pub mod cost_benefit;
pub mod error;
mod format;
mod request;
pub mod risk;
pub mod scenario;
mod state;

use axum::routing::get;
use axum::Router;
use http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use cost_benefit::cost_benefit_routes;
pub use error::{ApiError, ErrorResponse, INTERNAL_ERROR_MESSAGE};
pub use format::format_currency;
pub use risk::risk_routes;
pub use scenario::scenario_routes;
pub use state::AppState;

/// All endpoints, with state applied and no middleware.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .merge(risk_routes())
        .merge(cost_benefit_routes())
        .merge(scenario_routes())
        .route("/health", get(health_check))
        .with_state(state)
}

/// The full application: routes plus tracing, request ids, CORS and timeout.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    api_routes(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Configured origins when given; otherwise open in development and closed elsewhere.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if !origins.is_empty() {
        layer.allow_origin(AllowOrigin::list(origins))
    } else if server.is_production() {
        layer
    } else {
        layer.allow_origin(Any)
    }
}

/// GET /health
async fn health_check() -> &'static str {
    "OK"
}
