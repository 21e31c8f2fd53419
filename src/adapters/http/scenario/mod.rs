//! HTTP adapter for the what-if scenario endpoint.

pub mod dto;
mod handlers;
mod routes;

pub use routes::scenario_routes;
