//! HTTP adapter for the cost-benefit endpoint.

pub mod dto;
mod handlers;
mod routes;

pub use routes::cost_benefit_routes;
