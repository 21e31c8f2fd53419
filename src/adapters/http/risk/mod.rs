//! HTTP adapter for compliance risk endpoints.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::{REPORT_FILE_NAME, TRIAGE_FILE_NAME};
pub use routes::risk_routes;
