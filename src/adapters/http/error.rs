//! HTTP error mapping shared by every endpoint group.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnalysisError, ErrorCategory, ValidationError};

/// Message returned for every 500. Details go to the log only.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: code.into(),
        }
    }

    pub fn internal() -> Self {
        Self {
            error: INTERNAL_ERROR_MESSAGE.to_string(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    /// Caller error; the message is returned verbatim.
    BadRequest { code: String, message: String },
    /// Server-side failure; the detail is logged and never returned.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest { code, message } => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(code, message))
            }
            ApiError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal())
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<AnalysisError> for ApiError {
    fn from(error: AnalysisError) -> Self {
        match error.category() {
            ErrorCategory::Validation => ApiError::BadRequest {
                code: error.code().to_string(),
                message: error.to_string(),
            },
            // Catalog anomalies and internal failures concern server-owned data.
            ErrorCategory::Computation | ErrorCategory::Internal => {
                ApiError::Internal(error.to_string())
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        AnalysisError::from(error).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            code: "INVALID_JSON".to_string(),
            message: format!("Invalid request body: {}", rejection.body_text()),
        }
    }
}
