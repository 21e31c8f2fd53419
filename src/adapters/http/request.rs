//! Request body helpers shared by the endpoint groups.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use super::error::ApiError;

/// Unwraps a JSON body, reporting malformed input as 400 rather than axum's 422.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(ApiError::from)
}

/// A required string field counts as present only when non-blank.
pub fn is_provided(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Takes a field already checked with [`is_provided`].
pub fn take_provided(value: Option<String>) -> String {
    value.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_are_not_provided() {
        assert!(!is_provided(&None));
        assert!(!is_provided(&Some(String::new())));
        assert!(!is_provided(&Some("  \n".to_string())));
        assert!(is_provided(&Some("x".to_string())));
    }
}
