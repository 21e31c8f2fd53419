//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Missing required fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a missing fields error listing every required field name.
    pub fn missing_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValidationError::MissingFields {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,
    MissingFields,
    InvalidInput,

    // Computation errors
    InvalidStrategy,
    EmptyCatalog,
    UnknownStrictness,

    // Infrastructure errors
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::MissingFields => "MISSING_FIELDS",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InvalidStrategy => "INVALID_STRATEGY",
            ErrorCode::EmptyCatalog => "EMPTY_CATALOG",
            ErrorCode::UnknownStrictness => "UNKNOWN_STRICTNESS",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Broad error taxonomy used when deciding how an error surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller supplied missing or malformed data.
    Validation,
    /// A calculation was guarded against an anomaly (zero cost, unknown enum).
    Computation,
    /// Anything else.
    Internal,
}

/// Errors raised by the analysis engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid strategy '{name}': {reason}")]
    InvalidStrategy { name: String, reason: String },

    #[error("Strategy catalog is empty")]
    EmptyCatalog,

    #[error("Unrecognized strictness level '{0}'")]
    UnknownStrictness(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AnalysisError {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AnalysisError::InvalidInput(message.into())
    }

    /// Creates an invalid strategy error.
    pub fn invalid_strategy(name: impl Into<String>, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidStrategy {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AnalysisError::Internal(message.into())
    }

    /// Returns the machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::Validation(ValidationError::EmptyField { .. }) => ErrorCode::EmptyField,
            AnalysisError::Validation(ValidationError::OutOfRange { .. }) => ErrorCode::OutOfRange,
            AnalysisError::Validation(ValidationError::InvalidFormat { .. }) => {
                ErrorCode::InvalidFormat
            }
            AnalysisError::Validation(ValidationError::MissingFields { .. }) => {
                ErrorCode::MissingFields
            }
            AnalysisError::InvalidInput(_) => ErrorCode::InvalidInput,
            AnalysisError::InvalidStrategy { .. } => ErrorCode::InvalidStrategy,
            AnalysisError::EmptyCatalog => ErrorCode::EmptyCatalog,
            AnalysisError::UnknownStrictness(_) => ErrorCode::UnknownStrictness,
            AnalysisError::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Returns the taxonomy bucket for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalysisError::Validation(_)
            | AnalysisError::InvalidInput(_)
            | AnalysisError::UnknownStrictness(_) => ErrorCategory::Validation,
            AnalysisError::InvalidStrategy { .. } | AnalysisError::EmptyCatalog => {
                ErrorCategory::Computation
            }
            AnalysisError::Internal(_) => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("fileData");
        assert_eq!(format!("{}", err), "Field 'fileData' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("regulatory", 0.0, 100.0, 150.0);
        assert_eq!(
            format!("{}", err),
            "Field 'regulatory' must be between 0 and 100, got 150"
        );
    }

    #[test]
    fn validation_error_missing_fields_lists_names() {
        let err = ValidationError::missing_fields(["fileData", "fileName"]);
        assert_eq!(
            format!("{}", err),
            "Missing required fields: fileData, fileName"
        );
    }

    #[test]
    fn analysis_error_wraps_validation_transparently() {
        let err: AnalysisError = ValidationError::empty_field("csvData").into();
        assert_eq!(format!("{}", err), "Field 'csvData' cannot be empty");
        assert_eq!(err.code(), ErrorCode::EmptyField);
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn invalid_strategy_is_a_computation_error() {
        let err = AnalysisError::invalid_strategy("Green packaging", "cost must be positive");
        assert_eq!(err.code(), ErrorCode::InvalidStrategy);
        assert_eq!(err.category(), ErrorCategory::Computation);
        assert_eq!(
            format!("{}", err),
            "Invalid strategy 'Green packaging': cost must be positive"
        );
    }

    #[test]
    fn empty_catalog_is_a_computation_error() {
        assert_eq!(AnalysisError::EmptyCatalog.category(), ErrorCategory::Computation);
        assert_eq!(AnalysisError::EmptyCatalog.code().to_string(), "EMPTY_CATALOG");
    }

    #[test]
    fn internal_error_is_internal() {
        let err = AnalysisError::internal("scorer lock poisoned");
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(err.code().to_string(), "INTERNAL_ERROR");
    }
}
