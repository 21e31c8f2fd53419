//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Fixed risk factor '{0}' must be within 0-100")]
    InvalidFixedFactor(&'static str),

    #[error("Estimation min_months must be at least 1 and not exceed max_months")]
    InvalidEstimationRange,

    #[error("Estimation fixed_months must be at least 1")]
    InvalidFixedMonths,
}
