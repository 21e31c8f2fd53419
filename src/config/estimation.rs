//! Implementation-time estimation configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Bounds for the implementation-time estimator
#[derive(Debug, Clone, Deserialize)]
pub struct EstimationConfig {
    /// Shortest estimate in months (inclusive)
    #[serde(default = "default_min_months")]
    pub min_months: u32,

    /// Longest estimate in months (inclusive)
    #[serde(default = "default_max_months")]
    pub max_months: u32,

    /// Forces a constant estimate when set
    pub fixed_months: Option<u32>,
}

impl EstimationConfig {
    /// Validate estimation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_months == 0 || self.min_months > self.max_months {
            return Err(ValidationError::InvalidEstimationRange);
        }
        if self.fixed_months == Some(0) {
            return Err(ValidationError::InvalidFixedMonths);
        }
        Ok(())
    }
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            min_months: default_min_months(),
            max_months: default_max_months(),
            fixed_months: None,
        }
    }
}

fn default_min_months() -> u32 {
    6
}

fn default_max_months() -> u32 {
    17
}
