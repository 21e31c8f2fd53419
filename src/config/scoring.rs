//! Risk scoring configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Which `RiskScorer` implementation to use
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Uniform random sub-scores
    #[default]
    Random,
    /// Constant sub-scores from `fixed_factors`
    Fixed,
}

/// Sub-scores returned in fixed mode
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct FixedFactorsConfig {
    #[serde(default = "default_factor")]
    pub regulatory: f64,
    #[serde(default = "default_factor")]
    pub privacy: f64,
    #[serde(default = "default_factor")]
    pub environmental: f64,
    #[serde(default = "default_factor")]
    pub operational: f64,
}

impl Default for FixedFactorsConfig {
    fn default() -> Self {
        Self {
            regulatory: default_factor(),
            privacy: default_factor(),
            environmental: default_factor(),
            operational: default_factor(),
        }
    }
}

/// Scoring configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    /// Scorer selection
    #[serde(default)]
    pub mode: ScoringMode,

    /// Seed for reproducible random scoring and estimation
    pub seed: Option<u64>,

    /// Factors used when `mode = fixed`
    #[serde(default)]
    pub fixed_factors: FixedFactorsConfig,
}

impl ScoringConfig {
    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let f = &self.fixed_factors;
        for (name, value) in [
            ("regulatory", f.regulatory),
            ("privacy", f.privacy),
            ("environmental", f.environmental),
            ("operational", f.operational),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ValidationError::InvalidFixedFactor(name));
            }
        }
        Ok(())
    }
}

fn default_factor() -> f64 {
    50.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScoringConfig::default();
        assert_eq!(config.mode, ScoringMode::Random);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fixed_factor_out_of_range() {
        let config = ScoringConfig {
            fixed_factors: FixedFactorsConfig {
                privacy: 101.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidFixedFactor("privacy"))
        );
    }

    #[test]
    fn test_nan_factor_rejected() {
        let config = ScoringConfig {
            fixed_factors: FixedFactorsConfig {
                operational: f64::NAN,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
