//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CARBON_GUARD` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use carbon_guard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod estimation;
mod scenario;
mod scoring;
mod server;

pub use error::{ConfigError, ValidationError};
pub use estimation::EstimationConfig;
pub use scenario::ScenarioConfig;
pub use scoring::{FixedFactorsConfig, ScoringConfig, ScoringMode};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Risk scorer selection and seeding
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Implementation-time estimate bounds
    #[serde(default)]
    pub estimation: EstimationConfig,

    /// What-if scenario behavior
    #[serde(default)]
    pub scenario: ScenarioConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CARBON_GUARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CARBON_GUARD__SERVER__PORT=8000` -> `server.port = 8000`
    /// - `CARBON_GUARD__SCORING__SEED=42` -> `scoring.seed = 42`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CARBON_GUARD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.scoring.validate()?;
        self.estimation.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 7] = [
        "CARBON_GUARD__SERVER__PORT",
        "CARBON_GUARD__SERVER__ENVIRONMENT",
        "CARBON_GUARD__SCORING__MODE",
        "CARBON_GUARD__SCORING__SEED",
        "CARBON_GUARD__SCORING__FIXED_FACTORS__REGULATORY",
        "CARBON_GUARD__ESTIMATION__FIXED_MONTHS",
        "CARBON_GUARD__SCENARIO__REJECT_UNKNOWN_STRICTNESS",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.scoring.mode, ScoringMode::Random);
        assert_eq!(config.estimation.min_months, 6);
        assert!(!config.scenario.reject_unknown_strictness);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CARBON_GUARD__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CARBON_GUARD__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_fixed_scoring_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CARBON_GUARD__SCORING__MODE", "fixed");
        env::set_var("CARBON_GUARD__SCORING__SEED", "42");
        env::set_var("CARBON_GUARD__SCORING__FIXED_FACTORS__REGULATORY", "88.5");
        env::set_var("CARBON_GUARD__ESTIMATION__FIXED_MONTHS", "9");
        env::set_var("CARBON_GUARD__SCENARIO__REJECT_UNKNOWN_STRICTNESS", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.scoring.mode, ScoringMode::Fixed);
        assert_eq!(config.scoring.seed, Some(42));
        assert_eq!(config.scoring.fixed_factors.regulatory, 88.5);
        assert_eq!(config.scoring.fixed_factors.privacy, 50.0);
        assert_eq!(config.estimation.fixed_months, Some(9));
        assert!(config.scenario.reject_unknown_strictness);
    }
}
