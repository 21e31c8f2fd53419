//! Scenario analysis configuration

use serde::Deserialize;

/// Scenario configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScenarioConfig {
    /// Reject unrecognized strictness labels instead of using multiplier 1
    #[serde(default)]
    pub reject_unknown_strictness: bool,
}
