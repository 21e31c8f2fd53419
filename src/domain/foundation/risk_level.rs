//! Discretised risk bands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score above which a risk is "Very High".
pub const VERY_HIGH_THRESHOLD: f64 = 80.0;
/// Score above which a risk is "High".
pub const HIGH_THRESHOLD: f64 = 60.0;
/// Score above which a risk is "Medium".
pub const MEDIUM_THRESHOLD: f64 = 40.0;

/// Risk band derived from a continuous 0-100 score.
///
/// Ordered from least to most severe so comparisons read naturally
/// (`level >= RiskLevel::High`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// Maps an overall score onto a band.
    ///
    /// Every boundary uses a strict `>`: exactly 80 is `High`, exactly 60 is
    /// `Medium`, exactly 40 is `Low`.
    pub fn from_score(score: f64) -> Self {
        if score > VERY_HIGH_THRESHOLD {
            RiskLevel::VeryHigh
        } else if score > HIGH_THRESHOLD {
            RiskLevel::High
        } else if score > MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        }
    }

    /// True for `High` and `VeryHigh`.
    pub fn is_elevated(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::VeryHigh)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_80_is_not_very_high() {
        assert_eq!(RiskLevel::from_score(80.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(80.0001), RiskLevel::VeryHigh);
    }

    #[test]
    fn exactly_60_is_not_high() {
        assert_eq!(RiskLevel::from_score(60.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(60.0001), RiskLevel::High);
    }

    #[test]
    fn exactly_40_is_low() {
        assert_eq!(RiskLevel::from_score(40.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(40.0001), RiskLevel::Medium);
    }

    #[test]
    fn extremes_map_to_outer_bands() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(100.0), RiskLevel::VeryHigh);
    }

    #[test]
    fn elevated_covers_high_and_very_high_only() {
        assert!(RiskLevel::VeryHigh.is_elevated());
        assert!(RiskLevel::High.is_elevated());
        assert!(!RiskLevel::Medium.is_elevated());
        assert!(!RiskLevel::Low.is_elevated());
    }

    #[test]
    fn very_high_serializes_with_space() {
        let json = serde_json::to_string(&RiskLevel::VeryHigh).unwrap();
        assert_eq!(json, "\"Very High\"");
        assert_eq!(RiskLevel::VeryHigh.to_string(), "Very High");
    }
}
