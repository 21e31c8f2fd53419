//! Regulatory strictness levels and their cost multipliers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Multiplier applied when a strictness label is not recognised.
pub const FALLBACK_MULTIPLIER: f64 = 1.0;

/// How stringent the regulation being modelled is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strictness {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Strictness {
    /// All levels, least strict first.
    pub const ALL: [Strictness; 4] = [
        Strictness::Low,
        Strictness::Medium,
        Strictness::High,
        Strictness::VeryHigh,
    ];

    /// Parses a dashboard label exactly. `"VeryHigh"` is accepted as an alias.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(Strictness::Low),
            "Medium" => Some(Strictness::Medium),
            "High" => Some(Strictness::High),
            "Very High" | "VeryHigh" => Some(Strictness::VeryHigh),
            _ => None,
        }
    }

    /// Scalar applied to baseline compliance cost.
    pub fn multiplier(&self) -> f64 {
        match self {
            Strictness::Low => 1.0,
            Strictness::Medium => 1.5,
            Strictness::High => 2.0,
            Strictness::VeryHigh => 2.5,
        }
    }

    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Strictness::Low => "Low",
            Strictness::Medium => "Medium",
            Strictness::High => "High",
            Strictness::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A strictness label after resolution, recording whether the fallback fired.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedStrictness {
    Known(Strictness),
    /// Label did not match any level; the baseline multiplier applies.
    Fallback { label: String },
}

impl ResolvedStrictness {
    /// Resolves a raw label, taking the named fallback branch when unknown.
    pub fn resolve(label: &str) -> Self {
        match Strictness::from_label(label) {
            Some(level) => ResolvedStrictness::Known(level),
            None => ResolvedStrictness::Fallback {
                label: label.to_string(),
            },
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            ResolvedStrictness::Known(level) => level.multiplier(),
            ResolvedStrictness::Fallback { .. } => FALLBACK_MULTIPLIER,
        }
    }

    pub fn level(&self) -> Option<Strictness> {
        match self {
            ResolvedStrictness::Known(level) => Some(*level),
            ResolvedStrictness::Fallback { .. } => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolvedStrictness::Fallback { .. })
    }

    /// Label as supplied (or canonical, for known levels).
    pub fn label(&self) -> &str {
        match self {
            ResolvedStrictness::Known(level) => level.label(),
            ResolvedStrictness::Fallback { label } => label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_match_table() {
        assert_eq!(Strictness::Low.multiplier(), 1.0);
        assert_eq!(Strictness::Medium.multiplier(), 1.5);
        assert_eq!(Strictness::High.multiplier(), 2.0);
        assert_eq!(Strictness::VeryHigh.multiplier(), 2.5);
    }

    #[test]
    fn labels_round_trip() {
        for level in Strictness::ALL {
            assert_eq!(Strictness::from_label(level.label()), Some(level));
        }
    }

    #[test]
    fn very_high_alias_is_accepted() {
        assert_eq!(Strictness::from_label("VeryHigh"), Some(Strictness::VeryHigh));
    }

    #[test]
    fn unknown_label_takes_fallback_branch() {
        let resolved = ResolvedStrictness::resolve("Extreme");
        assert!(resolved.is_fallback());
        assert_eq!(resolved.multiplier(), FALLBACK_MULTIPLIER);
        assert_eq!(resolved.level(), None);
        assert_eq!(resolved.label(), "Extreme");
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert!(ResolvedStrictness::resolve("medium").is_fallback());
    }

    #[test]
    fn padded_label_takes_fallback_branch() {
        let resolved = ResolvedStrictness::resolve(" Medium ");
        assert!(resolved.is_fallback());
        assert_eq!(resolved.multiplier(), FALLBACK_MULTIPLIER);
        assert_eq!(resolved.label(), " Medium ");
    }

    #[test]
    fn known_label_resolves_to_level() {
        let resolved = ResolvedStrictness::resolve("Very High");
        assert_eq!(resolved, ResolvedStrictness::Known(Strictness::VeryHigh));
        assert_eq!(resolved.multiplier(), 2.5);
    }
}
