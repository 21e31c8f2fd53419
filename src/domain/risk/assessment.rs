//! Risk assessment derived from a set of factors.

use crate::domain::foundation::RiskLevel;
use crate::domain::recommendation::{ActionItem, RecommendationComposer};

use super::factors::{RiskArea, RiskFactors};

/// Everything the dashboard shows about one scored document.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub factors: RiskFactors,
    pub overall_score: f64,
    pub level: RiskLevel,
    pub key_areas: Vec<RiskArea>,
    pub recommendations: Vec<String>,
    pub action_items: Vec<ActionItem>,
}

impl RiskAssessment {
    /// Derives score, level, key areas and advice. Deterministic in `factors`.
    pub fn assess(factors: RiskFactors) -> Self {
        let overall_score = factors.overall_score();
        let level = RiskLevel::from_score(overall_score);
        let composition = RecommendationComposer::compose(level, &factors);

        Self {
            factors,
            overall_score,
            level,
            key_areas: factors.key_areas(),
            recommendations: composition.recommendations,
            action_items: composition.action_items,
        }
    }

    pub fn key_area_labels(&self) -> Vec<&'static str> {
        self.key_areas.iter().map(|a| a.key_area_label()).collect()
    }
}
