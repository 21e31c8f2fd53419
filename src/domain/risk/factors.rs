//! Risk factors - the four weighted sub-scores behind every assessment.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Sub-scores strictly above this value become key risk areas.
pub const KEY_AREA_THRESHOLD: f64 = 70.0;

/// Key areas reported when no sub-score clears [`KEY_AREA_THRESHOLD`].
pub const DEFAULT_KEY_AREAS: [RiskArea; 2] = [RiskArea::Regulatory, RiskArea::Privacy];

/// One of the four scored dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskArea {
    Regulatory,
    Privacy,
    Environmental,
    Operational,
}

impl RiskArea {
    /// All areas in reporting order.
    pub const ALL: [RiskArea; 4] = [
        RiskArea::Regulatory,
        RiskArea::Privacy,
        RiskArea::Environmental,
        RiskArea::Operational,
    ];

    /// Label used in the key-areas list.
    pub fn key_area_label(&self) -> &'static str {
        match self {
            RiskArea::Regulatory => "Regulatory Changes",
            RiskArea::Privacy => "Data Privacy",
            RiskArea::Environmental => "Environmental Compliance",
            RiskArea::Operational => "Operational Risk",
        }
    }
}

/// Fixed linear weights for combining sub-scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskWeights {
    pub regulatory: f64,
    pub privacy: f64,
    pub environmental: f64,
    pub operational: f64,
}

impl RiskWeights {
    /// The production weighting. Sums to 1.0.
    pub const STANDARD: RiskWeights = RiskWeights {
        regulatory: 0.30,
        privacy: 0.25,
        environmental: 0.25,
        operational: 0.20,
    };

    pub fn weight(&self, area: RiskArea) -> f64 {
        match area {
            RiskArea::Regulatory => self.regulatory,
            RiskArea::Privacy => self.privacy,
            RiskArea::Environmental => self.environmental,
            RiskArea::Operational => self.operational,
        }
    }

    pub fn total(&self) -> f64 {
        RiskArea::ALL.iter().map(|area| self.weight(*area)).sum()
    }

    /// Weighted sum of the factors.
    pub fn apply(&self, factors: &RiskFactors) -> f64 {
        RiskArea::ALL
            .iter()
            .map(|area| factors.score(*area) * self.weight(*area))
            .sum()
    }
}

/// Four sub-scores, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    regulatory: f64,
    privacy: f64,
    environmental: f64,
    operational: f64,
}

impl RiskFactors {
    pub fn new(
        regulatory: f64,
        privacy: f64,
        environmental: f64,
        operational: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            regulatory: bounded("regulatory", regulatory)?,
            privacy: bounded("privacy", privacy)?,
            environmental: bounded("environmental", environmental)?,
            operational: bounded("operational", operational)?,
        })
    }

    pub fn regulatory(&self) -> f64 {
        self.regulatory
    }

    pub fn privacy(&self) -> f64 {
        self.privacy
    }

    pub fn environmental(&self) -> f64 {
        self.environmental
    }

    pub fn operational(&self) -> f64 {
        self.operational
    }

    pub fn score(&self, area: RiskArea) -> f64 {
        match area {
            RiskArea::Regulatory => self.regulatory,
            RiskArea::Privacy => self.privacy,
            RiskArea::Environmental => self.environmental,
            RiskArea::Operational => self.operational,
        }
    }

    /// Weighted overall score using [`RiskWeights::STANDARD`].
    pub fn overall_score(&self) -> f64 {
        RiskWeights::STANDARD.apply(self)
    }

    /// Areas scoring above [`KEY_AREA_THRESHOLD`], or the defaults if none do.
    pub fn key_areas(&self) -> Vec<RiskArea> {
        let areas: Vec<RiskArea> = RiskArea::ALL
            .iter()
            .copied()
            .filter(|area| self.score(*area) > KEY_AREA_THRESHOLD)
            .collect();

        if areas.is_empty() {
            DEFAULT_KEY_AREAS.to_vec()
        } else {
            areas
        }
    }
}

fn bounded(field: &str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::out_of_range(field, 0.0, 100.0, value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors(r: f64, p: f64, e: f64, o: f64) -> RiskFactors {
        RiskFactors::new(r, p, e, o).unwrap()
    }

    #[test]
    fn standard_weights_sum_to_one() {
        assert!((RiskWeights::STANDARD.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn overall_is_weighted_sum() {
        let f = factors(100.0, 80.0, 40.0, 10.0);
        // 30 + 20 + 10 + 2
        assert!((f.overall_score() - 62.0).abs() < 1e-9);
    }

    #[test]
    fn uniform_factors_score_their_own_value() {
        let f = factors(55.0, 55.0, 55.0, 55.0);
        assert!((f.overall_score() - 55.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_out_of_range_factor() {
        let err = RiskFactors::new(101.0, 0.0, 0.0, 0.0).unwrap_err();
        assert_eq!(err, ValidationError::out_of_range("regulatory", 0.0, 100.0, 101.0));
        assert!(RiskFactors::new(0.0, -1.0, 0.0, 0.0).is_err());
        assert!(RiskFactors::new(0.0, 0.0, f64::NAN, 0.0).is_err());
    }

    #[test]
    fn key_areas_default_when_nothing_exceeds_70() {
        let f = factors(70.0, 70.0, 10.0, 0.0);
        assert_eq!(f.key_areas(), vec![RiskArea::Regulatory, RiskArea::Privacy]);
    }

    #[test]
    fn key_areas_only_lists_high_scores() {
        let f = factors(10.0, 20.0, 70.5, 99.0);
        assert_eq!(
            f.key_areas(),
            vec![RiskArea::Environmental, RiskArea::Operational]
        );
    }

    #[test]
    fn key_area_labels() {
        let labels: Vec<_> = RiskArea::ALL.iter().map(|a| a.key_area_label()).collect();
        assert_eq!(
            labels,
            vec![
                "Regulatory Changes",
                "Data Privacy",
                "Environmental Compliance",
                "Operational Risk"
            ]
        );
    }
}
