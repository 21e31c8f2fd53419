//! Scenario Projector - compliance cost estimates under a regulatory scenario.

use serde::Serialize;

use crate::domain::foundation::RiskLevel;

use super::company::CompanyProfile;

/// Share of revenue taken as the baseline compliance cost.
pub const BASE_COST_RATE: f64 = 0.15;
/// Cost per thousand tonnes of emissions.
pub const EMISSION_COST_PER_KILOTONNE: f64 = 0.8;
/// Cost per facility.
pub const FACILITY_COST: f64 = 2.5;

/// How much time a company has to comply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineBand {
    /// Under three years.
    Compressed,
    /// Three to seven years inclusive.
    Standard,
    /// Over seven years.
    Extended,
}

impl TimelineBand {
    pub fn for_years(years: u32) -> Self {
        if years < 3 {
            TimelineBand::Compressed
        } else if years > 7 {
            TimelineBand::Extended
        } else {
            TimelineBand::Standard
        }
    }

    /// Cost multiplier: rushing costs more, a long runway costs less.
    pub fn cost_factor(&self) -> f64 {
        match self {
            TimelineBand::Compressed => 1.4,
            TimelineBand::Standard => 1.0,
            TimelineBand::Extended => 0.8,
        }
    }

    /// Weight applied to the strictness multiplier when scoring scenario risk.
    pub fn risk_factor(&self) -> f64 {
        match self {
            TimelineBand::Compressed => 2.0,
            TimelineBand::Standard | TimelineBand::Extended => 1.0,
        }
    }
}

/// A company with its projected compliance cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProjection {
    #[serde(flatten)]
    pub company: CompanyProfile,
    pub predicted_cost: f64,
}

/// Aggregate outcome of a projection run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioProjection {
    pub projections: Vec<CompanyProjection>,
    /// Sum of per-company costs, each rounded to cents first.
    pub total_cost: f64,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
}

/// Pure cost formula over company baselines.
pub struct ScenarioProjector;

impl ScenarioProjector {
    /// `(revenue * 0.15 * m + emissions / 1000 * 0.8 + facilities * 2.5) * timeline_factor`
    pub fn predicted_cost(company: &CompanyProfile, multiplier: f64, timeline_years: u32) -> f64 {
        let base_cost = company.revenue * BASE_COST_RATE * multiplier;
        let emission_factor = company.emissions / 1000.0 * EMISSION_COST_PER_KILOTONNE;
        let facility_factor = f64::from(company.facility_count) * FACILITY_COST;
        let timeline_factor = TimelineBand::for_years(timeline_years).cost_factor();

        (base_cost + emission_factor + facility_factor) * timeline_factor
    }

    /// Scenario risk: `multiplier * (2 if timeline < 3 else 1)`.
    pub fn risk_score(multiplier: f64, timeline_years: u32) -> f64 {
        multiplier * TimelineBand::for_years(timeline_years).risk_factor()
    }

    /// Three-band mapping: above 3 is High, above 2 is Medium, else Low.
    pub fn risk_level(risk_score: f64) -> RiskLevel {
        if risk_score > 3.0 {
            RiskLevel::High
        } else if risk_score > 2.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Projects every company in input order and aggregates.
    pub fn project(
        companies: &[CompanyProfile],
        multiplier: f64,
        timeline_years: u32,
    ) -> ScenarioProjection {
        let projections: Vec<CompanyProjection> = companies
            .iter()
            .map(|company| CompanyProjection {
                company: company.clone(),
                predicted_cost: Self::predicted_cost(company, multiplier, timeline_years),
            })
            .collect();

        let total_cost = projections
            .iter()
            .map(|p| round_cents(p.predicted_cost))
            .sum();
        let risk_score = Self::risk_score(multiplier, timeline_years);

        ScenarioProjection {
            projections,
            total_cost,
            risk_score,
            risk_level: Self::risk_level(risk_score),
        }
    }
}

/// Rounds to two decimal places.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Strictness;

    fn company_a() -> CompanyProfile {
        CompanyProfile::baseline_portfolio().remove(0)
    }

    #[test]
    fn worked_example_medium_two_years() {
        let multiplier = Strictness::Medium.multiplier();
        let cost = ScenarioProjector::predicted_cost(&company_a(), multiplier, 2);
        assert!((cost - 125.44).abs() < 1e-9, "got {}", cost);
    }

    #[test]
    fn timeline_bands_at_boundaries() {
        assert_eq!(TimelineBand::for_years(2), TimelineBand::Compressed);
        assert_eq!(TimelineBand::for_years(3), TimelineBand::Standard);
        assert_eq!(TimelineBand::for_years(7), TimelineBand::Standard);
        assert_eq!(TimelineBand::for_years(8), TimelineBand::Extended);
    }

    #[test]
    fn extended_timeline_discounts_cost() {
        let standard = ScenarioProjector::predicted_cost(&company_a(), 1.0, 5);
        let extended = ScenarioProjector::predicted_cost(&company_a(), 1.0, 10);
        assert!((extended - standard * 0.8).abs() < 1e-9);
    }

    #[test]
    fn risk_level_bands() {
        let level = |multiplier, years| {
            ScenarioProjector::risk_level(ScenarioProjector::risk_score(multiplier, years))
        };
        // High strictness, compressed: 2 * 2 = 4
        assert_eq!(level(2.0, 1), RiskLevel::High);
        // Very High, standard: 2.5
        assert_eq!(level(2.5, 5), RiskLevel::Medium);
        // High, standard: exactly 2 is Low
        assert_eq!(level(2.0, 5), RiskLevel::Low);
        // Medium, compressed: exactly 3 is Medium
        assert_eq!(level(1.5, 2), RiskLevel::Medium);
    }

    #[test]
    fn project_preserves_order_and_totals() {
        let projection = ScenarioProjector::project(&CompanyProfile::baseline_portfolio(), 1.5, 2);
        let names: Vec<_> = projection
            .projections
            .iter()
            .map(|p| p.company.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        // A: 125.44, B: (20.25 + 7.2 + 7.5) * 1.4 = 48.93, C: (33.75 + 12 + 10) * 1.4 = 78.05
        assert!((projection.total_cost - 252.42).abs() < 1e-9);
        assert_eq!(projection.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn empty_portfolio_costs_nothing() {
        let projection = ScenarioProjector::project(&[], 2.0, 5);
        assert!(projection.projections.is_empty());
        assert_eq!(projection.total_cost, 0.0);
    }

    #[test]
    fn round_cents_rounds_half_away_from_zero() {
        assert_eq!(round_cents(1.005_000_1), 1.01);
        assert_eq!(round_cents(125.44), 125.44);
    }
}
