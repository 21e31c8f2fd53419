//! Mitigation strategies and the reference catalog.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::AnalysisError;

/// One environmental compliance strategy with its economics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub name: String,
    /// Up-front cost, must be positive.
    pub cost: f64,
    /// Annual savings, must be positive.
    pub savings: f64,
    /// Waste reduction in tonnes; zero is allowed.
    pub waste_reduction: f64,
}

impl Strategy {
    pub fn new(name: impl Into<String>, cost: f64, savings: f64, waste_reduction: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            savings,
            waste_reduction,
        }
    }

    /// Guards every later division: cost and savings must be finite and positive.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.name.trim().is_empty() {
            return Err(AnalysisError::invalid_strategy(&self.name, "name cannot be empty"));
        }
        if !self.cost.is_finite() || self.cost <= 0.0 {
            return Err(AnalysisError::invalid_strategy(&self.name, "cost must be positive"));
        }
        if !self.savings.is_finite() || self.savings <= 0.0 {
            return Err(AnalysisError::invalid_strategy(&self.name, "savings must be positive"));
        }
        if !self.waste_reduction.is_finite() || self.waste_reduction < 0.0 {
            return Err(AnalysisError::invalid_strategy(
                &self.name,
                "waste reduction cannot be negative",
            ));
        }
        Ok(())
    }

    /// Net return as a percentage of cost: `(savings - cost) / cost * 100`.
    pub fn roi(&self) -> f64 {
        (self.savings - self.cost) / self.cost * 100.0
    }

    /// Months of savings needed to recover the cost: `cost / savings * 12`.
    pub fn payback_months(&self) -> f64 {
        self.cost / self.savings * 12.0
    }
}

/// A strategy row from an uploaded table, tagged with the company it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyStrategy {
    pub company: String,
    pub strategy: Strategy,
}

/// Strategies listed for `company`, in upload order. Names match exactly.
pub fn strategies_for(rows: &[CompanyStrategy], company: &str) -> Vec<Strategy> {
    rows.iter()
        .filter(|row| row.company == company)
        .map(|row| row.strategy.clone())
        .collect()
}

/// Distinct companies in order of first appearance.
pub fn companies_in(rows: &[CompanyStrategy]) -> Vec<String> {
    let mut companies: Vec<String> = Vec::new();
    for row in rows {
        if !companies.contains(&row.company) {
            companies.push(row.company.clone());
        }
    }
    companies
}

/// The seven strategies the dashboard ranks.
pub fn reference_catalog() -> Vec<Strategy> {
    vec![
        Strategy::new("Switch to biofuel", 144_811.0, 467_319.0, 85.0),
        Strategy::new("Water recycling system", 214_820.0, 461_041.0, 20.0),
        Strategy::new("Carbon capture upgrade", 565_593.0, 940_591.0, 150.0),
        Strategy::new("Green packaging", 490_338.0, 771_836.0, 170.0),
        Strategy::new("Smart HVAC control", 475_314.0, 743_924.0, 92.0),
        Strategy::new("Optimize process", 296_175.0, 455_860.0, 24.0),
        Strategy::new("Solar panel integration", 574_381.0, 881_031.0, 108.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round2(v: f64) -> f64 {
        (v * 100.0).round() / 100.0
    }

    #[test]
    fn catalog_roi_matches_published_figures() {
        let published = [222.71, 114.62, 66.3, 57.41, 56.51, 53.92];
        for (strategy, expected) in reference_catalog().iter().zip(published) {
            assert_eq!(round2(strategy.roi()), expected, "{}", strategy.name);
        }
    }

    #[test]
    fn solar_roi_rounds_to_published_one_decimal() {
        let solar = reference_catalog().pop().unwrap();
        assert_eq!(round2(solar.roi()), 53.39);
        assert_eq!((solar.roi() * 10.0).round() / 10.0, 53.4);
    }

    #[test]
    fn payback_months_formula() {
        let s = Strategy::new("Test", 100.0, 400.0, 0.0);
        assert!((s.payback_months() - 3.0).abs() < 1e-12);
        assert!((s.roi() - 300.0).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_zero_cost_and_savings() {
        assert!(matches!(
            Strategy::new("Free", 0.0, 10.0, 0.0).validate(),
            Err(AnalysisError::InvalidStrategy { .. })
        ));
        assert!(matches!(
            Strategy::new("Useless", 10.0, 0.0, 0.0).validate(),
            Err(AnalysisError::InvalidStrategy { .. })
        ));
        assert!(Strategy::new("Dirty", 10.0, 5.0, -1.0).validate().is_err());
    }

    fn row(company: &str, name: &str) -> CompanyStrategy {
        CompanyStrategy {
            company: company.to_string(),
            strategy: Strategy::new(name, 10.0, 20.0, 0.0),
        }
    }

    #[test]
    fn strategies_for_filters_by_company() {
        let rows = vec![row("A", "One"), row("B", "Two"), row("A", "Three")];
        let names: Vec<_> = strategies_for(&rows, "A").into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["One", "Three"]);
        assert!(strategies_for(&rows, "a").is_empty());
        assert_eq!(companies_in(&rows), vec!["A", "B"]);
    }

    #[test]
    fn validate_accepts_catalog() {
        assert!(reference_catalog().iter().all(|s| s.validate().is_ok()));
    }
}
