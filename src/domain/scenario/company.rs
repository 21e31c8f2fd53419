//! Company baselines used in scenario projections.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Baseline attributes of one company. Revenue is in millions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub name: String,
    pub industry: String,
    pub revenue: f64,
    /// Annual emissions in tonnes CO2.
    pub emissions: f64,
    pub facility_count: u32,
}

impl CompanyProfile {
    pub fn new(
        name: impl Into<String>,
        industry: impl Into<String>,
        revenue: f64,
        emissions: f64,
        facility_count: u32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if !revenue.is_finite() || revenue <= 0.0 {
            return Err(ValidationError::invalid_format("revenue", "must be positive"));
        }
        if !emissions.is_finite() || emissions < 0.0 {
            return Err(ValidationError::invalid_format("emissions", "cannot be negative"));
        }
        Ok(Self {
            name,
            industry: industry.into(),
            revenue,
            emissions,
            facility_count,
        })
    }

    /// The three reference companies shown on the what-if calculator.
    pub fn baseline_portfolio() -> Vec<CompanyProfile> {
        vec![
            CompanyProfile {
                name: "A".to_string(),
                industry: "Chemicals".to_string(),
                revenue: 300.0,
                emissions: 12_000.0,
                facility_count: 5,
            },
            CompanyProfile {
                name: "B".to_string(),
                industry: "Oil & Gas".to_string(),
                revenue: 90.0,
                emissions: 9_000.0,
                facility_count: 3,
            },
            CompanyProfile {
                name: "C".to_string(),
                industry: "Power Plants".to_string(),
                revenue: 150.0,
                emissions: 15_000.0,
                facility_count: 4,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_revenue() {
        assert!(CompanyProfile::new("Z", "Steel", 0.0, 10.0, 1).is_err());
        assert!(CompanyProfile::new("Z", "Steel", -5.0, 10.0, 1).is_err());
    }

    #[test]
    fn allows_zero_emissions_and_facilities() {
        let profile = CompanyProfile::new("Z", "Software", 12.0, 0.0, 0).unwrap();
        assert_eq!(profile.facility_count, 0);
    }

    #[test]
    fn baseline_portfolio_is_valid() {
        for p in CompanyProfile::baseline_portfolio() {
            let rebuilt = CompanyProfile::new(
                p.name.clone(),
                p.industry.clone(),
                p.revenue,
                p.emissions,
                p.facility_count,
            );
            assert!(rebuilt.is_ok());
        }
    }
}
