//! Compliance exposure triage - fix the issue, or accept the penalty?

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// What a company should do about one compliance gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriageAction {
    #[serde(rename = "Fix Compliance Issue")]
    FixComplianceIssue,
    #[serde(rename = "Accept Penalty")]
    AcceptPenalty,
}

impl TriageAction {
    pub fn label(&self) -> &'static str {
        match self {
            TriageAction::FixComplianceIssue => "Fix Compliance Issue",
            TriageAction::AcceptPenalty => "Accept Penalty",
        }
    }
}

/// A company's cost to comply versus the penalty for not complying.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceExposure {
    company: String,
    compliance_cost: f64,
    penalty_cost: f64,
}

impl ComplianceExposure {
    pub fn new(
        company: impl Into<String>,
        compliance_cost: f64,
        penalty_cost: f64,
    ) -> Result<Self, ValidationError> {
        let company = company.into();
        if company.trim().is_empty() {
            return Err(ValidationError::empty_field("company_name"));
        }
        Ok(Self {
            company,
            compliance_cost: non_negative("compliance_cost", compliance_cost)?,
            penalty_cost: non_negative("penalty_cost", penalty_cost)?,
        })
    }

    /// Seven-company portfolio bundled with every risk analysis.
    pub fn reference_portfolio() -> Vec<ComplianceExposure> {
        [
            ("SolarX Corp", 200_000.0, 800_000.0),
            ("GreenChem Inc", 150_000.0, 500_000.0),
            ("HydroFusion Co", 250_000.0, 400_000.0),
            ("PlastiTech Inc", 180_000.0, 190_000.0),
            ("AgriWave Ltd", 300_000.0, 270_000.0),
            ("EcoSteel Ltd", 400_000.0, 350_000.0),
            ("UrbanWind Energy", 500_000.0, 450_000.0),
        ]
        .into_iter()
        .map(|(company, compliance_cost, penalty_cost)| ComplianceExposure {
            company: company.to_string(),
            compliance_cost,
            penalty_cost,
        })
        .collect()
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn compliance_cost(&self) -> f64 {
        self.compliance_cost
    }

    pub fn penalty_cost(&self) -> f64 {
        self.penalty_cost
    }

    /// Penalty avoided minus cost of fixing. Negative when fixing costs more.
    pub fn savings_if_fixed(&self) -> f64 {
        self.penalty_cost - self.compliance_cost
    }

    /// Fix only when complying is strictly cheaper than the penalty.
    pub fn recommended_action(&self) -> TriageAction {
        if self.compliance_cost < self.penalty_cost {
            TriageAction::FixComplianceIssue
        } else {
            TriageAction::AcceptPenalty
        }
    }
}

/// An exposure with its decision attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TriagedExposure {
    pub company: String,
    pub compliance_cost: f64,
    pub penalty_cost: f64,
    pub savings_if_fixed: f64,
    pub recommended_action: TriageAction,
}

/// Decides every exposure and orders by savings, largest first.
///
/// The sort is stable, so equal savings keep their input order.
pub fn triage(exposures: &[ComplianceExposure]) -> Vec<TriagedExposure> {
    let mut out: Vec<TriagedExposure> = exposures
        .iter()
        .map(|e| TriagedExposure {
            company: e.company.clone(),
            compliance_cost: e.compliance_cost,
            penalty_cost: e.penalty_cost,
            savings_if_fixed: e.savings_if_fixed(),
            recommended_action: e.recommended_action(),
        })
        .collect();

    out.sort_by(|a, b| b.savings_if_fixed.total_cmp(&a.savings_if_fixed));
    out
}

fn non_negative(field: &str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::invalid_format(field, "cannot be negative"));
    }
    Ok(value)
}
