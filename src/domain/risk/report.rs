//! Downloadable compliance risk report.

use crate::domain::foundation::{Priority, RiskLevel};

/// Column headers, in order.
pub const REPORT_HEADER: [&str; 5] = ["Risk Area", "Score", "Level", "Recommendation", "Priority"];

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskReportRow {
    pub area: &'static str,
    pub score: u8,
    pub recommendation: &'static str,
}

impl RiskReportRow {
    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_score(f64::from(self.score))
    }

    pub fn priority(&self) -> Priority {
        if self.level().is_elevated() {
            Priority::High
        } else {
            Priority::Medium
        }
    }

    /// The row as five display cells matching [`REPORT_HEADER`].
    pub fn cells(&self) -> [String; 5] {
        [
            self.area.to_string(),
            self.score.to_string(),
            self.level().label().to_string(),
            self.recommendation.to_string(),
            self.priority().label().to_string(),
        ]
    }
}

/// The four-area baseline report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskReport {
    pub rows: Vec<RiskReportRow>,
}

impl RiskReport {
    pub fn baseline() -> Self {
        Self {
            rows: vec![
                RiskReportRow {
                    area: "Regulatory Compliance",
                    score: 75,
                    recommendation: "Immediate regulatory review required",
                },
                RiskReportRow {
                    area: "Data Privacy",
                    score: 68,
                    recommendation: "Audit data handling procedures",
                },
                RiskReportRow {
                    area: "Environmental Impact",
                    score: 45,
                    recommendation: "Assess environmental procedures",
                },
                RiskReportRow {
                    area: "Operational Risk",
                    score: 52,
                    recommendation: "Review operational processes",
                },
            ],
        }
    }
}
