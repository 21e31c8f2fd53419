//! Recommendation Composer - canned advice keyed by risk level and sub-scores.
//!
//! Two distinct gates apply: a sub-score above [`RECOMMENDATION_THRESHOLD`]
//! adds advice text, while only a sub-score above [`ACTION_ITEM_THRESHOLD`]
//! adds a concrete action item.

use serde::Serialize;

use crate::domain::foundation::{Priority, RiskLevel};
use crate::domain::risk::{RiskArea, RiskFactors};

/// Sub-score gate for area-specific recommendations.
pub const RECOMMENDATION_THRESHOLD: f64 = 60.0;

/// Sub-score gate for area-specific action items.
pub const ACTION_ITEM_THRESHOLD: f64 = 70.0;

const ELEVATED_RESPONSE: [&str; 3] = [
    "Immediate action required - establish crisis response team",
    "Conduct emergency compliance audit",
    "Implement interim risk mitigation measures",
];

const BASELINE_RECOMMENDATIONS: [&str; 3] = [
    "Establish regular compliance monitoring",
    "Train staff on compliance requirements",
    "Document all compliance activities",
];

fn area_recommendations(area: RiskArea) -> &'static [&'static str] {
    match area {
        RiskArea::Regulatory => &[
            "Monitor regulatory changes closely",
            "Engage with regulatory consultants",
        ],
        RiskArea::Privacy => &[
            "Review data handling procedures",
            "Implement additional privacy controls",
        ],
        RiskArea::Environmental => &[
            "Assess environmental impact procedures",
            "Consider carbon offset programs",
        ],
        RiskArea::Operational => &[],
    }
}

struct ActionTemplate {
    action: &'static str,
    priority: Priority,
    timeline: &'static str,
    responsible: &'static str,
}

impl ActionTemplate {
    fn to_item(&self) -> ActionItem {
        ActionItem {
            action: self.action.to_string(),
            priority: self.priority,
            timeline: self.timeline.to_string(),
            responsible: self.responsible.to_string(),
        }
    }
}

fn area_action(area: RiskArea) -> Option<ActionTemplate> {
    match area {
        RiskArea::Regulatory => Some(ActionTemplate {
            action: "Review regulatory compliance procedures",
            priority: Priority::High,
            timeline: "2-3 weeks",
            responsible: "Legal Team",
        }),
        RiskArea::Privacy => Some(ActionTemplate {
            action: "Audit data privacy controls",
            priority: Priority::High,
            timeline: "1-2 weeks",
            responsible: "IT Security Team",
        }),
        RiskArea::Environmental | RiskArea::Operational => None,
    }
}

const MONITORING_ACTION: ActionTemplate = ActionTemplate {
    action: "Implement monitoring dashboard",
    priority: Priority::Medium,
    timeline: "3-4 weeks",
    responsible: "IT Team",
};

/// A concrete remediation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionItem {
    pub action: String,
    pub priority: Priority,
    pub timeline: String,
    pub responsible: String,
}

/// Output of [`RecommendationComposer::compose`].
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub recommendations: Vec<String>,
    pub action_items: Vec<ActionItem>,
}

/// Pure lookup over the static template tables.
pub struct RecommendationComposer;

impl RecommendationComposer {
    pub fn compose(level: RiskLevel, factors: &RiskFactors) -> Composition {
        Composition {
            recommendations: Self::recommendations(level, factors),
            action_items: Self::action_items(level, factors),
        }
    }

    /// Elevated-level response, then per-area advice, then the baseline set.
    pub fn recommendations(level: RiskLevel, factors: &RiskFactors) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();

        if level.is_elevated() {
            out.extend(ELEVATED_RESPONSE.iter().map(|s| s.to_string()));
        }

        for area in RiskArea::ALL {
            if factors.score(area) > RECOMMENDATION_THRESHOLD {
                out.extend(area_recommendations(area).iter().map(|s| s.to_string()));
            }
        }

        out.extend(BASELINE_RECOMMENDATIONS.iter().map(|s| s.to_string()));
        out
    }

    /// Assessment first, area audits next, monitoring dashboard last.
    pub fn action_items(level: RiskLevel, factors: &RiskFactors) -> Vec<ActionItem> {
        let assessment_priority = if level.is_elevated() {
            Priority::High
        } else {
            Priority::Medium
        };

        let mut items = vec![ActionItem {
            action: "Conduct comprehensive risk assessment".to_string(),
            priority: assessment_priority,
            timeline: "1-2 weeks".to_string(),
            responsible: "Compliance Team".to_string(),
        }];

        for area in RiskArea::ALL {
            if factors.score(area) > ACTION_ITEM_THRESHOLD {
                if let Some(template) = area_action(area) {
                    items.push(template.to_item());
                }
            }
        }

        items.push(MONITORING_ACTION.to_item());
        items
    }
}
