//! Remediation timeline keyed by risk level.

use crate::domain::foundation::RiskLevel;

/// Four-phase remediation plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemediationTimeline {
    pub immediate: &'static str,
    pub short_term: &'static str,
    pub medium_term: &'static str,
    pub long_term: &'static str,
}

const URGENT_PLAN: RemediationTimeline = RemediationTimeline {
    immediate: "Emergency response and immediate risk mitigation",
    short_term: "Implement critical compliance measures",
    medium_term: "Establish ongoing monitoring systems",
    long_term: "Continuous improvement and optimization",
};

const STANDARD_PLAN: RemediationTimeline = RemediationTimeline {
    immediate: "Initial risk assessment and planning",
    short_term: "Implement recommended improvements",
    medium_term: "Monitor and adjust compliance measures",
    long_term: "Maintain and optimize compliance framework",
};

impl RemediationTimeline {
    pub fn for_level(level: RiskLevel) -> Self {
        if level.is_elevated() {
            URGENT_PLAN
        } else {
            STANDARD_PLAN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevated_levels_get_urgent_plan() {
        assert_eq!(RemediationTimeline::for_level(RiskLevel::High), URGENT_PLAN);
        assert_eq!(RemediationTimeline::for_level(RiskLevel::VeryHigh), URGENT_PLAN);
    }

    #[test]
    fn other_levels_get_standard_plan() {
        let plan = RemediationTimeline::for_level(RiskLevel::Medium);
        assert_eq!(plan.immediate, "Initial risk assessment and planning");
        assert_eq!(RemediationTimeline::for_level(RiskLevel::Low), STANDARD_PLAN);
    }
}
