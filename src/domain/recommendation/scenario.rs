//! Advice tables for what-if regulatory scenarios.

use crate::domain::foundation::Strictness;
use crate::domain::scenario::TimelineBand;

const BASE_RECOMMENDATIONS: [&str; 3] = [
    "Conduct comprehensive compliance audit",
    "Develop implementation roadmap",
    "Establish monitoring systems",
];

/// Actions every scenario needs regardless of its knobs.
pub const COMPLIANCE_ACTIONS: [&str; 4] = [
    "Update emission monitoring systems",
    "Implement new reporting protocols",
    "Staff training on new regulations",
    "Infrastructure upgrades for compliance",
];

fn strictness_recommendations(strictness: Strictness) -> &'static [&'static str] {
    match strictness {
        Strictness::Low => &["Focus on basic compliance measures"],
        Strictness::Medium => &["Implement proactive monitoring", "Regular compliance reviews"],
        Strictness::High => &["Immediate action plan required", "Dedicated compliance team"],
        Strictness::VeryHigh => &[
            "Emergency compliance protocol",
            "External regulatory consulting",
            "Accelerated implementation timeline",
        ],
    }
}

fn timeline_recommendations(band: TimelineBand) -> &'static [&'static str] {
    match band {
        TimelineBand::Compressed => &[
            "Prioritize critical compliance areas",
            "Consider interim measures",
        ],
        TimelineBand::Extended => &[
            "Phased implementation approach",
            "Long-term strategic planning",
        ],
        TimelineBand::Standard => &["Balanced implementation timeline"],
    }
}

/// Base advice, then strictness-specific (none when unrecognised), then timeline.
pub fn scenario_advice(strictness: Option<Strictness>, timeline_years: u32) -> Vec<String> {
    let strictness_specific: &[&str] = strictness.map(strictness_recommendations).unwrap_or(&[]);

    BASE_RECOMMENDATIONS
        .iter()
        .chain(strictness_specific.iter())
        .chain(timeline_recommendations(TimelineBand::for_years(timeline_years)).iter())
        .map(|s| s.to_string())
        .collect()
}
