//! Advice for the top-ranked mitigation strategy.

/// ROI (percent) above which immediate implementation is advised.
pub const HIGH_ROI_PERCENT: f64 = 25.0;
/// ROI (percent) above which phased implementation is advised.
pub const GOOD_ROI_PERCENT: f64 = 15.0;
/// Payback below this many years is called out as excellent.
pub const SHORT_PAYBACK_YEARS: f64 = 2.0;
/// Payback above this many years suggests alternatives.
pub const LONG_PAYBACK_YEARS: f64 = 4.0;
/// Implementation longer than this many months needs a phased rollout.
pub const EXTENDED_IMPLEMENTATION_MONTHS: u32 = 10;

/// Builds the recommendation list for the best strategy.
pub fn cost_benefit_advice(
    roi_percent: f64,
    payback_months: f64,
    implementation_months: u32,
) -> Vec<String> {
    let mut out = Vec::new();

    let roi_advice = if roi_percent > HIGH_ROI_PERCENT {
        "High ROI potential - prioritize immediate implementation"
    } else if roi_percent > GOOD_ROI_PERCENT {
        "Good ROI - consider phased implementation"
    } else {
        "Lower ROI - evaluate cost optimization opportunities"
    };
    out.push(roi_advice.to_string());

    let payback_years = payback_months / 12.0;
    if payback_years < SHORT_PAYBACK_YEARS {
        out.push("Short payback period - excellent investment opportunity".to_string());
    } else if payback_years > LONG_PAYBACK_YEARS {
        out.push("Long payback period - consider alternative approaches".to_string());
    }

    if implementation_months > EXTENDED_IMPLEMENTATION_MONTHS {
        out.push("Extended implementation timeline - plan for phased rollout".to_string());
    }

    out.push("Monitor regulatory changes that may affect ROI calculations".to_string());
    out.push("Consider additional benefits beyond direct cost savings".to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_fast_short_strategy() {
        let advice = cost_benefit_advice(222.7, 3.7, 8);
        assert_eq!(
            advice,
            vec![
                "High ROI potential - prioritize immediate implementation",
                "Short payback period - excellent investment opportunity",
                "Monitor regulatory changes that may affect ROI calculations",
                "Consider additional benefits beyond direct cost savings",
            ]
        );
    }

    #[test]
    fn roi_bands_use_strict_comparisons() {
        assert_eq!(
            cost_benefit_advice(25.0, 30.0, 6)[0],
            "Good ROI - consider phased implementation"
        );
        assert_eq!(
            cost_benefit_advice(15.0, 30.0, 6)[0],
            "Lower ROI - evaluate cost optimization opportunities"
        );
    }

    #[test]
    fn long_payback_and_extended_rollout() {
        let advice = cost_benefit_advice(5.0, 60.0, 11);
        let has = |line: &str| advice.iter().any(|a| a == line);
        assert!(has("Long payback period - consider alternative approaches"));
        assert!(has("Extended implementation timeline - plan for phased rollout"));
    }

    #[test]
    fn mid_payback_adds_no_payback_advice() {
        let advice = cost_benefit_advice(20.0, 36.0, 10);
        assert_eq!(advice.len(), 3);
    }
}
