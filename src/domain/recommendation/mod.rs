//! Recommendation Module - static advice tables and the composer over them.
//!
//! # Components
//!
//! - `RecommendationComposer` - risk-level and sub-score driven advice plus action items
//! - `cost_benefit_advice` - guidance for the top-ranked mitigation strategy
//! - `scenario_advice` - guidance for a regulatory what-if scenario

mod composer;
mod cost_benefit;
mod scenario;

pub use composer::{
    ActionItem, Composition, RecommendationComposer, ACTION_ITEM_THRESHOLD,
    RECOMMENDATION_THRESHOLD,
};
pub use cost_benefit::cost_benefit_advice;
pub use scenario::{scenario_advice, COMPLIANCE_ACTIONS};
