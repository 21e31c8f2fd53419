//! Domain layer containing scoring logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (risk levels, strictness, priorities, errors)
//! - `input` - Validated request inputs
//! - `risk` - Risk factors, assessments, the baseline report and exposure triage
//! - `cost_benefit` - Strategy economics and ROI ranking
//! - `scenario` - What-if compliance cost projections
//! - `recommendation` - Rule-based advice and action items

pub mod cost_benefit;
pub mod foundation;
pub mod input;
pub mod recommendation;
pub mod risk;
pub mod scenario;
