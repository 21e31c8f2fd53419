//! Scenario Module - what-if projections of compliance cost.

mod company;
mod projector;

pub use company::CompanyProfile;
pub use projector::{
    round_cents, CompanyProjection, ScenarioProjection, ScenarioProjector, TimelineBand,
};
