//! Cost-Benefit Module - ROI ranking of mitigation strategies.

mod ranker;
mod strategy;

pub use ranker::{CostBenefitRanker, RankedStrategy};
pub use strategy::{companies_in, reference_catalog, strategies_for, CompanyStrategy, Strategy};
