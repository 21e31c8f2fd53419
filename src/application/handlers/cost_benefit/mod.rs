//! Cost-benefit handlers.

mod analyze_cost_benefit;

pub use analyze_cost_benefit::{
    AnalyzeCostBenefitCommand, AnalyzeCostBenefitHandler, CatalogSource, CostBenefitAnalysis,
};
