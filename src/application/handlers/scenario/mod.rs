//! Scenario handlers.

mod analyze_scenario;

pub use analyze_scenario::{AnalyzeScenarioCommand, AnalyzeScenarioHandler, ScenarioAnalysis};
