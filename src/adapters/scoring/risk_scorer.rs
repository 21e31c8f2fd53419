//! RiskScorer implementations.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::foundation::AnalysisError;
use crate::domain::input::UploadedDocument;
use crate::domain::risk::RiskFactors;
use crate::ports::RiskScorer;

/// Draws each sub-score uniformly from `[0, 100)`.
///
/// Stands in for real document analysis. With a seed the sequence of scores
/// is reproducible across runs.
#[derive(Debug)]
pub struct RandomRiskScorer {
    rng: Mutex<StdRng>,
}

impl RandomRiskScorer {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomRiskScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskScorer for RandomRiskScorer {
    fn score(&self, _document: &UploadedDocument) -> Result<RiskFactors, AnalysisError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AnalysisError::internal("risk scorer rng lock poisoned"))?;

        let regulatory = rng.gen_range(0.0..100.0);
        let privacy = rng.gen_range(0.0..100.0);
        let environmental = rng.gen_range(0.0..100.0);
        let operational = rng.gen_range(0.0..100.0);

        Ok(RiskFactors::new(regulatory, privacy, environmental, operational)?)
    }
}

/// Returns the same factors for every document.
#[derive(Debug, Clone, Copy)]
pub struct FixedRiskScorer {
    factors: RiskFactors,
}

impl FixedRiskScorer {
    pub fn new(factors: RiskFactors) -> Self {
        Self { factors }
    }
}

impl RiskScorer for FixedRiskScorer {
    fn score(&self, _document: &UploadedDocument) -> Result<RiskFactors, AnalysisError> {
        Ok(self.factors)
    }
}
