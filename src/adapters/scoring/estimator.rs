//! ImplementationEstimator implementations.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::cost_benefit::Strategy;
use crate::domain::foundation::AnalysisError;
use crate::ports::ImplementationEstimator;

/// Picks a whole number of months uniformly from `min..=max`.
#[derive(Debug)]
pub struct RandomImplementationEstimator {
    min_months: u32,
    max_months: u32,
    rng: Mutex<StdRng>,
}

impl RandomImplementationEstimator {
    /// Bounds are swapped if given in the wrong order.
    pub fn new(min_months: u32, max_months: u32) -> Self {
        Self::with_rng(min_months, max_months, StdRng::from_entropy())
    }

    pub fn seeded(min_months: u32, max_months: u32, seed: u64) -> Self {
        Self::with_rng(min_months, max_months, StdRng::seed_from_u64(seed))
    }

    fn with_rng(min_months: u32, max_months: u32, rng: StdRng) -> Self {
        Self {
            min_months: min_months.min(max_months),
            max_months: min_months.max(max_months),
            rng: Mutex::new(rng),
        }
    }
}

impl ImplementationEstimator for RandomImplementationEstimator {
    fn estimate_months(&self, _strategy: &Strategy) -> Result<u32, AnalysisError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AnalysisError::internal("estimator rng lock poisoned"))?;
        Ok(rng.gen_range(self.min_months..=self.max_months))
    }
}

/// Same estimate for every strategy.
#[derive(Debug, Clone, Copy)]
pub struct FixedImplementationEstimator {
    months: u32,
}

impl FixedImplementationEstimator {
    pub fn new(months: u32) -> Self {
        Self { months }
    }
}

impl ImplementationEstimator for FixedImplementationEstimator {
    fn estimate_months(&self, _strategy: &Strategy) -> Result<u32, AnalysisError> {
        Ok(self.months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy() -> Strategy {
        Strategy::new("Switch to biofuel", 144_811.0, 467_319.0, 85.0)
    }

    #[test]
    fn random_estimates_respect_bounds() {
        let estimator = RandomImplementationEstimator::new(6, 17);
        for _ in 0..500 {
            let months = estimator.estimate_months(&strategy()).unwrap();
            assert!((6..=17).contains(&months));
        }
    }

    #[test]
    fn reversed_bounds_are_normalised() {
        let estimator = RandomImplementationEstimator::seeded(12, 8, 1);
        for _ in 0..100 {
            let months = estimator.estimate_months(&strategy()).unwrap();
            assert!((8..=12).contains(&months));
        }
    }

    #[test]
    fn degenerate_range_is_constant() {
        let estimator = RandomImplementationEstimator::seeded(9, 9, 3);
        assert_eq!(estimator.estimate_months(&strategy()).unwrap(), 9);
    }

    #[test]
    fn seeded_estimates_repeat() {
        let a = RandomImplementationEstimator::seeded(6, 17, 99);
        let b = RandomImplementationEstimator::seeded(6, 17, 99);
        let xs: Vec<u32> = (0..10).map(|_| a.estimate_months(&strategy()).unwrap()).collect();
        let ys: Vec<u32> = (0..10).map(|_| b.estimate_months(&strategy()).unwrap()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn fixed_estimator() {
        assert_eq!(FixedImplementationEstimator::new(11).estimate_months(&strategy()).unwrap(), 11);
    }
}
