//! Cost-Benefit Ranker - ROI ordering of a strategy catalog.

use serde::Serialize;

use crate::domain::foundation::AnalysisError;

use super::strategy::Strategy;

/// A strategy with its ranking and derived economics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedStrategy {
    #[serde(flatten)]
    pub strategy: Strategy,
    pub company: String,
    pub roi: f64,
    /// 1-based position after sorting by ROI, highest first.
    pub rank: usize,
    pub payback_period_months: f64,
    pub implementation_months: u32,
}

/// Ranks strategies by ROI for one company.
pub struct CostBenefitRanker;

impl CostBenefitRanker {
    /// Validates the catalog, estimates implementation time for each strategy
    /// in catalog order, then sorts by ROI descending.
    ///
    /// # Errors
    ///
    /// - `EmptyCatalog` when `catalog` is empty
    /// - `InvalidStrategy` when any entry has a non-positive cost or savings
    /// - whatever `estimate` returns
    ///
    /// The sort is stable: equal ROI keeps catalog order.
    pub fn rank<F>(
        catalog: &[Strategy],
        company: &str,
        mut estimate: F,
    ) -> Result<Vec<RankedStrategy>, AnalysisError>
    where
        F: FnMut(&Strategy) -> Result<u32, AnalysisError>,
    {
        if catalog.is_empty() {
            return Err(AnalysisError::EmptyCatalog);
        }
        for strategy in catalog {
            strategy.validate()?;
        }

        let mut ranked = catalog
            .iter()
            .map(|strategy| {
                Ok(RankedStrategy {
                    strategy: strategy.clone(),
                    company: company.to_string(),
                    roi: strategy.roi(),
                    rank: 0,
                    payback_period_months: strategy.payback_months(),
                    implementation_months: estimate(strategy)?,
                })
            })
            .collect::<Result<Vec<_>, AnalysisError>>()?;

        ranked.sort_by(|a, b| b.roi.total_cmp(&a.roi));
        for (index, entry) in ranked.iter_mut().enumerate() {
            entry.rank = index + 1;
        }

        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cost_benefit::reference_catalog;

    fn fixed(months: u32) -> impl FnMut(&Strategy) -> Result<u32, AnalysisError> {
        move |_| Ok(months)
    }

    #[test]
    fn reference_catalog_keeps_published_order() {
        let ranked = CostBenefitRanker::rank(&reference_catalog(), "Company_1", fixed(9)).unwrap();
        assert_eq!(ranked.len(), 7);
        assert_eq!(ranked[0].strategy.name, "Switch to biofuel");
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[6].strategy.name, "Solar panel integration");
        assert_eq!(ranked[6].rank, 7);
        assert!(ranked.iter().all(|r| r.company == "Company_1"));
        assert!(ranked.iter().all(|r| r.implementation_months == 9));
    }

    #[test]
    fn sorts_descending_by_roi() {
        let catalog = vec![
            Strategy::new("Low", 100.0, 110.0, 0.0),
            Strategy::new("High", 100.0, 300.0, 0.0),
            Strategy::new("Mid", 100.0, 200.0, 0.0),
        ];
        let ranked = CostBenefitRanker::rank(&catalog, "Acme", fixed(6)).unwrap();
        let names: Vec<_> = ranked.iter().map(|r| r.strategy.name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
        assert_eq!(ranked.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = vec![
            Strategy::new("First", 100.0, 200.0, 0.0),
            Strategy::new("Better", 100.0, 500.0, 0.0),
            Strategy::new("Second", 50.0, 100.0, 0.0),
        ];
        let ranked = CostBenefitRanker::rank(&catalog, "Acme", fixed(6)).unwrap();
        let names: Vec<_> = ranked.iter().map(|r| r.strategy.name.as_str()).collect();
        assert_eq!(names, vec!["Better", "First", "Second"]);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let result = CostBenefitRanker::rank(&[], "Acme", fixed(6));
        assert_eq!(result.unwrap_err(), AnalysisError::EmptyCatalog);
    }

    #[test]
    fn zero_savings_is_rejected_before_division() {
        let catalog = vec![
            Strategy::new("Fine", 100.0, 200.0, 0.0),
            Strategy::new("Broken", 100.0, 0.0, 0.0),
        ];
        let err = CostBenefitRanker::rank(&catalog, "Acme", fixed(6)).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidStrategy { ref name, .. } if name == "Broken"));
    }

    #[test]
    fn estimates_are_taken_in_catalog_order() {
        let catalog = vec![
            Strategy::new("Slow payer", 100.0, 110.0, 0.0),
            Strategy::new("Fast payer", 100.0, 900.0, 0.0),
        ];
        let mut next = 5;
        let ranked = CostBenefitRanker::rank(&catalog, "Acme", |_| {
            next += 1;
            Ok(next)
        })
        .unwrap();
        assert_eq!(ranked[0].strategy.name, "Fast payer");
        assert_eq!(ranked[0].implementation_months, 7);
        assert_eq!(ranked[1].implementation_months, 6);
    }

    #[test]
    fn estimator_failure_propagates() {
        let result = CostBenefitRanker::rank(&reference_catalog(), "Acme", |_| {
            Err(AnalysisError::internal("estimator offline"))
        });
        assert_eq!(result.unwrap_err(), AnalysisError::internal("estimator offline"));
    }
}
