//! AnalyzeCostBenefitHandler - ranks mitigation strategies for a company.

use std::sync::Arc;

use crate::domain::cost_benefit::{
    companies_in, strategies_for, CostBenefitRanker, RankedStrategy, Strategy,
};
use crate::domain::foundation::AnalysisError;
use crate::domain::input::StrategySelection;
use crate::domain::recommendation::cost_benefit_advice;
use crate::ports::{ImplementationEstimator, StrategyReader};

/// Command to run a cost-benefit analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeCostBenefitCommand {
    pub selection: StrategySelection,
}

/// Where the ranked strategies came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// Rows uploaded for the selected company.
    Uploaded,
    /// The built-in reference catalog.
    Reference,
}

impl CatalogSource {
    pub fn label(&self) -> &'static str {
        match self {
            CatalogSource::Uploaded => "uploaded",
            CatalogSource::Reference => "reference",
        }
    }
}

/// Result of a cost-benefit analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBenefitAnalysis {
    pub selected_company: String,
    /// Highest ROI first.
    pub rankings: Vec<RankedStrategy>,
    pub recommendations: Vec<String>,
    pub catalog_source: CatalogSource,
    /// Companies named in the upload, first appearance first. Empty when the
    /// upload was not a strategy table.
    pub companies: Vec<String>,
}

impl CostBenefitAnalysis {
    /// The top-ranked strategy.
    pub fn best(&self) -> Option<&RankedStrategy> {
        self.rankings.first()
    }
}

/// Handler for cost-benefit analysis.
///
/// Ranks the selected company's uploaded strategies when the upload is a
/// strategy table that lists that company; otherwise ranks the reference
/// catalog.
pub struct AnalyzeCostBenefitHandler {
    catalog: Arc<[Strategy]>,
    reader: Arc<dyn StrategyReader>,
    estimator: Arc<dyn ImplementationEstimator>,
}

impl AnalyzeCostBenefitHandler {
    pub fn new(
        catalog: Arc<[Strategy]>,
        reader: Arc<dyn StrategyReader>,
        estimator: Arc<dyn ImplementationEstimator>,
    ) -> Self {
        Self {
            catalog,
            reader,
            estimator,
        }
    }

    pub fn handle(
        &self,
        cmd: AnalyzeCostBenefitCommand,
    ) -> Result<CostBenefitAnalysis, AnalysisError> {
        let company = cmd.selection.selected_company();

        let (catalog, catalog_source, companies) =
            match self.reader.read_strategies(cmd.selection.csv_data())? {
                Some(rows) => {
                    let own = strategies_for(&rows, company);
                    let companies = companies_in(&rows);
                    if own.is_empty() {
                        tracing::warn!(
                            company = %company,
                            uploaded_companies = companies.len(),
                            "Upload has no strategies for company; ranking reference catalog"
                        );
                        (self.catalog.to_vec(), CatalogSource::Reference, companies)
                    } else {
                        (own, CatalogSource::Uploaded, companies)
                    }
                }
                None => (self.catalog.to_vec(), CatalogSource::Reference, Vec::new()),
            };

        let rankings = CostBenefitRanker::rank(&catalog, company, |strategy| {
            self.estimator.estimate_months(strategy)
        })?;

        // rank() rejects an empty catalog, so a best entry always exists here.
        let recommendations = rankings
            .first()
            .map(|best| {
                cost_benefit_advice(
                    best.roi,
                    best.payback_period_months,
                    best.implementation_months,
                )
            })
            .unwrap_or_default();

        tracing::info!(
            company = %company,
            source = catalog_source.label(),
            strategies = rankings.len(),
            best = rankings.first().map(|b| b.strategy.name.as_str()).unwrap_or_default(),
            "Cost-benefit analysis completed"
        );

        Ok(CostBenefitAnalysis {
            selected_company: company.to_string(),
            rankings,
            recommendations,
            catalog_source,
            companies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cost_benefit::{reference_catalog, CompanyStrategy};

    struct FixedEstimate(u32);

    impl ImplementationEstimator for FixedEstimate {
        fn estimate_months(&self, _strategy: &Strategy) -> Result<u32, AnalysisError> {
            Ok(self.0)
        }
    }

    /// Returns the same parse result for any input.
    struct StubReader(Option<Vec<CompanyStrategy>>);

    impl StrategyReader for StubReader {
        fn read_strategies(
            &self,
            _data: &str,
        ) -> Result<Option<Vec<CompanyStrategy>>, AnalysisError> {
            Ok(self.0.clone())
        }
    }

    fn command(company: &str) -> AnalyzeCostBenefitCommand {
        AnalyzeCostBenefitCommand {
            selection: StrategySelection::new("emissions report", company).unwrap(),
        }
    }

    fn handler(catalog: Vec<Strategy>, months: u32) -> AnalyzeCostBenefitHandler {
        with_upload(catalog, None, months)
    }

    fn with_upload(
        catalog: Vec<Strategy>,
        rows: Option<Vec<CompanyStrategy>>,
        months: u32,
    ) -> AnalyzeCostBenefitHandler {
        AnalyzeCostBenefitHandler::new(
            catalog.into(),
            Arc::new(StubReader(rows)),
            Arc::new(FixedEstimate(months)),
        )
    }

    fn row(company: &str, name: &str, cost: f64, savings: f64) -> CompanyStrategy {
        CompanyStrategy {
            company: company.to_string(),
            strategy: Strategy::new(name, cost, savings, 0.0),
        }
    }

    #[test]
    fn ranks_reference_catalog() {
        let result = handler(reference_catalog(), 8).handle(command("Company_3")).unwrap();

        assert_eq!(result.selected_company, "Company_3");
        assert_eq!(result.rankings.len(), 7);
        assert_eq!(result.best().unwrap().strategy.name, "Switch to biofuel");
        assert_eq!(result.catalog_source, CatalogSource::Reference);
        assert!(result.companies.is_empty());
    }

    #[test]
    fn ranks_uploaded_rows_for_selected_company() {
        let rows = vec![
            row("Acme", "Insulation", 100.0, 150.0),
            row("Globex", "Solar", 100.0, 900.0),
            row("Acme", "Heat pumps", 100.0, 400.0),
        ];
        let result = with_upload(reference_catalog(), Some(rows), 8)
            .handle(command("Acme"))
            .unwrap();

        let names: Vec<_> = result.rankings.iter().map(|r| r.strategy.name.as_str()).collect();
        assert_eq!(names, vec!["Heat pumps", "Insulation"]);
        assert_eq!(result.catalog_source, CatalogSource::Uploaded);
        assert_eq!(result.companies, vec!["Acme", "Globex"]);
        assert!(result.rankings.iter().all(|r| r.company == "Acme"));
    }

    #[test]
    fn unlisted_company_falls_back_to_reference_catalog() {
        let rows = vec![row("Globex", "Solar", 100.0, 900.0)];
        let result = with_upload(reference_catalog(), Some(rows), 8)
            .handle(command("Acme"))
            .unwrap();

        assert_eq!(result.catalog_source, CatalogSource::Reference);
        assert_eq!(result.rankings.len(), 7);
        assert_eq!(result.companies, vec!["Globex"]);
    }

    #[test]
    fn advice_follows_best_strategy() {
        // Biofuel: ROI ~222.7%, payback ~3.7 months (0.31 years), 8 month rollout.
        let result = handler(reference_catalog(), 8).handle(command("Acme")).unwrap();
        assert_eq!(
            result.recommendations,
            vec![
                "High ROI potential - prioritize immediate implementation",
                "Short payback period - excellent investment opportunity",
                "Monitor regulatory changes that may affect ROI calculations",
                "Consider additional benefits beyond direct cost savings",
            ]
        );
    }

    #[test]
    fn long_rollout_adds_phasing_advice() {
        let result = handler(reference_catalog(), 14).handle(command("Acme")).unwrap();
        assert!(result
            .recommendations
            .contains(&"Extended implementation timeline - plan for phased rollout".to_string()));
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let err = handler(vec![], 8).handle(command("Acme")).unwrap_err();
        assert_eq!(err, AnalysisError::EmptyCatalog);
    }
}
