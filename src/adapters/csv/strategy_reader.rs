//! CSV implementation of the `StrategyReader` port.

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::domain::cost_benefit::{CompanyStrategy, Strategy};
use crate::domain::foundation::AnalysisError;
use crate::ports::StrategyReader;

/// Column whose presence marks an upload as a strategy table.
const MARKER_COLUMN: &str = "strategy";

const REQUIRED_COLUMNS: [&str; 5] = [
    "company",
    "strategy",
    "cost",
    "projected_savings",
    "waste_reduction",
];

#[derive(Debug, Deserialize)]
struct StrategyRecord {
    company: String,
    strategy: String,
    cost: f64,
    projected_savings: f64,
    waste_reduction: f64,
}

/// Reads headed CSV in any column order; extra columns are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvStrategyReader;

impl CsvStrategyReader {
    pub fn new() -> Self {
        Self
    }
}

impl StrategyReader for CsvStrategyReader {
    fn read_strategies(&self, data: &str) -> Result<Option<Vec<CompanyStrategy>>, AnalysisError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(data.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AnalysisError::invalid_input(format!("Unreadable CSV header: {}", e)))?;
        if !headers.iter().any(|h| h == MARKER_COLUMN) {
            return Ok(None);
        }
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();
        if !missing.is_empty() {
            return Err(AnalysisError::invalid_input(format!(
                "Missing required columns: {}",
                missing.join(", ")
            )));
        }

        let mut rows = Vec::new();
        for (index, result) in reader.deserialize::<StrategyRecord>().enumerate() {
            let line = index + 2;
            let record = result.map_err(|e| {
                AnalysisError::invalid_input(format!("Invalid strategy on line {}: {}", line, e))
            })?;
            if record.company.is_empty() {
                return Err(AnalysisError::invalid_input(format!(
                    "Invalid strategy on line {}: company cannot be empty",
                    line
                )));
            }

            let strategy = Strategy::new(
                record.strategy,
                record.cost,
                record.projected_savings,
                record.waste_reduction,
            );
            // Uploaded rows are caller data, so a zero cost is a bad request.
            strategy.validate().map_err(|e| {
                AnalysisError::invalid_input(format!("Invalid strategy on line {}: {}", line, e))
            })?;

            rows.push(CompanyStrategy {
                company: record.company,
                strategy,
            });
        }

        if rows.is_empty() {
            return Err(AnalysisError::invalid_input("CSV contains no strategy rows"));
        }
        Ok(Some(rows))
    }
}
