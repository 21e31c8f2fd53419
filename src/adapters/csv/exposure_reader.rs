//! CSV implementation of the `ExposureReader` port.

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::domain::foundation::AnalysisError;
use crate::domain::risk::ComplianceExposure;
use crate::ports::ExposureReader;

const REQUIRED_COLUMNS: [&str; 3] = ["company_name", "compliance_cost", "penalty_cost"];

#[derive(Debug, Deserialize)]
struct ExposureRecord {
    company_name: String,
    compliance_cost: f64,
    penalty_cost: f64,
}

/// Reads headed CSV. Columns may appear in any order; extra columns are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExposureReader;

impl CsvExposureReader {
    pub fn new() -> Self {
        Self
    }
}

impl ExposureReader for CsvExposureReader {
    fn read_exposures(&self, data: &str) -> Result<Vec<ComplianceExposure>, AnalysisError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(data.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AnalysisError::invalid_input(format!("Unreadable CSV header: {}", e)))?;
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

        let mut exposures = Vec::new();
        for (index, result) in reader.deserialize::<ExposureRecord>().enumerate() {
            // Header is line 1.
            let line = index + 2;
            let record = result.map_err(|e| {
                AnalysisError::invalid_input(format!("Invalid exposure on line {}: {}", line, e))
            })?;
            exposures.push(ComplianceExposure::new(
                record.company_name,
                record.compliance_cost,
                record.penalty_cost,
            )?);
        }

        if exposures.is_empty() {
            return Err(AnalysisError::invalid_input("CSV contains no exposure rows"));
        }
        Ok(exposures)
    }
}
