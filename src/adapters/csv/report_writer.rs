//! Renders downloadable reports as CSV text.

use csv::{Terminator, Writer, WriterBuilder};

use crate::domain::foundation::AnalysisError;
use crate::domain::risk::{RiskReport, TriagedExposure, REPORT_HEADER};

/// Columns of the triage download, in order.
pub const TRIAGE_HEADER: [&str; 5] = [
    "company",
    "compliance_cost",
    "penalty_cost",
    "savings_if_fixed",
    "recommended_action",
];

/// Header line followed by one line per row, `\n`-separated, no trailing newline.
pub fn render_risk_report(report: &RiskReport) -> Result<String, AnalysisError> {
    let mut wtr = writer();
    write_row(&mut wtr, REPORT_HEADER)?;
    for row in &report.rows {
        write_row(&mut wtr, row.cells())?;
    }
    finish(wtr)
}

/// Triaged exposures in the order given, same line conventions as the risk report.
pub fn render_triage_report(results: &[TriagedExposure]) -> Result<String, AnalysisError> {
    let mut wtr = writer();
    write_row(&mut wtr, TRIAGE_HEADER)?;
    for result in results {
        write_row(
            &mut wtr,
            [
                result.company.clone(),
                result.compliance_cost.to_string(),
                result.penalty_cost.to_string(),
                result.savings_if_fixed.to_string(),
                result.recommended_action.label().to_string(),
            ],
        )?;
    }
    finish(wtr)
}

fn writer() -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(vec![])
}

fn write_row<I, T>(wtr: &mut Writer<Vec<u8>>, record: I) -> Result<(), AnalysisError>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    wtr.write_record(record)
        .map_err(|e| AnalysisError::internal(format!("CSV writer error: {}", e)))
}

fn finish(wtr: Writer<Vec<u8>>) -> Result<String, AnalysisError> {
    let data = wtr
        .into_inner()
        .map_err(|e| AnalysisError::internal(format!("CSV writer error: {}", e)))?;
    let mut text = String::from_utf8(data)
        .map_err(|e| AnalysisError::internal(format!("UTF-8 conversion error: {}", e)))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
