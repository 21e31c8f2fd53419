//! GenerateRiskReportHandler - the downloadable four-area report.

use crate::domain::risk::RiskReport;

/// Handler for the risk report download. The report content is fixed.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenerateRiskReportHandler;

impl GenerateRiskReportHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self) -> RiskReport {
        RiskReport::baseline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_has_four_rows() {
        let report = GenerateRiskReportHandler::new().handle();
        assert_eq!(report.rows.len(), 4);
    }
}
