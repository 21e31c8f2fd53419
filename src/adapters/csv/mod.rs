//! CSV adapters - exposure and strategy ingestion, report rendering.

mod exposure_reader;
mod report_writer;
mod strategy_reader;

pub use exposure_reader::CsvExposureReader;
pub use report_writer::{render_risk_report, render_triage_report, TRIAGE_HEADER};
pub use strategy_reader::CsvStrategyReader;
