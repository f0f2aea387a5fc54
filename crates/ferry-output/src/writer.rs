//! The `ReportWriter` trait implemented by all backend writers.

use ferry_scenario::SimReport;

use crate::OutputResult;

/// Trait implemented by the JSON and CSV writers.
pub trait ReportWriter {
    /// Write one complete run report.
    fn write(&mut self, report: &SimReport) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
