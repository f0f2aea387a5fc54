//! JSON output backend.
//!
//! Writes the complete report object — `initial_parameters`, `metrics`,
//! `events` — as pretty-printed JSON, the same shape the embedding
//! transport layer serves.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ferry_scenario::SimReport;

use crate::writer::ReportWriter;
use crate::OutputResult;

/// Writes the full run report to a single JSON file.
pub struct JsonWriter {
    out: BufWriter<File>,
    finished: bool,
}

impl JsonWriter {
    /// Open (or create) `report.json` in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let file = File::create(dir.join("report.json"))?;
        Ok(Self {
            out: BufWriter::new(file),
            finished: false,
        })
    }
}

impl ReportWriter for JsonWriter {
    fn write(&mut self, report: &SimReport) -> OutputResult<()> {
        serde_json::to_writer_pretty(&mut self.out, report)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
