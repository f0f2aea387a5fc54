//! CSV output backend.
//!
//! Creates `events.csv` in the configured output directory: one row per log
//! entry, with empty cells for fields a given event type lacks.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use ferry_scenario::{EventKind, SimReport};

use crate::writer::ReportWriter;
use crate::OutputResult;

/// Writes the event log to a CSV file.
pub struct CsvWriter {
    events: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `events.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record([
            "t",
            "event_type",
            "vessel_id",
            "queue_size",
            "vessel_used_capacity",
        ])?;
        Ok(Self {
            events,
            finished: false,
        })
    }
}

impl ReportWriter for CsvWriter {
    fn write(&mut self, report: &SimReport) -> OutputResult<()> {
        for record in &report.events {
            let t = record.t.value().to_string();
            let row = match &record.kind {
                EventKind::Arrival { queue_size } => [
                    t,
                    "arrival".into(),
                    String::new(),
                    queue_size.to_string(),
                    String::new(),
                ],
                EventKind::Boarding {
                    vessel_id,
                    queue_size,
                    vessel_used_capacity,
                } => [
                    t,
                    "boarding".into(),
                    vessel_id.0.to_string(),
                    queue_size.to_string(),
                    vessel_used_capacity.to_string(),
                ],
                EventKind::Departure {
                    vessel_id,
                    queue_size,
                    vessel_used_capacity,
                } => [
                    t,
                    "departure".into(),
                    vessel_id.0.to_string(),
                    queue_size.to_string(),
                    vessel_used_capacity.to_string(),
                ],
                EventKind::Return {
                    vessel_id,
                    queue_size,
                } => [
                    t,
                    "return".into(),
                    vessel_id.0.to_string(),
                    queue_size.to_string(),
                    String::new(),
                ],
            };
            self.events.write_record(&row)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        Ok(())
    }
}
