//! `ferry-output` — run report writers for the ferry terminal simulation.
//!
//! Two backends, both implementing [`ReportWriter`]:
//!
//! | Backend      | File created   | Contents                              |
//! |--------------|----------------|---------------------------------------|
//! | [`JsonWriter`] | `report.json` | the full report object                |
//! | [`CsvWriter`]  | `events.csv`  | one row per event-log entry           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use ferry_output::{JsonWriter, ReportWriter};
//!
//! let mut writer = JsonWriter::new(Path::new("./output"))?;
//! writer.write(&report)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use writer::ReportWriter;
