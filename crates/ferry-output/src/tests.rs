//! Integration tests for ferry-output.

use ferry_core::{RunParams, SimTime, VesselId};
use ferry_scenario::{EventKind, EventRecord, Metrics, SimReport};
use tempfile::TempDir;

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn sample_report() -> SimReport {
    SimReport {
        initial_parameters: RunParams {
            vessels_number: 2,
            each_vessel_departure_period: 10,
        },
        metrics: Metrics::default(),
        events: vec![
            EventRecord {
                t: SimTime::new(0.5),
                kind: EventKind::Arrival { queue_size: 1 },
            },
            EventRecord {
                t: SimTime::new(1.25),
                kind: EventKind::Boarding {
                    vessel_id: VesselId(0),
                    queue_size: 0,
                    vessel_used_capacity: 1,
                },
            },
            EventRecord {
                t: SimTime::new(10.0),
                kind: EventKind::Departure {
                    vessel_id: VesselId(0),
                    queue_size: 0,
                    vessel_used_capacity: 1,
                },
            },
            EventRecord {
                t: SimTime::new(18.0),
                kind: EventKind::Return {
                    vessel_id: VesselId(0),
                    queue_size: 0,
                },
            },
        ],
    }
}

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::ReportWriter;

    #[test]
    fn csv_file_created_with_header() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["t", "event_type", "vessel_id", "queue_size", "vessel_used_capacity"]
        );
    }

    #[test]
    fn csv_rows_match_the_log() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write(&sample_report()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[0][1], "arrival");
        assert_eq!(&rows[0][2], ""); // arrivals have no vessel
        assert_eq!(&rows[1][1], "boarding");
        assert_eq!(&rows[1][2], "0");
        assert_eq!(&rows[1][4], "1");
        assert_eq!(&rows[3][1], "return");
        assert_eq!(&rows[3][4], ""); // returns carry no capacity
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod json_tests {
    use super::*;
    use crate::json::JsonWriter;
    use crate::writer::ReportWriter;

    #[test]
    fn json_report_round_trips() {
        let dir = tmp();
        let report = sample_report();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        w.write(&report).unwrap();
        w.finish().unwrap();

        let raw = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
        let back: SimReport = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn json_uses_the_wire_shape() {
        let dir = tmp();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        w.write(&sample_report()).unwrap();
        w.finish().unwrap();

        let raw = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["initial_parameters"]["vessels_number"], 2);
        assert_eq!(value["metrics"], serde_json::json!({}));
        assert_eq!(value["events"][0]["event_type"], "arrival");
        assert_eq!(value["events"][3]["event_type"], "return");
    }
}
