//! Append-only record of observable simulation events, and the report
//! object handed to the embedding transport layer.
//!
//! Entries are ordered by emission.  Because the scheduler dispatches in
//! `(due, seq)` order and every log append happens inside the live
//! continuation, emission order is chronological; entries sharing a
//! timestamp appear in scheduling-order tie-break.

use ferry_core::{RunParams, SimTime, VesselId};

// ── Events ────────────────────────────────────────────────────────────────────

/// The type-specific payload of one log entry.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum EventKind {
    /// A vehicle joined the terminal queue.
    Arrival { queue_size: usize },
    /// A boarding completed: one vehicle left the queue for a vessel.
    Boarding {
        vessel_id: VesselId,
        queue_size: usize,
        vessel_used_capacity: u32,
    },
    /// A vessel left the dock with its reserved load.
    Departure {
        vessel_id: VesselId,
        queue_size: usize,
        vessel_used_capacity: u32,
    },
    /// A vessel came back to the dock, empty.
    Return {
        vessel_id: VesselId,
        queue_size: usize,
    },
}

/// One observable event with its virtual timestamp.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct EventRecord {
    pub t: SimTime,
    #[serde(flatten)]
    pub kind: EventKind,
}

// ── EventLog ──────────────────────────────────────────────────────────────────

/// Append-only event log.
#[derive(Debug, Default)]
pub struct EventLog {
    entries: Vec<EventRecord>,
}

impl EventLog {
    pub fn new() -> Self {
        EventLog::default()
    }

    pub fn record(&mut self, t: SimTime, kind: EventKind) {
        self.entries.push(EventRecord { t, kind });
    }

    pub fn entries(&self) -> &[EventRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<EventRecord> {
        self.entries
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

/// Aggregate metrics block.  Reserved for future aggregates; serializes as
/// an empty object today.
#[derive(Debug, Clone, Default, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Metrics {}

/// The complete output of one run, handed verbatim to the embedding layer
/// for transport-level serialization.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct SimReport {
    pub initial_parameters: RunParams,
    pub metrics: Metrics,
    pub events: Vec<EventRecord>,
}
