//! `ferry-scenario` — ferry terminal business rules over the event core.
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`scenario`]  | `Scenario` — the four domain processes + run loop     |
//! | [`fleet`]     | `Vessel` slab, `Vehicle`                              |
//! | [`traffic`]   | `TrafficModel` seam, `StochasticTraffic`              |
//! | [`log`]       | `EventLog`, `EventRecord`, `SimReport`                |
//! | [`error`]     | `ScenarioError`, `ScenarioResult`                     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ferry_scenario::{Scenario, StochasticTraffic};
//!
//! let traffic = StochasticTraffic::new(&config, seed)?;
//! let report = Scenario::new(config, params, traffic)?.run()?;
//! serde_json::to_string(&report)?;
//! ```

pub mod error;
pub mod fleet;
pub mod log;
pub mod scenario;
pub mod traffic;

#[cfg(test)]
mod tests;

pub use error::{ScenarioError, ScenarioResult};
pub use fleet::{Vehicle, Vessel};
pub use log::{EventKind, EventLog, EventRecord, Metrics, SimReport};
pub use scenario::Scenario;
pub use traffic::{StochasticTraffic, TrafficModel, CROSSING_TIME_STD_DEV};
