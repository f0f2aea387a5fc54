//! `ferry-core` — foundational types for the ferry terminal simulation.
//!
//! This crate is a dependency of every other `ferry-*` crate.  It has no
//! `ferry-*` dependencies and minimal external ones (`rand`, `thiserror`,
//! `serde`).
//!
//! # What lives here
//!
//! | Module            | Contents                                          |
//! |-------------------|---------------------------------------------------|
//! | [`time`]          | `SimTime` — the virtual time axis                 |
//! | [`ids`]           | `VesselId`                                        |
//! | [`rng`]           | `SimRng` — seeded run-level RNG                   |
//! | [`distributions`] | validated `Exponential` / `Normal` samplers       |
//! | [`config`]        | `TerminalConfig`, `RunParams`, `PeakWindow`       |
//! | [`error`]         | `CoreError`, `CoreResult`                         |

pub mod config;
pub mod distributions;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PeakWindow, RunParams, TerminalConfig};
pub use distributions::{Exponential, Normal};
pub use error::{CoreError, CoreResult};
pub use ids::VesselId;
pub use rng::SimRng;
pub use time::SimTime;
