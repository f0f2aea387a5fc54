//! `ferry-engine` — the discrete-event core of the ferry terminal simulation.
//!
//! # Execution model
//!
//! ```text
//! loop:
//!   ① Pop    — earliest pending event with due < horizon (FIFO at ties).
//!   ② Advance — clock jumps to the event's due time (never backward).
//!   ③ Resume — the owning process runs to its next suspension point:
//!               a timed delay (schedule_after) or a resource wait
//!               (a store `get` returning Pending).
//! ```
//!
//! Exactly one continuation is live at a time; all of its effects complete
//! before the next pop.  "Concurrency" is cooperative multiplexing of
//! logically-parallel processes over virtual time — there are no threads
//! and no locks, and none are needed.
//!
//! The domain processes themselves live in `ferry-scenario`; this crate
//! knows nothing about vehicles or vessels.

pub mod error;
pub mod scheduler;
pub mod store;


pub use error::{EngineError, EngineResult};
pub use scheduler::EventScheduler;
pub use store::{Acquire, FilterableResourceStore, Handoff, ResourceStore, WaiterId};
