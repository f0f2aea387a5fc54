//! Simulation time model.
//!
//! # Design
//!
//! Virtual time is a continuous `f64` wrapped in [`SimTime`].  The clock is
//! decoupled from wall time entirely: it advances only when the scheduler
//! pops a pending event, never by observation of the host clock.
//!
//! Delays in this model come from continuous distributions (exponential
//! inter-arrival and service times), so an integer tick would force a
//! rounding policy onto every draw.  A float time axis keeps the draws
//! exact; total ordering is recovered with `f64::total_cmp`, which gives
//! `SimTime` a lawful `Ord` despite the float payload.

use std::cmp::Ordering;
use std::fmt;

/// A point on the simulation's virtual time axis.
///
/// `SimTime` is totally ordered (`total_cmp`), so it can key a priority
/// queue directly.  Construction does not reject NaN — the scheduler rejects
/// non-finite *delays* instead, which keeps NaN out of the timeline by
/// construction.
#[derive(Copy, Clone, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SimTime(f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    #[inline]
    pub fn new(value: f64) -> SimTime {
        SimTime(value)
    }

    /// The raw virtual-time value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// The instant `delay` time units after `self`.
    #[inline]
    pub fn after(self, delay: f64) -> SimTime {
        SimTime(self.0 + delay)
    }

    /// Virtual time elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}
