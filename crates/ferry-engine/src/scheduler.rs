//! Virtual-clock event scheduler.
//!
//! # Design
//!
//! Pending resumptions live in a `BinaryHeap` with reversed `Ord`, making it
//! a min-heap keyed by `(due, seq)`.  `seq` is a monotonically increasing
//! sequence number assigned at scheduling time, so two events due at the
//! same instant fire in the order they were scheduled.  That FIFO tie-break
//! is what makes runs replay byte-identically under a fixed seed.
//!
//! The clock advances only in [`EventScheduler::pop_due`], and only forward.
//! Exactly one popped continuation is live at a time; everything it does
//! (state mutation, log emission, further scheduling) completes before the
//! next pop, which is the whole concurrency model of the simulation.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ferry_core::SimTime;

use crate::{EngineError, EngineResult};

/// A pending resumption: fire `event` at `due`.
#[derive(Debug)]
struct ScheduledEvent<E> {
    due: SimTime,
    seq: u64,
    event: E,
}

impl<E> Ord for ScheduledEvent<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap a min-heap by (due, seq).
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<E> PartialOrd for ScheduledEvent<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> PartialEq for ScheduledEvent<E> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<E> Eq for ScheduledEvent<E> {}

/// Priority ordering of pending resumptions plus the virtual clock.
#[derive(Debug)]
pub struct EventScheduler<E> {
    now: SimTime,
    next_seq: u64,
    queue: BinaryHeap<ScheduledEvent<E>>,
}

impl<E> Default for EventScheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventScheduler<E> {
    pub fn new() -> Self {
        EventScheduler {
            now: SimTime::ZERO,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    /// The current virtual time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Record `event` to fire at `now + delay`.
    ///
    /// Fails with [`EngineError::InvalidDelay`] when `delay` is negative or
    /// non-finite; this keeps NaN and backwards jumps out of the timeline.
    pub fn schedule_after(&mut self, delay: f64, event: E) -> EngineResult<()> {
        if !delay.is_finite() || delay < 0.0 {
            return Err(EngineError::InvalidDelay { delay });
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(ScheduledEvent {
            due: self.now.after(delay),
            seq,
            event,
        });
        Ok(())
    }

    /// Pop the earliest pending event due strictly before `horizon`,
    /// advancing the clock to its due time.
    ///
    /// Returns `Ok(None)` — clock untouched — when nothing is due before the
    /// horizon; events due at exactly `horizon` stay queued and never fire.
    pub fn pop_due(&mut self, horizon: SimTime) -> EngineResult<Option<(SimTime, E)>> {
        match self.queue.peek() {
            Some(next) if next.due < horizon => {}
            _ => return Ok(None),
        }
        let Some(next) = self.queue.pop() else {
            return Ok(None);
        };
        if next.due < self.now {
            return Err(EngineError::ClockRegression {
                now: self.now,
                due: next.due,
            });
        }
        self.now = next.due;
        Ok(Some((next.due, next.event)))
    }

    /// Clamp the clock forward to `horizon` once the run is drained.
    pub fn finish_at(&mut self, horizon: SimTime) {
        if horizon > self.now {
            self.now = horizon;
        }
    }

    /// Number of pending events (including ones past any horizon).
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
