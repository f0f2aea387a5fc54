//! The ferry terminal scenario: four cooperating processes over one
//! virtual timeline.
//!
//! # Process model
//!
//! Each cooperative process is rendered as an explicit resumption point in
//! [`ProcessEvent`]; the scheduler pops resumptions in `(due, seq)` order
//! and [`Scenario::dispatch`] runs the matching step to its next suspension.
//! Exactly one step is live at a time, and all of its effects — state
//! mutation, log emission, further scheduling — complete before the next
//! pop.  That atomicity is what makes the reserve-before-suspend rule in
//! the embark step safe without any locking.
//!
//! ```text
//! VehicleArrives   — enqueue vehicle, log arrival, start an embark
//!                    attempt, schedule the next arrival (peak-aware rate).
//! FinishBoarding   — service delay elapsed: take the oldest vehicle off
//!                    the queue (suspending on an empty queue) and log it.
//! VesselDeparts    — every departure period: remove the fullest docked
//!                    vessel, log, reset its load, schedule its return.
//! VesselReturns    — crossing + disembark time elapsed: log and re-dock.
//! ```

use std::collections::HashMap;

use ferry_core::{RunParams, SimTime, TerminalConfig, VesselId};
use ferry_engine::{Acquire, EventScheduler, FilterableResourceStore, ResourceStore, WaiterId};

use crate::fleet::{build_fleet, Vehicle, Vessel};
use crate::log::{EventKind, EventLog, Metrics, SimReport};
use crate::traffic::TrafficModel;
use crate::{ScenarioError, ScenarioResult};

/// A suspended process resumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProcessEvent {
    /// The arrival generator's next vehicle reaches the terminal.
    VehicleArrives,
    /// An embark attempt's service delay has elapsed.
    FinishBoarding { vessel: VesselId },
    /// A scheduled departure tick.
    VesselDeparts,
    /// A departed vessel finishes crossing and disembarking twice over.
    VesselReturns { vessel: VesselId },
}

/// One run of the ferry terminal model.
///
/// Generic over [`TrafficModel`] so tests can inject deterministic delays;
/// production code uses [`StochasticTraffic`](crate::StochasticTraffic).
pub struct Scenario<T: TrafficModel> {
    config: TerminalConfig,
    params: RunParams,
    traffic: T,
    sched: EventScheduler<ProcessEvent>,

    /// Vehicles waiting to board, oldest first.
    vehicles: ResourceStore<Vehicle>,
    /// Ids of vessels currently at dock; a vessel absent from this pool is
    /// in transit.
    dock: FilterableResourceStore<VesselId>,
    /// Whole-run vessel state, indexed by id.
    fleet: Vec<Vessel>,

    /// Boarding completions suspended on an empty vehicle queue, keyed by
    /// their store waiter token.
    pending_boardings: HashMap<WaiterId, VesselId>,

    log: EventLog,
    arrivals_total: u64,
    boardings_total: u64,
}

impl<T: TrafficModel> Scenario<T> {
    /// Validate configuration and parameters and set up the initial state.
    ///
    /// No partial run can occur: every `InvalidConfiguration` surfaces here,
    /// before the first event is scheduled.
    pub fn new(config: TerminalConfig, params: RunParams, traffic: T) -> ScenarioResult<Self> {
        config.validate()?;
        params.validate()?;

        let fleet = build_fleet(params.vessels_number);
        let mut dock = FilterableResourceStore::new();
        for vessel in &fleet {
            dock.put(vessel.id);
        }

        Ok(Scenario {
            config,
            params,
            traffic,
            sched: EventScheduler::new(),
            vehicles: ResourceStore::new(),
            dock,
            fleet,
            pending_boardings: HashMap::new(),
            log: EventLog::new(),
            arrivals_total: 0,
            boardings_total: 0,
        })
    }

    /// Run to the horizon and assemble the report.
    pub fn run(mut self) -> ScenarioResult<SimReport> {
        let horizon = SimTime::new(self.config.simulation_time);

        self.schedule_next_arrival(SimTime::ZERO)?;
        if !self.fleet.is_empty() {
            let period = f64::from(self.params.each_vessel_departure_period);
            self.sched.schedule_after(period, ProcessEvent::VesselDeparts)?;
        }

        while let Some((now, event)) = self.sched.pop_due(horizon)? {
            self.dispatch(now, event)?;
        }
        self.sched.finish_at(horizon);

        Ok(SimReport {
            initial_parameters: self.params,
            metrics: Metrics::default(),
            events: self.log.into_entries(),
        })
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    fn dispatch(&mut self, now: SimTime, event: ProcessEvent) -> ScenarioResult<()> {
        match event {
            ProcessEvent::VehicleArrives => self.vehicle_arrival(now)?,
            ProcessEvent::FinishBoarding { vessel } => self.finish_boarding(now, vessel)?,
            ProcessEvent::VesselDeparts => self.vessel_departure(now)?,
            ProcessEvent::VesselReturns { vessel } => self.vessel_return(now, vessel)?,
        }
        // Queue accounting must balance at every continuation boundary.
        debug_assert_eq!(
            self.vehicles.len() as u64 + self.boardings_total,
            self.arrivals_total
        );
        Ok(())
    }

    // ── ArrivalProcess ────────────────────────────────────────────────────

    fn vehicle_arrival(&mut self, now: SimTime) -> ScenarioResult<()> {
        let handoff = self.vehicles.put(Vehicle { arrived_at: now });
        self.arrivals_total += 1;
        self.log.record(
            now,
            EventKind::Arrival {
                queue_size: self.vehicles.len(),
            },
        );

        if let Some(handoff) = handoff {
            // A boarding completion was suspended on the empty queue; the
            // new vehicle went straight to it, bypassing the buffer.
            if let Some(vessel) = self.pending_boardings.remove(&handoff.waiter) {
                self.record_boarding(now, vessel);
            }
        }

        // The embark attempt for this arrival starts at the same instant;
        // the arrival generator does not wait for it.
        self.begin_embark()?;
        self.schedule_next_arrival(now)
    }

    fn schedule_next_arrival(&mut self, now: SimTime) -> ScenarioResult<()> {
        let peak = self.config.is_peak(now.value());
        let delay = self.traffic.inter_arrival(peak);
        // A non-finite delay means the regime has no arrival capacity:
        // the arrival stream ends.
        if delay.is_finite() {
            self.sched.schedule_after(delay, ProcessEvent::VehicleArrives)?;
        }
        Ok(())
    }

    // ── EmbarkProcess ─────────────────────────────────────────────────────

    fn begin_embark(&mut self) -> ScenarioResult<()> {
        let service = self.traffic.embark_time();

        let limit = self.config.medium_vessel_capacity;
        let fleet = &self.fleet;
        let eligible: Vec<VesselId> = self
            .dock
            .iter()
            .filter(|id| fleet[id.index()].used_capacity < limit)
            .copied()
            .collect();
        if eligible.is_empty() {
            // Every docked vessel is full (or the dock is empty).  The
            // attempt ends here; the vehicle stays queued and is never
            // retried.
            return Ok(());
        }

        let vessel = eligible[self.traffic.pick(eligible.len())];
        // Reserve the slot before the timed suspension: a second attempt
        // starting at the same instant sees the incremented count and
        // cannot claim the same last slot.
        self.fleet[vessel.index()].used_capacity += 1;
        self.sched
            .schedule_after(service, ProcessEvent::FinishBoarding { vessel })?;
        Ok(())
    }

    fn finish_boarding(&mut self, now: SimTime, vessel: VesselId) -> ScenarioResult<()> {
        match self.vehicles.get() {
            Acquire::Ready(_vehicle) => self.record_boarding(now, vessel),
            Acquire::Pending(waiter) => {
                // Queue empty: suspend until the next arrival's put.
                self.pending_boardings.insert(waiter, vessel);
            }
        }
        Ok(())
    }

    fn record_boarding(&mut self, now: SimTime, vessel: VesselId) {
        self.boardings_total += 1;
        // Capacity is read at completion time: if the vessel departed
        // during the service delay this reflects the post-reset value.
        let used = self.fleet[vessel.index()].used_capacity;
        self.log.record(
            now,
            EventKind::Boarding {
                vessel_id: vessel,
                queue_size: self.vehicles.len(),
                vessel_used_capacity: used,
            },
        );
    }

    // ── DepartureProcess ──────────────────────────────────────────────────

    fn vessel_departure(&mut self, now: SimTime) -> ScenarioResult<()> {
        let fleet = &self.fleet;
        let Some(max_load) = self
            .dock
            .iter()
            .map(|id| fleet[id.index()].used_capacity)
            .max()
        else {
            return Err(ScenarioError::NoVesselAvailable { at: now });
        };

        // Canonical tie-break: the maximum is computed once, then the first
        // docked vessel (insertion order) matching it departs.
        let vessel = self
            .dock
            .take_first(|id| fleet[id.index()].used_capacity == max_load)
            .ok_or(ScenarioError::NoVesselAvailable { at: now })?;

        self.log.record(
            now,
            EventKind::Departure {
                vessel_id: vessel,
                queue_size: self.vehicles.len(),
                vessel_used_capacity: max_load,
            },
        );

        let boarded = max_load;
        self.fleet[vessel.index()].used_capacity = 0;

        // Negative normal draws would be invalid delays; the crossing is
        // truncated at zero.
        let crossing = self.traffic.crossing_time().max(0.0);
        let mut idle = 2.0 * crossing;
        for _ in 0..boarded {
            idle += self.traffic.disembark_time();
        }
        self.sched
            .schedule_after(idle, ProcessEvent::VesselReturns { vessel })?;

        let period = f64::from(self.params.each_vessel_departure_period);
        self.sched.schedule_after(period, ProcessEvent::VesselDeparts)?;
        Ok(())
    }

    // ── ReturnProcess ─────────────────────────────────────────────────────

    fn vessel_return(&mut self, now: SimTime, vessel: VesselId) -> ScenarioResult<()> {
        self.log.record(
            now,
            EventKind::Return {
                vessel_id: vessel,
                queue_size: self.vehicles.len(),
            },
        );
        // Load was reset at departure; the scenario parks no waiters on the
        // dock pool, so the put always buffers.
        self.dock.put(vessel);
        Ok(())
    }
}
