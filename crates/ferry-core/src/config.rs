//! Terminal configuration and run-scoped parameters.
//!
//! Two layers, mirroring how a run is requested:
//!
//! - [`TerminalConfig`] — static description of the terminal (daily traffic
//!   volume, peak windows, vessel capacity, service-time averages, horizon).
//!   Typically deserialized from a JSON file by the embedding layer.
//! - [`RunParams`] — the two knobs supplied per run: initial fleet size and
//!   the fixed inter-departure period.  Echoed verbatim into the report as
//!   `initial_parameters`.
//!
//! All values are immutable for the duration of a run and validated up
//! front: a malformed configuration fails with `InvalidConfiguration`
//! before the first event is scheduled, never mid-run.

use crate::{CoreError, CoreResult};

// ── PeakWindow ────────────────────────────────────────────────────────────────

/// A half-open interval `[start, end)` of virtual time with an elevated
/// arrival rate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct PeakWindow {
    pub start: f64,
    pub end: f64,
}

impl PeakWindow {
    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        self.start <= t && t < self.end
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

// ── TerminalConfig ────────────────────────────────────────────────────────────

/// Static configuration of the ferry terminal, immutable for a run.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct TerminalConfig {
    /// Expected vehicle arrivals over the whole horizon.
    pub daily_arriving_vehicles: f64,

    /// Disjoint high-traffic sub-intervals of `[0, simulation_time)`.
    pub peak_times: Vec<PeakWindow>,

    /// Share of `daily_arriving_vehicles` that arrives inside peak windows.
    /// Strictly between 0 and 1.
    pub percent_peak_daily_arriving_vehicles: f64,

    /// Per-vessel capacity limit, in vehicles.
    pub medium_vessel_capacity: u32,

    /// Run horizon in virtual-time units.  Zero yields a degenerate run
    /// with an empty event log.
    pub simulation_time: f64,

    /// Mean of the normally distributed one-way crossing time.
    pub average_crossing_time: f64,

    /// Mean of the exponentially distributed per-vehicle boarding time.
    pub average_embark_time: f64,

    /// Mean of the exponentially distributed per-vehicle disembark time.
    pub average_disembark_time: f64,
}

impl TerminalConfig {
    /// Validate every field.  Returns the first violation found.
    pub fn validate(&self) -> CoreResult<()> {
        fn positive(name: &str, v: f64) -> CoreResult<()> {
            if !v.is_finite() || v <= 0.0 {
                return Err(CoreError::InvalidConfiguration(format!(
                    "{name} must be positive and finite, got {v}"
                )));
            }
            Ok(())
        }

        positive("daily_arriving_vehicles", self.daily_arriving_vehicles)?;
        positive("average_crossing_time", self.average_crossing_time)?;
        positive("average_embark_time", self.average_embark_time)?;
        positive("average_disembark_time", self.average_disembark_time)?;

        let p = self.percent_peak_daily_arriving_vehicles;
        if !p.is_finite() || p <= 0.0 || p >= 1.0 {
            return Err(CoreError::InvalidConfiguration(format!(
                "percent_peak_daily_arriving_vehicles must lie in (0, 1), got {p}"
            )));
        }

        if self.medium_vessel_capacity == 0 {
            return Err(CoreError::InvalidConfiguration(
                "medium_vessel_capacity must be at least 1".into(),
            ));
        }

        if !self.simulation_time.is_finite() || self.simulation_time < 0.0 {
            return Err(CoreError::InvalidConfiguration(format!(
                "simulation_time must be non-negative and finite, got {}",
                self.simulation_time
            )));
        }

        // Peak windows: well-formed, inside the horizon, pairwise disjoint.
        let mut windows = self.peak_times.clone();
        windows.sort_by(|a, b| a.start.total_cmp(&b.start));
        for w in &windows {
            if !w.start.is_finite() || !w.end.is_finite() || w.start < 0.0 || w.start >= w.end {
                return Err(CoreError::InvalidConfiguration(format!(
                    "peak window [{}, {}) is malformed",
                    w.start, w.end
                )));
            }
            if w.end > self.simulation_time {
                return Err(CoreError::InvalidConfiguration(format!(
                    "peak window [{}, {}) extends past simulation_time {}",
                    w.start, w.end, self.simulation_time
                )));
            }
        }
        for pair in windows.windows(2) {
            if pair[1].start < pair[0].end {
                return Err(CoreError::InvalidConfiguration(format!(
                    "peak windows [{}, {}) and [{}, {}) overlap",
                    pair[0].start, pair[0].end, pair[1].start, pair[1].end
                )));
            }
        }

        // A non-degenerate run must have a usable mean for every regime
        // that actually occupies time on the axis.
        if self.simulation_time > 0.0 {
            if self.normal_total_time() > 0.0 && self.normal_arrival_mean().is_none() {
                return Err(CoreError::InvalidConfiguration(
                    "derived off-peak arrival mean is not positive".into(),
                ));
            }
            if self.peak_total_time() > 0.0 && self.peak_arrival_mean().is_none() {
                return Err(CoreError::InvalidConfiguration(
                    "derived peak arrival mean is not positive".into(),
                ));
            }
        }

        Ok(())
    }

    /// Total virtual time covered by peak windows.
    pub fn peak_total_time(&self) -> f64 {
        self.peak_times.iter().map(PeakWindow::duration).sum()
    }

    /// Total virtual time outside every peak window.
    pub fn normal_total_time(&self) -> f64 {
        self.simulation_time - self.peak_total_time()
    }

    /// Whether `t` falls inside any configured peak window (half-open).
    pub fn is_peak(&self, t: f64) -> bool {
        self.peak_times.iter().any(|w| w.contains(t))
    }

    /// Mean inter-arrival time outside peak windows, or `None` when the
    /// off-peak regime has no duration (peaks cover the whole horizon, or
    /// the horizon is zero).
    pub fn normal_arrival_mean(&self) -> Option<f64> {
        let total = self.normal_total_time();
        let share = 1.0 - self.percent_peak_daily_arriving_vehicles;
        let mean = total / (self.daily_arriving_vehicles * share);
        (total > 0.0 && mean.is_finite() && mean > 0.0).then_some(mean)
    }

    /// Mean inter-arrival time inside peak windows, or `None` when no peak
    /// window is configured.
    pub fn peak_arrival_mean(&self) -> Option<f64> {
        let total = self.peak_total_time();
        let share = self.percent_peak_daily_arriving_vehicles;
        let mean = total / (self.daily_arriving_vehicles * share);
        (total > 0.0 && mean.is_finite() && mean > 0.0).then_some(mean)
    }
}

// ── RunParams ─────────────────────────────────────────────────────────────────

/// Run-scoped parameters supplied alongside the static configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RunParams {
    /// Initial number of vessels at dock.  Zero is a valid arrivals-only
    /// run: no departures are ever scheduled.
    pub vessels_number: u32,

    /// Fixed period between scheduled departures, in virtual-time units.
    /// Must be positive.
    pub each_vessel_departure_period: u32,
}

impl RunParams {
    pub fn validate(&self) -> CoreResult<()> {
        if self.each_vessel_departure_period == 0 {
            return Err(CoreError::InvalidConfiguration(
                "each_vessel_departure_period must be positive".into(),
            ));
        }
        Ok(())
    }
}
