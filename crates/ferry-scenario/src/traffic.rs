//! The stochastic seam of the scenario.
//!
//! Every random quantity the domain processes consume goes through
//! [`TrafficModel`].  The production implementation draws from validated
//! distributions over a seeded RNG; tests inject fixed delays through the
//! same trait to pin down exact event sequences.

use ferry_core::{Exponential, Normal, SimRng, TerminalConfig};

use crate::ScenarioResult;

/// Standard deviation of the crossing-time distribution, in virtual-time
/// units.  Fixed for the model; only the mean is configurable.
pub const CROSSING_TIME_STD_DEV: f64 = 10.0;

/// Source of every stochastic draw the domain processes make.
pub trait TrafficModel {
    /// Next inter-arrival delay; `peak` selects the elevated rate.
    /// A non-finite value ends the arrival stream.
    fn inter_arrival(&mut self, peak: bool) -> f64;

    /// Boarding service delay for one vehicle.
    fn embark_time(&mut self) -> f64;

    /// One-way crossing time.  May be negative (normal distribution); the
    /// departure process clamps at zero before using it as a delay.
    fn crossing_time(&mut self) -> f64;

    /// Disembark delay for one vehicle.
    fn disembark_time(&mut self) -> f64;

    /// Uniform selection among `n` eligible vessels; returns an index in
    /// `0..n`.  Never called with `n == 0`.
    fn pick(&mut self, n: usize) -> usize;
}

/// Production traffic model: exponential arrival/service processes and a
/// normally distributed crossing time, all over one seeded stream.
pub struct StochasticTraffic {
    rng: SimRng,
    /// `None` when the off-peak regime has zero duration.
    normal_arrival: Option<Exponential>,
    /// `None` when no peak window is configured.
    peak_arrival: Option<Exponential>,
    embark: Exponential,
    disembark: Exponential,
    crossing: Normal,
}

impl StochasticTraffic {
    /// Build the distributions from the config's derived means.
    ///
    /// Fails before the run starts if any derived or configured mean is
    /// non-positive; see `TerminalConfig::validate`.
    pub fn new(config: &TerminalConfig, seed: u64) -> ScenarioResult<Self> {
        let normal_arrival = match config.normal_arrival_mean() {
            Some(mean) => Some(Exponential::new(mean)?),
            None => None,
        };
        let peak_arrival = match config.peak_arrival_mean() {
            Some(mean) => Some(Exponential::new(mean)?),
            None => None,
        };
        Ok(StochasticTraffic {
            rng: SimRng::new(seed),
            normal_arrival,
            peak_arrival,
            embark: Exponential::new(config.average_embark_time)?,
            disembark: Exponential::new(config.average_disembark_time)?,
            crossing: Normal::new(config.average_crossing_time, CROSSING_TIME_STD_DEV)?,
        })
    }
}

impl TrafficModel for StochasticTraffic {
    fn inter_arrival(&mut self, peak: bool) -> f64 {
        let dist = if peak {
            self.peak_arrival.or(self.normal_arrival)
        } else {
            self.normal_arrival
        };
        match dist {
            Some(d) => d.sample(&mut self.rng),
            None => f64::INFINITY,
        }
    }

    fn embark_time(&mut self) -> f64 {
        self.embark.sample(&mut self.rng)
    }

    fn crossing_time(&mut self) -> f64 {
        self.crossing.sample(&mut self.rng)
    }

    fn disembark_time(&mut self) -> f64 {
        self.disembark.sample(&mut self.rng)
    }

    fn pick(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}
