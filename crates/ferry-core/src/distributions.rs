//! Validated random-process distributions.
//!
//! Both types reject non-positive or non-finite parameters at construction
//! (`InvalidDistributionParameter`), so a malformed configuration fails at
//! setup rather than mid-run.

use crate::{CoreError, CoreResult, SimRng};

// ── Exponential ───────────────────────────────────────────────────────────────

/// Exponential distribution parameterised by its mean.
///
/// Used for inter-arrival and service times: `sample` draws via the inverse
/// CDF, `-mean * ln(u)` with `u` uniform in `(0, 1]`, so every sample is
/// finite and non-negative.
#[derive(Debug, Clone, Copy)]
pub struct Exponential {
    mean: f64,
}

impl Exponential {
    pub fn new(mean: f64) -> CoreResult<Self> {
        if !mean.is_finite() || mean <= 0.0 {
            return Err(CoreError::InvalidDistributionParameter {
                name: "exponential mean",
                value: mean,
            });
        }
        Ok(Exponential { mean })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn sample(&self, rng: &mut SimRng) -> f64 {
        // random::<f64>() is uniform in [0, 1); flip to (0, 1] so ln never
        // sees zero.
        let u: f64 = 1.0 - rng.random::<f64>();
        -self.mean * u.ln()
    }
}

// ── Normal ────────────────────────────────────────────────────────────────────

/// Normal distribution with a positive mean and standard deviation.
///
/// Samples can be negative; callers using a sample as a delay clamp it at
/// zero themselves.
#[derive(Debug, Clone, Copy)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Normal {
    pub fn new(mean: f64, std_dev: f64) -> CoreResult<Self> {
        if !mean.is_finite() || mean <= 0.0 {
            return Err(CoreError::InvalidDistributionParameter {
                name: "normal mean",
                value: mean,
            });
        }
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(CoreError::InvalidDistributionParameter {
                name: "normal std_dev",
                value: std_dev,
            });
        }
        Ok(Normal { mean, std_dev })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn sample(&self, rng: &mut SimRng) -> f64 {
        // Box-Muller transform; one variate per call keeps the draw count
        // predictable for replay.
        let u1: f64 = (1.0 - rng.random::<f64>()).max(f64::MIN_POSITIVE);
        let u2: f64 = rng.random::<f64>();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        self.mean + self.std_dev * z
    }
}
