use ferry_core::SimTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A continuation was scheduled with a negative or non-finite delay.
    #[error("invalid delay: {delay}")]
    InvalidDelay { delay: f64 },

    /// A popped event was due before the current clock.  Cannot occur by
    /// construction (events are keyed at `now + delay`, delay >= 0); raised
    /// instead of silently rewinding the timeline.
    #[error("clock regression: popped event due {due} at clock {now}")]
    ClockRegression { now: SimTime, due: SimTime },
}

pub type EngineResult<T> = Result<T, EngineError>;
