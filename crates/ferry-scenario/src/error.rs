use ferry_core::{CoreError, SimTime};
use ferry_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A scheduled departure found the at-dock pool empty: every vessel was
    /// in transit.  The model treats this as fatal rather than silently
    /// skipping the departure tick.
    #[error("no vessel at dock for the departure scheduled at {at}")]
    NoVesselAvailable { at: SimTime },
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
