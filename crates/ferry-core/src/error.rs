//! Core error type.
//!
//! Downstream crates define their own error enums and chain `CoreError` in
//! as one variant via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A run-scoped parameter or static configuration value is malformed.
    /// Always raised at setup, before any simulation starts.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A distribution was constructed with a non-positive or non-finite
    /// parameter (e.g. a zero mean making the exponential rate undefined).
    #[error("invalid distribution parameter: {name} = {value}")]
    InvalidDistributionParameter { name: &'static str, value: f64 },
}

/// Shorthand result type for `ferry-core`.
pub type CoreResult<T> = Result<T, CoreError>;
