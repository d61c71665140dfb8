//! Error types for the simulator crate.

use thiserror::Error;

/// Errors that can occur during simulation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Circuit exceeds the sampler's qubit capacity.
    #[error("Circuit exceeds simulator capacity: {0}")]
    CircuitTooLarge(String),

    /// Invalid number of shots.
    #[error("Invalid shots: {0}")]
    InvalidShots(String),

    /// A gate parameter is symbolic and has no bound value.
    #[error("Unbound parameter: {0}")]
    UnboundParameter(String),

    /// Operation the simulator cannot execute.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

/// Result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
