//! Error types for algoviz-vis.

use thiserror::Error;

use crate::scenario::Algorithm;

/// Result type for visualization operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur building or editing a scenario.
#[derive(Debug, Error)]
pub enum Error {
    /// Step generation rejected its input
    #[error("engine error: {0}")]
    Engine(#[from] algoviz_engine::Error),

    /// Grid edit outside the grid
    #[error("topology error: {0}")]
    Topology(#[from] algoviz_topology::TopologyError),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Operation does not apply to the scenario's algorithm
    #[error("{operation} is not supported for {algorithm}")]
    WrongAlgorithm {
        operation: &'static str,
        algorithm: Algorithm,
    },
}
