//! Error types for algoviz-engine.

use algoviz_topology::{CellCoord, TopologyError};
use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which end of a search an endpoint error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Destination,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Source => f.write_str("source"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// Errors raised while validating generator input.
///
/// Generation either fails here, before any step is recorded, or runs to
/// completion. There are no partial logs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Grid side length must be at least 1.
    #[error("invalid grid size: {0}")]
    InvalidSize(usize),

    /// Generated arrays must have at least one element.
    #[error("invalid array length: {0}")]
    InvalidLength(usize),

    /// Wall probability must lie in [0, 1].
    #[error("wall probability {0} is outside [0, 1]")]
    InvalidWallProbability(f64),

    /// Search endpoint is not on the grid.
    #[error("{endpoint} {coord} is outside a {size}x{size} grid")]
    EndpointOutOfBounds {
        endpoint: Endpoint,
        coord: CellCoord,
        size: usize,
    },

    /// Search endpoint sits on a wall.
    #[error("{endpoint} {coord} is a wall")]
    EndpointOnWall { endpoint: Endpoint, coord: CellCoord },

    /// Grid construction failed.
    #[error("topology error: {0}")]
    Topology(#[from] TopologyError),
}
