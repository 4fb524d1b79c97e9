//! Spatial-subsystem error type.

use thiserror::Error;

use epi_core::{AgentId, Cell};

/// Errors produced by `epi-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("region count must be positive")]
    NoRegions,

    #[error("regions of side {side} (after a {margin}px margin) cannot hold a {agent_width}px agent")]
    RegionTooSmall {
        side:        i32,
        margin:      i32,
        agent_width: i32,
    },

    #[error("cell {cell} is already occupied by {occupant}")]
    Occupied { cell: Cell, occupant: AgentId },

    #[error("cell {0} is outside the world")]
    OutOfBounds(Cell),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
