//! Errors raised while creating and placing the initial population.

use thiserror::Error;

use epi_core::{AgentId, Cell, RegionId};
use epi_spatial::SpatialError;

/// Fatal population-setup errors.  They indicate a configuration that asks
/// for more agents than the regions can hold, never a transient condition.
#[derive(Debug, Error)]
pub enum PopulationError {
    #[error("population {population} exceeds total grid capacity {capacity}")]
    PopulationTooLarge { population: usize, capacity: usize },

    #[error("{region} needs room for {requested} agents but has {capacity} positions")]
    RegionOverCapacity {
        region:    RegionId,
        requested: usize,
        capacity:  usize,
    },

    #[error("no free position for {agent} in {region} after {attempts} attempts")]
    PlacementFailed {
        agent:    AgentId,
        region:   RegionId,
        attempts: u32,
    },

    #[error("{agent} at {cell} does not fit inside {region}")]
    OutsideRegion {
        agent:  AgentId,
        region: RegionId,
        cell:   Cell,
    },

    #[error("expected {expected} placements, got {found}")]
    CountMismatch { expected: usize, found: usize },

    #[error("placement refers to unknown {0}")]
    UnknownRegion(RegionId),

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),
}

pub type PopulationResult<T> = Result<T, PopulationError>;
