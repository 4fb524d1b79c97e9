//! Top-level build error for `epi-sim`.

use thiserror::Error;

use epi_agent::PopulationError;
use epi_core::EpiError;
use epi_spatial::SpatialError;

/// Everything that can stop a simulation from being built.  A built `Sim`
/// never fails while stepping.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(#[from] EpiError),

    #[error("region layout error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("population error: {0}")]
    Population(#[from] PopulationError),
}

pub type SimResult<T> = Result<T, SimError>;
