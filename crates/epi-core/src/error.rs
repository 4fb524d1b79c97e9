//! Configuration error type.
//!
//! Sub-crates define their own error enums (`SpatialError`,
//! `PopulationError`, `SimError`) and wrap `EpiError` as one variant where a
//! configuration problem can surface through them.

use thiserror::Error;

/// Errors raised while validating an [`EpidemicConfig`][crate::EpidemicConfig].
///
/// Every variant is fatal: the engine refuses to initialize rather than
/// build spatial state from a bad configuration.
#[derive(Debug, Error)]
pub enum EpiError {
    #[error("region count must be positive")]
    NoRegions,

    #[error("population must contain at least one agent")]
    EmptyPopulation,

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name:   &'static str,
        reason: String,
    },
}

impl EpiError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        EpiError::InvalidParameter { name, reason: reason.into() }
    }
}

/// Shorthand result type for configuration handling.
pub type EpiResult<T> = Result<T, EpiError>;
