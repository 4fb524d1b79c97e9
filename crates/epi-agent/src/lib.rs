//! `epi-agent`: Structure-of-Arrays agent storage for the `rust_epi` engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`store`]       | `AgentStore` (SoA arrays), `AgentRngs`, `HealthCounts`    |
//! | [`builder`]     | `AgentStoreBuilder` (population creation and placement)   |
//! | [`error`]       | `PopulationError`, `PopulationResult<T>`                  |
//!
//! # Single source of truth
//!
//! Each agent's `HealthState` and `TravelState` live in exactly one place.
//! The cohort counts and the traveller list are bookkeeping that only
//! [`AgentStore::set_health`], [`AgentStore::begin_travel`] and
//! [`AgentStore::end_travel`] touch, in the same call that writes the state
//! field.

pub mod builder;
pub mod error;
pub mod store;


pub use builder::{AgentStoreBuilder, Placement};
pub use error::{PopulationError, PopulationResult};
pub use store::{AgentRngs, AgentStore, HealthCounts, SpeedTable};
