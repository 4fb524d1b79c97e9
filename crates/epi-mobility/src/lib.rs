//! `epi-mobility`: how agents change position.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`walk`]    | `random_walk`: bounded jitter inside the home region          |
//! | [`travel`]  | `MigrationEngine`: departures, in-transit steps, arrivals     |
//!
//! # Movement model
//!
//! Residents jitter by up to `speed` per axis each tick and never leave
//! their region.  Travellers are lifted off the grid, walk in a straight
//! line at `travel_speed` per axis toward the destination region's travel
//! target, and are put back down once they stand on a free target cell.
//!
//! Both phases write the grid and `AgentStore::position` together, so
//! between calls every resident's position resolves to itself on the grid.

pub mod travel;
pub mod walk;


pub use travel::{Departure, MigrationEngine, MigrationOutcome};
pub use walk::{random_walk, WalkParams, WalkSummary};
