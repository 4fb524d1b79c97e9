//! `epi-spatial`: where agents may be, and who is where.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`region`]  | `Region`, `RegionLayout` (square partition of the world)    |
//! | [`grid`]    | `OccupancyGrid`: one `AgentId` slot per world coordinate   |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on region types.           |

pub mod error;
pub mod grid;
pub mod region;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use grid::OccupancyGrid;
pub use region::{Region, RegionLayout};
