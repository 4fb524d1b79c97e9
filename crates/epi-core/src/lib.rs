//! `epi-core`: foundational types for the `rust_epi` epidemic engine.
//!
//! This crate is a dependency of every other `epi-*` crate.  It has no
//! `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `RegionId`                                 |
//! | [`geo`]         | `Cell` (integer world coordinate), `Rect`             |
//! | [`time`]        | `Tick`, `SimClock` (ticks ↔ days)                     |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`health`]      | `HealthState`, `TravelState` enums                    |
//! | [`config`]      | `EpidemicConfig` and its validation                   |
//! | [`error`]       | `EpiError`, `EpiResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod health;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::EpidemicConfig;
pub use error::{EpiError, EpiResult};
pub use geo::{Cell, Rect};
pub use health::{HealthState, TravelState};
pub use ids::{AgentId, RegionId};
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, Tick};
