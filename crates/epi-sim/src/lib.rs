//! `epi-sim`: tick driver for the rust_epi epidemic engine.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Walk        every living resident jitters inside its region.
//!   ② Infection   infected residents transmit, recover or die.
//!   ③ Migration   travellers step toward their target and land;
//!                 then maybe one resident departs.
//!   ④ Statistics  per-tick counts appended; day events accumulated.
//!   ⑤ Clock       advance; a new day bucket opens on day boundaries.
//! ```
//!
//! Between ticks all state is consistent, so pausing is simply not calling
//! [`Sim::step`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_core::EpidemicConfig;
//! use epi_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(EpidemicConfig::default()).build()?;
//! sim.run(&mut NoopObserver);
//! println!("dead: {}", sim.stats.latest().dead());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, TickReport};
pub use snapshot::{AgentSnapshot, SimView};
pub use stats::Statistics;
