//! `epi-disease`: the infection state machine.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                |
//! |-------------------|---------------------------------------------------------|
//! | [`risk`]          | `DiseaseParams`, `death_risk_per_tick`                  |
//! | [`progression`]   | `progress_infections`, `InfectionOutcome`               |
//!
//! # State machine
//!
//! ```text
//!   Susceptible ──(infection_risk, per infected neighbor)──▶ Infected
//!   Infected    ──(infected_ticks == recovery_ticks)───────▶ Recovered
//!                                                           (Susceptible without immunity)
//!   Infected    ──(death_risk, once past incubation)───────▶ Dead
//! ```
//!
//! Recovery is checked before death on every tick.  Dead is terminal.

pub mod progression;
pub mod risk;

#[cfg(test)]
mod tests;

pub use progression::{progress_infections, InfectionOutcome};
pub use risk::{death_risk_per_tick, DiseaseParams};
