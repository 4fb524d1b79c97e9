//! Inter-region migration.
//!
//! # Per-tick sequence
//!
//! ```text
//! advance_travellers   every traveller steps ≤ travel_speed per axis toward
//!                      its target; on the target and the cell is free → land
//! maybe_depart         with p = daily_travellers / day_length, one random
//!                      living resident leaves for a random other region
//! ```
//!
//! A departing agent is removed from the grid at once and its `region` is
//! already the destination.  It cannot infect or be infected, and it is
//! skipped by the walk, until it lands.

use tracing::trace;

use epi_agent::AgentStore;
use epi_core::{AgentId, EpidemicConfig, RegionId, SimRng};
use epi_spatial::{OccupancyGrid, RegionLayout};

/// One agent leaving its region.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Departure {
    pub agent: AgentId,
    pub from:  RegionId,
    pub to:    RegionId,
}

/// Result of one [`MigrationEngine::tick`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MigrationOutcome {
    /// Travellers put back on the grid this tick, in departure order.
    pub arrivals:  Vec<AgentId>,
    pub departure: Option<Departure>,
}

/// Moves agents between regions.  Holds only the fixed parameters; all
/// mutable state lives in the store and the grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MigrationEngine {
    /// Chance per tick that one agent departs.
    pub departure_probability: f64,
    /// Max in-transit displacement per axis per tick.
    pub travel_speed:          i32,
    pub agent_width:           i32,
}

impl MigrationEngine {
    pub fn new(departure_probability: f64, travel_speed: i32, agent_width: i32) -> Self {
        Self { departure_probability, travel_speed, agent_width }
    }

    pub fn from_config(config: &EpidemicConfig) -> Self {
        Self::new(config.travel_probability(), config.travel_speed, config.agent_width)
    }

    /// Run the migration phase: advance travellers, then maybe start one
    /// departure.  A no-op on single-region layouts.
    pub fn tick(
        &self,
        store: &mut AgentStore,
        grid: &mut OccupancyGrid,
        layout: &RegionLayout,
        rng: &mut SimRng,
    ) -> MigrationOutcome {
        if layout.len() < 2 {
            return MigrationOutcome::default();
        }
        let arrivals = self.advance_travellers(store, grid);
        let departure = self.maybe_depart(store, grid, layout, rng);
        MigrationOutcome { arrivals, departure }
    }

    /// Step every traveller toward its target and land those standing on a
    /// free target cell.  Returns the agents that landed.
    pub fn advance_travellers(&self, store: &mut AgentStore, grid: &mut OccupancyGrid) -> Vec<AgentId> {
        let mut arrived = Vec::new();
        let travellers = store.travellers().to_vec();

        for agent in travellers {
            let i = agent.index();
            let Some(target) = store.destination[i] else {
                continue;
            };
            let pos = store.position[i].step_toward(target, self.travel_speed);
            store.position[i] = pos;

            if pos == target && grid.place(agent, pos).is_ok() {
                store.end_travel(agent);
                trace!(%agent, region = %store.region[i], cell = %pos, "traveller arrived");
                arrived.push(agent);
            }
        }

        arrived
    }

    /// With [`departure_probability`](Self::departure_probability), pick one
    /// living resident uniformly and send it to a uniformly chosen other
    /// region.
    pub fn maybe_depart(
        &self,
        store: &mut AgentStore,
        grid: &mut OccupancyGrid,
        layout: &RegionLayout,
        rng: &mut SimRng,
    ) -> Option<Departure> {
        let regions = layout.len();
        if regions < 2 || !rng.chance(self.departure_probability) {
            return None;
        }

        let candidates: Vec<AgentId> = store
            .agent_ids()
            .filter(|&a| store.is_active_resident(a))
            .collect();
        let agent = *rng.pick(&candidates)?;

        let from = store.region[agent.index()];
        let to = rng.other_region(from, regions)?;

        self.begin_travel(agent, to, store, grid, layout);
        Some(Departure { agent, from, to })
    }

    /// Lift `agent` off the grid and send it toward `to`'s travel target.
    pub fn begin_travel(
        &self,
        agent: AgentId,
        to: RegionId,
        store: &mut AgentStore,
        grid: &mut OccupancyGrid,
        layout: &RegionLayout,
    ) {
        let pos = store.position[agent.index()];
        grid.vacate(pos);
        let target = layout.get(to).travel_target(self.agent_width);
        store.begin_travel(agent, to, target);
        trace!(%agent, %to, %target, "traveller departed");
    }
}
