//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_agent::{AgentStoreBuilder, SpeedTable};
//!
//! let (store, rngs) = AgentStoreBuilder::new(2_000, /*seed=*/ 42)
//!     .speeds(SpeedTable { healthy: 2, sick: 2 })
//!     .agent_width(5)
//!     .populate(&layout, &mut grid)?;
//!
//! assert_eq!(store.count, 2_000);
//! assert_eq!(store.counts().infected(), 1);
//! ```
//!
//! # Initial distribution
//!
//! Agent 0 is the single infected seed and lives in region 0.  The remaining
//! susceptible agents are split as evenly as possible: with `n` of them over
//! `R` regions every region gets `n / R`, and the first `n % R` regions get
//! one more.  Ids are assigned in contiguous blocks, region by region.

use tracing::{debug, info};

use epi_core::{AgentId, Cell, HealthState, RegionId};
use epi_spatial::{OccupancyGrid, Region, RegionLayout};

use crate::{AgentRngs, AgentStore, PopulationError, PopulationResult, SpeedTable};

/// One explicitly positioned agent for [`AgentStoreBuilder::build_placed`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub region: RegionId,
    pub cell:   Cell,
    pub health: HealthState,
}

impl Placement {
    pub fn new(region: RegionId, cell: Cell, health: HealthState) -> Self {
        Self { region, cell, health }
    }
}

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
pub struct AgentStoreBuilder {
    count:                  usize,
    seed:                   u64,
    speeds:                 SpeedTable,
    agent_width:            i32,
    max_placement_attempts: u32,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            speeds: SpeedTable::default(),
            agent_width: 5,
            max_placement_attempts: 10_000,
        }
    }

    pub fn speeds(mut self, speeds: SpeedTable) -> Self {
        self.speeds = speeds;
        self
    }

    pub fn agent_width(mut self, width: i32) -> Self {
        self.agent_width = width;
        self
    }

    /// Random draws allowed per agent before initial placement gives up.
    pub fn max_placement_attempts(mut self, attempts: u32) -> Self {
        self.max_placement_attempts = attempts;
        self
    }

    /// Create the population and put every agent on `grid`.
    ///
    /// Each agent draws its position from its own RNG, uniformly over the
    /// valid positions of its region, retrying on occupied cells.
    ///
    /// # Errors
    ///
    /// - [`PopulationError::PopulationTooLarge`] if `count` exceeds the
    ///   combined capacity of all regions.
    /// - [`PopulationError::RegionOverCapacity`] if one region's share does
    ///   not fit in it.
    /// - [`PopulationError::PlacementFailed`] if the retry budget runs out.
    pub fn populate(
        self,
        layout: &RegionLayout,
        grid: &mut OccupancyGrid,
    ) -> PopulationResult<(AgentStore, AgentRngs)> {
        let capacity = layout.total_capacity(self.agent_width);
        if self.count > capacity {
            return Err(PopulationError::PopulationTooLarge { population: self.count, capacity });
        }

        let quotas = region_quotas(self.count, layout.len());
        for (region, &requested) in layout.iter().zip(&quotas) {
            let capacity = region.capacity(self.agent_width);
            if requested > capacity {
                return Err(PopulationError::RegionOverCapacity {
                    region: region.id,
                    requested,
                    capacity,
                });
            }
        }

        let mut store = AgentStore::with_capacity(self.count, self.speeds);
        let mut rngs = AgentRngs::new(self.count, self.seed);

        for (region, &quota) in layout.iter().zip(&quotas) {
            for _ in 0..quota {
                let agent = AgentId(store.count as u32);
                let health = if agent.0 == 0 {
                    HealthState::Infected
                } else {
                    HealthState::Susceptible
                };
                let cell = self.random_free_cell(agent, region, grid, &mut rngs)?;
                grid.place(agent, cell)?;
                store.push(region.id, cell, health);
            }
            debug!(region = %region.id, agents = quota, "region populated");
        }

        info!(
            agents = store.count,
            regions = layout.len(),
            capacity,
            "population placed"
        );
        Ok((store, rngs))
    }

    /// Build a population from explicit positions, one agent per entry in
    /// order.  Dead agents are recorded but not put on the grid.
    ///
    /// # Errors
    ///
    /// - [`PopulationError::CountMismatch`] if `placements.len()` differs
    ///   from the builder's count.
    /// - [`PopulationError::UnknownRegion`] or
    ///   [`PopulationError::OutsideRegion`] for a bad entry.
    /// - [`PopulationError::Spatial`] if two agents share a cell.
    pub fn build_placed(
        self,
        placements: &[Placement],
        layout: &RegionLayout,
        grid: &mut OccupancyGrid,
    ) -> PopulationResult<(AgentStore, AgentRngs)> {
        if placements.len() != self.count {
            return Err(PopulationError::CountMismatch {
                expected: self.count,
                found:    placements.len(),
            });
        }

        let mut store = AgentStore::with_capacity(self.count, self.speeds);
        for (i, p) in placements.iter().enumerate() {
            let agent = AgentId(i as u32);
            let region = layout
                .regions()
                .get(p.region.index())
                .ok_or(PopulationError::UnknownRegion(p.region))?;
            if !region.contains_footprint(p.cell, self.agent_width) {
                return Err(PopulationError::OutsideRegion { agent, region: p.region, cell: p.cell });
            }
            if p.health.is_alive() {
                grid.place(agent, p.cell)?;
            }
            store.push(p.region, p.cell, p.health);
        }

        let rngs = AgentRngs::new(self.count, self.seed);
        info!(agents = store.count, "population placed from explicit positions");
        Ok((store, rngs))
    }

    fn random_free_cell(
        &self,
        agent: AgentId,
        region: &Region,
        grid: &OccupancyGrid,
        rngs: &mut AgentRngs,
    ) -> PopulationResult<Cell> {
        let (min, max) = region.placement_bounds(self.agent_width);
        let rng = rngs.get_mut(agent);
        for _ in 0..self.max_placement_attempts {
            let cell = rng.cell_in(min, max);
            if !grid.is_occupied(cell) {
                return Ok(cell);
            }
        }
        Err(PopulationError::PlacementFailed {
            agent,
            region: region.id,
            attempts: self.max_placement_attempts,
        })
    }
}

/// Agents per region, including the infected seed in region 0.
pub(crate) fn region_quotas(population: usize, regions: usize) -> Vec<usize> {
    if regions == 0 || population == 0 {
        return vec![0; regions];
    }
    let susceptible = population - 1;
    let base = susceptible / regions;
    let extra = susceptible % regions;
    (0..regions)
        .map(|i| base + usize::from(i < extra) + usize::from(i == 0))
        .collect()
}
