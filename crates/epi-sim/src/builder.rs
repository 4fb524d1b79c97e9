//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use epi_agent::{AgentStoreBuilder, Placement, SpeedTable};
use epi_core::{EpidemicConfig, SimClock, SimRng};
use epi_disease::DiseaseParams;
use epi_mobility::{MigrationEngine, WalkParams};
use epi_spatial::{OccupancyGrid, RegionLayout};

use crate::{Sim, SimResult, Statistics};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs
///
/// | Method              | Default                                        |
/// |---------------------|------------------------------------------------|
/// | `.placements(v)`    | Random placement of `config.population` agents |
///
/// # Example
///
/// ```rust,ignore
/// let config = EpidemicConfig { region_count: 4, ..Default::default() };
/// let mut sim = SimBuilder::new(config).build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:     EpidemicConfig,
    placements: Option<Vec<Placement>>,
}

impl SimBuilder {
    pub fn new(config: EpidemicConfig) -> Self {
        Self { config, placements: None }
    }

    /// Start from explicit agent positions instead of random placement.
    /// The population is `placements.len()`; `config.population` is ignored.
    pub fn placements(mut self, placements: Vec<Placement>) -> Self {
        self.placements = Some(placements);
        self
    }

    /// Validate the config, partition the world, place the population and
    /// return a ready-to-run [`Sim`] at tick 0.
    ///
    /// # Errors
    ///
    /// Any configuration, layout or placement problem, as [`SimError`].
    ///
    /// [`SimError`]: crate::SimError
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate()?;

        let world = config.world_rect();
        let layout = RegionLayout::partition(
            config.region_count,
            world,
            config.region_margin,
            config.agent_width,
        )?;
        let mut grid = OccupancyGrid::new(world, config.infection_radius);

        let speeds = SpeedTable { healthy: config.speed_healthy, sick: config.speed_sick };
        let (agents, rngs) = match self.placements {
            Some(placements) => AgentStoreBuilder::new(placements.len(), config.seed)
                .speeds(speeds)
                .agent_width(config.agent_width)
                .build_placed(&placements, &layout, &mut grid)?,
            None => AgentStoreBuilder::new(config.population, config.seed)
                .speeds(speeds)
                .agent_width(config.agent_width)
                .max_placement_attempts(config.max_placement_attempts)
                .populate(&layout, &mut grid)?,
        };

        info!(
            agents = agents.count,
            regions = layout.len(),
            edge = layout.edge,
            seed = config.seed,
            total_ticks = config.total_ticks,
            "simulation built"
        );

        Ok(Sim {
            clock:     SimClock::new(config.day_length),
            rng:       SimRng::new(config.seed),
            stats:     Statistics::new(agents.counts()),
            walk:      WalkParams::from_config(&config),
            disease:   DiseaseParams::from_config(&config),
            migration: MigrationEngine::from_config(&config),
            config,
            layout,
            grid,
            agents,
            rngs,
        })
    }
}
