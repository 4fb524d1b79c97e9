//! The `Sim` struct and its tick loop.

use tracing::{debug, info};

use epi_agent::{AgentRngs, AgentStore, HealthCounts};
use epi_core::{EpidemicConfig, SimClock, SimRng, Tick};
use epi_disease::{progress_infections, DiseaseParams, InfectionOutcome};
use epi_mobility::{random_walk, MigrationEngine, MigrationOutcome, WalkParams, WalkSummary};
use epi_spatial::{OccupancyGrid, RegionLayout};

use crate::{SimObserver, SimView, Statistics};

// ── TickReport ────────────────────────────────────────────────────────────────

/// What one call to [`Sim::step`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// The tick that was processed.
    pub tick:      Tick,
    pub walk:      WalkSummary,
    pub infection: InfectionOutcome,
    pub migration: MigrationOutcome,
    /// Cohort sizes after the tick.
    pub counts:    HealthCounts,
    /// Set when this tick was the last of a day.
    pub day_ended: Option<u64>,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Owns every piece of mutable state.  Each phase gets `&mut` access to the
/// parts it needs and phases never interleave.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Validated run parameters.  Fixed for the run.
    pub config: EpidemicConfig,

    /// Current tick and tick ↔ day mapping.
    pub clock: SimClock,

    pub layout: RegionLayout,

    /// Who is where.  Holds exactly the living residents.
    pub grid: OccupancyGrid,

    /// Agent state (SoA arrays).
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// Population-wide draws: who travels and where.
    pub rng: SimRng,

    pub stats: Statistics,

    pub(crate) walk:      WalkParams,
    pub(crate) disease:   DiseaseParams,
    pub(crate) migration: MigrationEngine,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Process one tick.
    pub fn step(&mut self) -> TickReport {
        let tick = self.clock.current_tick;

        let walk = random_walk(
            &mut self.agents,
            &mut self.rngs,
            &mut self.grid,
            &self.layout,
            self.walk,
        );
        let infection = progress_infections(
            &mut self.agents,
            &mut self.rngs,
            &mut self.grid,
            &self.disease,
        );
        let migration = self.migration.tick(
            &mut self.agents,
            &mut self.grid,
            &self.layout,
            &mut self.rng,
        );

        let counts = self.agents.counts();
        self.stats.record_events(infection.new_infections, infection.new_deaths);
        self.stats.record_tick(counts);

        let day_ended = if self.clock.advance() {
            let day = self.clock.day() - 1;
            let today = day as usize;
            debug!(
                day,
                infected = counts.infected(),
                recovered = counts.recovered(),
                dead = counts.dead(),
                new_infections = self.stats.daily_new_infections()[today],
                new_deaths = self.stats.daily_new_deaths()[today],
                travelling = self.agents.travellers().len(),
                "day complete"
            );
            self.stats.open_day();
            Some(day)
        } else {
            None
        };

        TickReport { tick, walk, infection, migration, counts, day_ended }
    }

    /// Run from the current tick until `config.total_ticks`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while !self.is_finished() {
            self.observed_step(observer);
        }
        let counts = self.agents.counts();
        info!(
            ticks = self.clock.current_tick.0,
            days = self.clock.day(),
            susceptible = counts.susceptible(),
            infected = counts.infected(),
            recovered = counts.recovered(),
            dead = counts.dead(),
            "simulation finished"
        );
        observer.on_sim_end(self.clock.current_tick, &self.stats);
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `total_ticks`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observed_step(observer);
        }
    }

    /// `true` once `config.total_ticks` ticks have been processed.
    pub fn is_finished(&self) -> bool {
        self.clock.current_tick.0 >= self.config.total_ticks
    }

    /// Read-only snapshot of the current state.
    pub fn view(&self) -> SimView<'_> {
        SimView {
            agents: &self.agents,
            layout: &self.layout,
            stats:  &self.stats,
            clock:  &self.clock,
        }
    }

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) {
        observer.on_tick_start(self.clock.current_tick);
        let report = self.step();
        observer.on_tick_end(&report, &self.view());
        if let Some(day) = report.day_ended {
            observer.on_day_end(day, &self.stats);
        }
    }
}
