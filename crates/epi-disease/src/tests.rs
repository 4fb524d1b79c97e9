//! Unit tests for epi-disease.

use epi_agent::{AgentRngs, AgentStore, AgentStoreBuilder, Placement, SpeedTable};
use epi_core::{AgentId, Cell, HealthState, Rect, RegionId};
use epi_spatial::{OccupancyGrid, RegionLayout};

use crate::{progress_infections, DiseaseParams, InfectionOutcome};

// ── Helpers ───────────────────────────────────────────────────────────────────

struct World {
    grid:  OccupancyGrid,
    store: AgentStore,
    rngs:  AgentRngs,
}

/// `regions` side-by-side 30×30 squares inset by 5.  Region 0 accepts
/// positions 5..=20 on both axes, region 1 accepts x in 35..=50.
fn world(regions: u32, agents: &[(u32, i32, i32, HealthState)]) -> World {
    let rect = Rect::from_origin(0, 0, 30 * regions as i32, 30);
    let layout = RegionLayout::partition(regions, rect, 5, 5).unwrap();
    let mut grid = OccupancyGrid::new(rect, 5);
    let placements: Vec<Placement> = agents
        .iter()
        .map(|&(r, x, y, h)| Placement::new(RegionId(r), Cell::new(x, y), h))
        .collect();
    let (store, rngs) = AgentStoreBuilder::new(placements.len(), 3)
        .speeds(SpeedTable { healthy: 2, sick: 1 })
        .build_placed(&placements, &layout, &mut grid)
        .unwrap();
    World { grid, store, rngs }
}

fn params() -> DiseaseParams {
    DiseaseParams {
        infection_radius:  5,
        infection_risk:    1.0,
        recovery_ticks:    10,
        incubation_ticks:  5,
        death_risk:        0.0,
        acquired_immunity: true,
    }
}

fn tick(w: &mut World, p: &DiseaseParams) -> InfectionOutcome {
    progress_infections(&mut w.store, &mut w.rngs, &mut w.grid, p)
}

use HealthState::{Dead, Infected, Recovered, Susceptible};

// ── Death risk ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod risk {
    use crate::{death_risk_per_tick, DiseaseParams};
    use epi_core::EpidemicConfig;

    #[test]
    fn default_lethality_spread_over_symptomatic_days() {
        let p = death_risk_per_tick(0.8, 200);
        let expected = 1.0 - 0.2_f64.powf(1.0 / 200.0);
        assert!((p - expected).abs() < 1e-15);
        // Surviving all 200 draws happens with probability 1 - L.
        assert!(((1.0 - p).powi(200) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn extremes() {
        assert_eq!(death_risk_per_tick(0.0, 200), 0.0);
        assert_eq!(death_risk_per_tick(1.0, 200), 1.0);
        assert_eq!(death_risk_per_tick(0.3, 0), 0.3);
    }

    #[test]
    fn params_from_default_config() {
        let p = DiseaseParams::from_config(&EpidemicConfig::default());
        assert_eq!(p.recovery_ticks, 400);
        assert_eq!(p.incubation_ticks, 200);
        assert_eq!(p.infection_radius, 5);
        assert!((p.death_risk - death_risk_per_tick(0.8, 200)).abs() < 1e-15);
        assert!(p.acquired_immunity);
    }
}

// ── Transmission ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod transmission {
    use super::*;

    #[test]
    fn infects_susceptible_neighbors_within_radius() {
        let mut w = world(1, &[(0, 5, 5, Infected), (0, 8, 8, Susceptible), (0, 20, 20, Susceptible)]);
        let out = tick(&mut w, &params());
        assert_eq!(out.new_infections, 1);
        assert_eq!(w.store.health(AgentId(1)), Infected);
        assert_eq!(w.store.health(AgentId(2)), Susceptible);
        assert_eq!(w.store.speed(AgentId(1)), 1);
    }

    #[test]
    fn zero_risk_never_transmits() {
        let mut w = world(1, &[(0, 5, 5, Infected), (0, 6, 6, Susceptible)]);
        let p = DiseaseParams { infection_risk: 0.0, ..params() };
        for _ in 0..9 {
            assert_eq!(tick(&mut w, &p).new_infections, 0);
        }
        assert_eq!(w.store.counts().susceptible(), 1);
    }

    #[test]
    fn recovered_and_infected_neighbors_are_immune() {
        let mut w = world(1, &[(0, 5, 5, Infected), (0, 6, 5, Recovered), (0, 5, 6, Infected)]);
        let out = tick(&mut w, &params());
        assert_eq!(out.new_infections, 0);
        assert_eq!(w.store.health(AgentId(1)), Recovered);
    }

    #[test]
    fn new_cases_wait_for_the_next_tick() {
        // Agent 2 is infected by agent 0, and would infect agent 3 if it
        // were processed in the same phase.
        let mut w = world(
            1,
            &[(0, 5, 5, Infected), (0, 20, 20, Susceptible), (0, 9, 9, Susceptible), (0, 14, 14, Susceptible)],
        );
        let out = tick(&mut w, &params());
        assert_eq!(out.new_infections, 1);
        assert_eq!(w.store.infected_ticks[2], 0);
        assert_eq!(w.store.health(AgentId(3)), Susceptible);

        let out = tick(&mut w, &params());
        assert_eq!(out.new_infections, 1);
        assert_eq!(w.store.health(AgentId(3)), Infected);
        assert_eq!(w.store.infected_ticks[0], 2);
        assert_eq!(w.store.infected_ticks[2], 1);
    }

    #[test]
    fn regions_do_not_mix() {
        let mut w = world(2, &[(0, 20, 20, Infected), (1, 35, 20, Susceptible)]);
        let p = DiseaseParams { infection_radius: 100, ..params() };
        assert_eq!(tick(&mut w, &p).new_infections, 0);
    }

    #[test]
    fn travellers_neither_infect_nor_progress() {
        let mut w = world(2, &[(0, 5, 5, Infected), (0, 6, 6, Susceptible)]);
        w.grid.vacate(Cell::new(5, 5));
        w.store.begin_travel(AgentId(0), RegionId(1), Cell::new(45, 15));

        let out = tick(&mut w, &params());
        assert_eq!(out, InfectionOutcome::default());
        assert_eq!(w.store.infected_ticks[0], 0);
        assert_eq!(w.store.health(AgentId(1)), Susceptible);
    }
}

// ── Recovery and death ────────────────────────────────────────────────────────

#[cfg(test)]
mod outcome {
    use super::*;

    #[test]
    fn recovers_after_exactly_recovery_ticks() {
        let mut w = world(1, &[(0, 10, 10, Infected)]);
        for _ in 0..9 {
            assert_eq!(tick(&mut w, &params()).recoveries, 0);
        }
        assert_eq!(tick(&mut w, &params()).recoveries, 1);
        assert_eq!(w.store.health(AgentId(0)), Recovered);
        assert_eq!(w.store.infected_ticks[0], 0);
        assert_eq!(w.store.speed(AgentId(0)), 2);
        assert_eq!(w.grid.get(Cell::new(10, 10)), Some(AgentId(0)));
    }

    #[test]
    fn without_immunity_recovery_returns_to_susceptible() {
        let mut w = world(1, &[(0, 10, 10, Infected)]);
        let p = DiseaseParams { acquired_immunity: false, ..params() };
        for _ in 0..10 {
            tick(&mut w, &p);
        }
        assert_eq!(w.store.health(AgentId(0)), Susceptible);
        assert_eq!(w.store.counts().recovered(), 0);
    }

    #[test]
    fn certain_death_after_incubation() {
        let mut w = world(1, &[(0, 10, 10, Infected)]);
        let p = DiseaseParams { death_risk: 1.0, ..params() };
        for _ in 0..4 {
            assert_eq!(tick(&mut w, &p).new_deaths, 0);
        }
        assert_eq!(tick(&mut w, &p).new_deaths, 1);
        assert_eq!(w.store.health(AgentId(0)), Dead);
        assert_eq!(w.store.speed(AgentId(0)), 0);
        assert_eq!(w.grid.get(Cell::new(10, 10)), None);

        // Dead agents are inert.
        assert_eq!(tick(&mut w, &p), InfectionOutcome::default());
        assert_eq!(w.store.infected_ticks[0], 5);
    }

    #[test]
    fn recovery_checked_before_death() {
        let mut w = world(1, &[(0, 10, 10, Infected)]);
        let p = DiseaseParams { recovery_ticks: 3, incubation_ticks: 3, death_risk: 1.0, ..params() };
        tick(&mut w, &p);
        tick(&mut w, &p);
        let out = tick(&mut w, &p);
        assert_eq!((out.recoveries, out.new_deaths), (1, 0));
        assert_eq!(w.store.health(AgentId(0)), Recovered);
    }

    #[test]
    fn counts_stay_consistent() {
        let mut w = world(
            1,
            &[(0, 5, 5, Infected), (0, 7, 5, Susceptible), (0, 9, 5, Susceptible), (0, 11, 5, Susceptible)],
        );
        let p = DiseaseParams { infection_risk: 0.5, death_risk: 0.3, ..params() };
        for _ in 0..30 {
            tick(&mut w, &p);
            assert_eq!(w.store.counts(), w.store.recount());
            assert_eq!(w.store.counts().total(), 4);
        }
    }
}
