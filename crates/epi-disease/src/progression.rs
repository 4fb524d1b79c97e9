//! One tick of the infection phase.

use tracing::trace;

use epi_agent::{AgentRngs, AgentStore};
use epi_core::{AgentId, HealthState};
use epi_spatial::OccupancyGrid;

use crate::DiseaseParams;

/// Transitions made during one infection phase.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InfectionOutcome {
    pub new_infections: usize,
    pub recoveries:     usize,
    pub new_deaths:     usize,
}

/// Advance every infected resident by one tick.
///
/// The set of infectors is fixed at the start of the phase: agents infected
/// here are not processed until the next call, and travellers are skipped
/// with their timers frozen.  For each infector, in ascending id order:
///
/// 1. `infected_ticks += 1`.
/// 2. Every susceptible neighbor in the same region within
///    `infection_radius` becomes infected with `infection_risk`.
/// 3. At exactly `recovery_ticks` the agent recovers.
/// 4. Otherwise, once past incubation, it dies with `death_risk` and leaves
///    the grid.
///
/// All draws come from the infector's own RNG.
///
/// Infection does not chain within a tick: a case created by one infector
/// never transmits in the same phase, even if a later infector id would
/// have reached it in a growing live list.
pub fn progress_infections(
    store: &mut AgentStore,
    rngs: &mut AgentRngs,
    grid: &mut OccupancyGrid,
    params: &DiseaseParams,
) -> InfectionOutcome {
    let mut outcome = InfectionOutcome::default();

    let infectors: Vec<AgentId> = store
        .cohort(HealthState::Infected)
        .filter(|&a| !store.is_traveling(a))
        .collect();

    let mut contacts = Vec::new();
    for agent in infectors {
        let i = agent.index();
        store.infected_ticks[i] += 1;

        let position = store.position[i];
        let region = store.region[i];
        let rng = rngs.get_mut(agent);

        contacts.clear();
        contacts.extend(grid.neighbors(position, params.infection_radius).map(|(_, n)| n));
        for &other in &contacts {
            let eligible = store.health(other) == HealthState::Susceptible
                && store.region[other.index()] == region;
            if eligible && rng.chance(params.infection_risk) {
                store.set_health(other, HealthState::Infected);
                store.infected_ticks[other.index()] = 0;
                outcome.new_infections += 1;
            }
        }

        if store.infected_ticks[i] == params.recovery_ticks {
            let next = if params.acquired_immunity {
                HealthState::Recovered
            } else {
                HealthState::Susceptible
            };
            store.set_health(agent, next);
            store.infected_ticks[i] = 0;
            outcome.recoveries += 1;
        } else if store.infected_ticks[i] >= params.incubation_ticks
            && rng.chance(params.death_risk)
        {
            store.set_health(agent, HealthState::Dead);
            grid.vacate(position);
            outcome.new_deaths += 1;
            trace!(%agent, cell = %position, "agent died");
        }
    }

    outcome
}
