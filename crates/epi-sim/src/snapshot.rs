//! Read-only views handed to observers and renderers.

use epi_agent::{AgentStore, HealthCounts};
use epi_core::{AgentId, Cell, HealthState, RegionId, SimClock, Tick, TravelState};
use epi_spatial::{Region, RegionLayout};

use crate::Statistics;

/// Everything a renderer needs to draw one agent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub id:       AgentId,
    pub position: Cell,
    pub health:   HealthState,
    pub travel:   TravelState,
    /// Home region, or destination while traveling.
    pub region:   RegionId,
}

/// Borrowed, immutable window onto a [`Sim`][crate::Sim] between ticks.
pub struct SimView<'a> {
    pub(crate) agents: &'a AgentStore,
    pub(crate) layout: &'a RegionLayout,
    pub(crate) stats:  &'a Statistics,
    pub(crate) clock:  &'a SimClock,
}

impl<'a> SimView<'a> {
    /// All agents in id order, including the dead.
    pub fn agent_snapshots(&self) -> impl Iterator<Item = AgentSnapshot> + 'a {
        let agents = self.agents;
        agents.agent_ids().map(move |id| snapshot_of(agents, id))
    }

    pub fn agent(&self, id: AgentId) -> AgentSnapshot {
        snapshot_of(self.agents, id)
    }

    pub fn regions(&self) -> &'a [Region] {
        self.layout.regions()
    }

    pub fn stats(&self) -> &'a Statistics {
        self.stats
    }

    pub fn counts(&self) -> HealthCounts {
        self.agents.counts()
    }

    /// The tick about to run next.
    pub fn tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn day(&self) -> u64 {
        self.clock.day()
    }
}

fn snapshot_of(agents: &AgentStore, id: AgentId) -> AgentSnapshot {
    let i = id.index();
    AgentSnapshot {
        id,
        position: agents.position[i],
        health:   agents.health(id),
        travel:   agents.travel_state(id),
        region:   agents.region[i],
    }
}
