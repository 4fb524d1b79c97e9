//! Random-walk movement for resident agents.

use epi_agent::{AgentRngs, AgentStore};
use epi_core::{AgentId, EpidemicConfig};
use epi_spatial::{OccupancyGrid, RegionLayout};

/// Fixed parameters of the walk phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WalkParams {
    pub agent_width:  i32,
    /// Candidate draws per agent per tick before it stays put.
    pub max_attempts: u32,
}

impl WalkParams {
    pub fn from_config(config: &EpidemicConfig) -> Self {
        Self {
            agent_width:  config.agent_width,
            max_attempts: config.max_move_attempts,
        }
    }
}

/// What happened during one walk phase.
///
/// An agent whose accepted candidate is its own cell counts as neither.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Agents that ended on a different cell.
    pub moved: usize,
    /// Agents that ran out of attempts and stayed where they were.
    pub stuck: usize,
}

/// Move every living resident once, in ascending id order.
///
/// Each agent draws `(dx, dy)` uniformly from `[-speed, speed]²` using its
/// own RNG and takes the first candidate that keeps its footprint inside its
/// region and lands on a free cell (or its own).  Travellers and the dead
/// are skipped.
pub fn random_walk(
    store: &mut AgentStore,
    rngs: &mut AgentRngs,
    grid: &mut OccupancyGrid,
    layout: &RegionLayout,
    params: WalkParams,
) -> WalkSummary {
    let mut summary = WalkSummary::default();

    for i in 0..store.count {
        let agent = AgentId(i as u32);
        if !store.is_active_resident(agent) {
            continue;
        }

        let speed = store.speed(agent);
        let from = store.position[i];
        let (min, max) = layout.get(store.region[i]).placement_bounds(params.agent_width);
        let rng = rngs.get_mut(agent);

        let mut accepted = None;
        for _ in 0..params.max_attempts {
            let (dx, dy) = rng.step(speed);
            let to = from.offset(dx, dy);
            if to.x < min.x || to.x > max.x || to.y < min.y || to.y > max.y {
                continue;
            }
            match grid.get(to) {
                Some(other) if other != agent => continue,
                _ => {
                    accepted = Some(to);
                    break;
                }
            }
        }

        match accepted {
            Some(to) if to != from => {
                if grid.relocate(agent, from, to).is_ok() {
                    store.position[i] = to;
                    summary.moved += 1;
                } else {
                    summary.stuck += 1;
                }
            }
            Some(_) => {}
            None => summary.stuck += 1,
        }
    }

    summary
}
