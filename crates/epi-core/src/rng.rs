//! Deterministic random streams.
//!
//! # Seeding
//!
//! ```text
//! AgentRng(a) = SmallRng(seed ^ a · φ64)        one stream per agent
//! SimRng      = SmallRng(rotl(seed, 17) ^ φ64)   one stream per run
//! ```
//!
//! `φ64` is the 64-bit fractional part of the golden ratio, which spreads
//! consecutive agent ids far apart in seed space.
//!
//! Everything an agent does on its own (walk candidates, initial placement,
//! transmission and death draws when it is the infector) comes from its own
//! stream, so its sequence does not depend on how many draws other agents
//! made first.  Population-wide choices (who travels, where to) come from
//! the single [`SimRng`].

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{AgentId, Cell, RegionId};

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// One agent's private random stream.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ u64::from(agent.0).wrapping_mul(GOLDEN_GAMMA);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// One random-walk displacement, each axis uniform in `[-speed, speed]`.
    #[inline]
    pub fn step(&mut self, speed: i32) -> (i32, i32) {
        let speed = speed.max(0);
        (self.0.gen_range(-speed..=speed), self.0.gen_range(-speed..=speed))
    }

    /// A cell uniform over the inclusive box `[min, max]`.
    #[inline]
    pub fn cell_in(&mut self, min: Cell, max: Cell) -> Cell {
        Cell::new(self.0.gen_range(min.x..=max.x), self.0.gen_range(min.y..=max.y))
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// The run-wide random stream.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed.rotate_left(17) ^ GOLDEN_GAMMA))
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A uniformly chosen element, or `None` for an empty slice.
    #[inline]
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.0)
    }

    /// A region uniformly chosen among the `count` regions other than
    /// `current`.  `None` when there is no other region.
    pub fn other_region(&mut self, current: RegionId, count: usize) -> Option<RegionId> {
        if count < 2 {
            return None;
        }
        let mut i = self.0.gen_range(0..count - 1);
        if i >= current.index() {
            i += 1;
        }
        Some(RegionId(i as u32))
    }
}
