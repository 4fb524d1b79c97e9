//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! Subsystems need `&mut AgentRngs` (each acting agent draws from its own
//! RNG) while also mutating other agents in `AgentStore` (a transmission
//! flips a *neighbor's* state).  Keeping the RNGs outside the store lets
//! both borrows coexist:
//!
//! ```ignore
//! let rng = rngs.get_mut(infector);
//! if rng.chance(risk) {
//!     store.set_health(neighbor, HealthState::Infected);
//! }
//! ```

use epi_core::{AgentId, AgentRng, Cell, HealthState, RegionId, TravelState};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] so an
/// agent's RNG can be borrowed while the store is mutated.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }
}

// ── SpeedTable ────────────────────────────────────────────────────────────────

/// Random-walk speed (max displacement per axis per tick) by health state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedTable {
    pub healthy: i32,
    pub sick:    i32,
}

impl SpeedTable {
    #[inline]
    pub fn for_state(&self, state: HealthState) -> i32 {
        match state {
            HealthState::Susceptible | HealthState::Recovered => self.healthy,
            HealthState::Infected => self.sick,
            HealthState::Dead => 0,
        }
    }
}

impl Default for SpeedTable {
    fn default() -> Self {
        Self { healthy: 2, sick: 2 }
    }
}

// ── HealthCounts ──────────────────────────────────────────────────────────────

/// Cohort sizes, one per [`HealthState`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthCounts([usize; 4]);

impl HealthCounts {
    #[inline]
    pub fn get(&self, state: HealthState) -> usize {
        self.0[state.ordinal()]
    }

    #[inline]
    pub fn susceptible(&self) -> usize {
        self.get(HealthState::Susceptible)
    }

    #[inline]
    pub fn infected(&self) -> usize {
        self.get(HealthState::Infected)
    }

    #[inline]
    pub fn recovered(&self) -> usize {
        self.get(HealthState::Recovered)
    }

    #[inline]
    pub fn dead(&self) -> usize {
        self.get(HealthState::Dead)
    }

    /// Susceptible plus recovered.
    #[inline]
    pub fn healthy(&self) -> usize {
        self.susceptible() + self.recovered()
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    #[inline]
    fn add(&mut self, state: HealthState) {
        self.0[state.ordinal()] += 1;
    }

    #[inline]
    fn remove(&mut self, state: HealthState) {
        self.0[state.ordinal()] -= 1;
    }
}

impl FromIterator<HealthState> for HealthCounts {
    fn from_iter<I: IntoIterator<Item = HealthState>>(iter: I) -> Self {
        let mut counts = HealthCounts::default();
        for state in iter {
            counts.add(state);
        }
        counts
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.position[agent.index()];  // O(1), cache-friendly
/// ```
///
/// Position, region, infection timer and travel destination are plain `pub`
/// arrays.  Health, speed and travel state are private: they change only
/// through the transition methods so the derived bookkeeping stays exact.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Top-left corner of each agent's footprint.  For travellers this is
    /// the current in-transit position; for the dead, where they died.
    pub position: Vec<Cell>,

    /// Owning region, or destination region while traveling.
    pub region: Vec<RegionId>,

    /// Ticks spent infected in the current infection.  Zero otherwise.
    pub infected_ticks: Vec<u32>,

    /// Travel target while traveling; `None` for residents.
    pub destination: Vec<Option<Cell>>,

    health:     Vec<HealthState>,
    speed:      Vec<i32>,
    travel:     Vec<TravelState>,
    travellers: Vec<AgentId>,
    counts:     HealthCounts,
    speeds:     SpeedTable,
}

impl AgentStore {
    /// Empty store that will use `speeds` for health-dependent speeds.
    pub(crate) fn with_capacity(capacity: usize, speeds: SpeedTable) -> Self {
        Self {
            count:          0,
            position:       Vec::with_capacity(capacity),
            region:         Vec::with_capacity(capacity),
            infected_ticks: Vec::with_capacity(capacity),
            destination:    Vec::with_capacity(capacity),
            health:         Vec::with_capacity(capacity),
            speed:          Vec::with_capacity(capacity),
            travel:         Vec::with_capacity(capacity),
            travellers:     Vec::new(),
            counts:         HealthCounts::default(),
            speeds,
        }
    }

    /// Append a resident agent; returns its id.
    pub(crate) fn push(&mut self, region: RegionId, position: Cell, health: HealthState) -> AgentId {
        let id = AgentId(self.count as u32);
        self.position.push(position);
        self.region.push(region);
        self.infected_ticks.push(0);
        self.destination.push(None);
        self.health.push(health);
        self.speed.push(self.speeds.for_state(health));
        self.travel.push(TravelState::Resident);
        self.counts.add(health);
        self.count += 1;
        id
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn health(&self, agent: AgentId) -> HealthState {
        self.health[agent.index()]
    }

    #[inline]
    pub fn speed(&self, agent: AgentId) -> i32 {
        self.speed[agent.index()]
    }

    #[inline]
    pub fn travel_state(&self, agent: AgentId) -> TravelState {
        self.travel[agent.index()]
    }

    #[inline]
    pub fn is_traveling(&self, agent: AgentId) -> bool {
        self.travel[agent.index()].is_traveling()
    }

    /// Living and on the grid: the agents that move, infect, and can be
    /// picked to travel.
    #[inline]
    pub fn is_active_resident(&self, agent: AgentId) -> bool {
        self.health(agent).is_alive() && !self.is_traveling(agent)
    }

    /// Maintained cohort sizes.
    #[inline]
    pub fn counts(&self) -> HealthCounts {
        self.counts
    }

    /// Cohort sizes recomputed from the per-agent state field.  Always equal
    /// to [`counts`](Self::counts); exposed for consistency checks.
    pub fn recount(&self) -> HealthCounts {
        self.health.iter().copied().collect()
    }

    /// Agents currently in `state`, ascending by id.
    pub fn cohort(&self, state: HealthState) -> impl Iterator<Item = AgentId> + '_ {
        self.agent_ids().filter(move |&a| self.health(a) == state)
    }

    /// Agents in transit, in departure order.
    #[inline]
    pub fn travellers(&self) -> &[AgentId] {
        &self.travellers
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Move `agent` to health state `next`, updating its speed and the
    /// cohort counts in the same step.  Returns the previous state.
    ///
    /// Legality of the transition is the caller's concern; this method only
    /// keeps the bookkeeping consistent.
    pub fn set_health(&mut self, agent: AgentId, next: HealthState) -> HealthState {
        let i = agent.index();
        let prev = self.health[i];
        if prev != next {
            self.counts.remove(prev);
            self.counts.add(next);
            self.health[i] = next;
            self.speed[i] = self.speeds.for_state(next);
        }
        prev
    }

    /// Mark `agent` as traveling to `target` in region `to`.
    ///
    /// Grid removal is the caller's job; this only updates agent state.
    pub fn begin_travel(&mut self, agent: AgentId, to: RegionId, target: Cell) {
        let i = agent.index();
        debug_assert!(!self.travel[i].is_traveling(), "{agent} is already traveling");
        self.travel[i] = TravelState::Traveling;
        self.region[i] = to;
        self.destination[i] = Some(target);
        self.travellers.push(agent);
    }

    /// Mark `agent` as a resident again.  Grid placement is the caller's job.
    pub fn end_travel(&mut self, agent: AgentId) {
        let i = agent.index();
        self.travel[i] = TravelState::Resident;
        self.destination[i] = None;
        self.travellers.retain(|&a| a != agent);
    }
}
