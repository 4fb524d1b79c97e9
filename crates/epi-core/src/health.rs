//! Per-agent health and travel state enums shared across all crates.

/// Position of an agent in the disease state machine.
///
/// ```text
/// Susceptible ──▶ Infected ──▶ Recovered   (acquired immunity)
///      ▲              │
///      └──────────────┤                    (no immunity)
///                     └──────▶ Dead
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthState {
    #[default]
    Susceptible,
    Infected,
    Recovered,
    Dead,
}

impl HealthState {
    /// Dense index in `0..4`, used for per-state count arrays.
    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_alive(self) -> bool {
        !matches!(self, HealthState::Dead)
    }

    /// Susceptible or recovered: the population counted as "healthy".
    #[inline]
    pub fn is_healthy(self) -> bool {
        matches!(self, HealthState::Susceptible | HealthState::Recovered)
    }

    /// `true` if the state machine allows `self → next` in one transition.
    ///
    /// `Infected → Susceptible` is only reachable without acquired immunity.
    pub fn can_transition_to(self, next: HealthState, acquired_immunity: bool) -> bool {
        use HealthState::*;
        match (self, next) {
            (Susceptible, Infected) => true,
            (Infected, Recovered)   => acquired_immunity,
            (Infected, Susceptible) => !acquired_immunity,
            (Infected, Dead)        => true,
            _                       => false,
        }
    }

    /// Human-readable label, useful for renderers and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthState::Susceptible => "susceptible",
            HealthState::Infected    => "infected",
            HealthState::Recovered   => "recovered",
            HealthState::Dead        => "dead",
        }
    }
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an agent is confined to its region or in transit between two.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TravelState {
    /// Placed on the occupancy grid and moving inside its region.
    #[default]
    Resident,
    /// Off the grid, heading for a destination region.
    Traveling,
}

impl TravelState {
    #[inline]
    pub fn is_traveling(self) -> bool {
        matches!(self, TravelState::Traveling)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TravelState::Resident  => "resident",
            TravelState::Traveling => "traveling",
        }
    }
}

impl std::fmt::Display for TravelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
