//! Run configuration.
//!
//! `EpidemicConfig` is the whole configuration surface of the engine.  It is
//! validated once by [`EpidemicConfig::validate`] when a simulation is built
//! and is read-only for the rest of the run.
//!
//! Durations that a human thinks about in days (recovery, incubation, the
//! traveller rate) are stored in days and converted to ticks with the
//! helpers below; everything else is in ticks or world pixels.

use crate::{EpiError, EpiResult, Rect};

/// Upper bound on occupancy-grid slots, padding included.  Slot indices are
/// computed in `i32`.
pub const MAX_GRID_CELLS: i64 = i32::MAX as i64;

/// Top-level simulation configuration.
///
/// `Default` reproduces the classic scenario: 2,000 agents in nine regions of
/// a 1700×900 world, a highly contagious and highly lethal pathogen, and
/// twenty travellers per day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EpidemicConfig {
    // ── World ─────────────────────────────────────────────────────────────
    /// World width in pixels (excluding the infection-radius padding).
    pub world_width: i32,
    /// World height in pixels (excluding the infection-radius padding).
    pub world_height: i32,
    /// Number of regions ("countries") the world is partitioned into.
    pub region_count: u32,
    /// Gap left between each region and the edge of its partition square.
    pub region_margin: i32,

    // ── Population ────────────────────────────────────────────────────────
    /// Total number of agents, including the single seeded infection.
    pub population: usize,
    /// Side of each agent's square footprint.
    pub agent_width: i32,
    /// Max displacement per axis per tick for susceptible/recovered agents.
    pub speed_healthy: i32,
    /// Max displacement per axis per tick for infected agents.
    pub speed_sick: i32,

    // ── Migration ─────────────────────────────────────────────────────────
    /// Expected number of departures per day.
    pub daily_travellers: f64,
    /// Pixels per axis per tick covered by a travelling agent.
    pub travel_speed: i32,

    // ── Pathogen ──────────────────────────────────────────────────────────
    /// Half-side of the square neighborhood scanned for transmission.
    pub infection_radius: i32,
    /// Per-tick probability that one susceptible neighbor is infected.
    pub infection_risk: f64,
    /// Days from infection to recovery.
    pub recovery_time_days: f64,
    /// Days from infection before death becomes possible.
    pub incubation_period_days: f64,
    /// Probability of dying over the symptomatic window
    /// (`recovery_time_days - incubation_period_days`).
    pub lethality: f64,
    /// If `true`, recovered agents cannot be reinfected.
    pub acquired_immunity: bool,

    // ── Run control ───────────────────────────────────────────────────────
    /// Ticks per simulated day.
    pub day_length: u64,
    /// Total ticks `Sim::run` executes.
    pub total_ticks: u64,
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
    /// Random-walk candidates drawn per agent per tick before it gives up
    /// and stays put.
    pub max_move_attempts: u32,
    /// Random positions tried per agent during initial placement before the
    /// build fails.
    pub max_placement_attempts: u32,
}

impl Default for EpidemicConfig {
    fn default() -> Self {
        Self {
            world_width:            1700,
            world_height:           900,
            region_count:           9,
            region_margin:          20,
            population:             2000,
            agent_width:            5,
            speed_healthy:          2,
            speed_sick:             2,
            daily_travellers:       20.0,
            travel_speed:           7,
            infection_radius:       5,
            infection_risk:         0.5,
            recovery_time_days:     4.0,
            incubation_period_days: 2.0,
            lethality:              0.8,
            acquired_immunity:      true,
            day_length:             100,
            total_ticks:            60 * 100,
            seed:                   42,
            max_move_attempts:      64,
            max_placement_attempts: 10_000,
        }
    }
}

impl EpidemicConfig {
    /// Check every parameter.  Returns the first problem found.
    pub fn validate(&self) -> EpiResult<()> {
        if self.region_count == 0 {
            return Err(EpiError::NoRegions);
        }
        if self.population == 0 {
            return Err(EpiError::EmptyPopulation);
        }
        if u32::try_from(self.population).is_err() {
            return Err(EpiError::invalid("population", "exceeds the AgentId range"));
        }

        positive("world_width", self.world_width)?;
        positive("world_height", self.world_height)?;
        positive("agent_width", self.agent_width)?;
        positive("travel_speed", self.travel_speed)?;
        non_negative("region_margin", self.region_margin)?;
        non_negative("speed_healthy", self.speed_healthy)?;
        non_negative("speed_sick", self.speed_sick)?;
        non_negative("infection_radius", self.infection_radius)?;

        let cells = self.grid_cells();
        if cells > MAX_GRID_CELLS {
            return Err(EpiError::invalid(
                "world_width",
                format!(
                    "{}x{} world with radius {} needs {cells} grid cells, limit is {MAX_GRID_CELLS}",
                    self.world_width, self.world_height, self.infection_radius,
                ),
            ));
        }

        if self.day_length == 0 {
            return Err(EpiError::invalid("day_length", "must be at least one tick"));
        }
        if self.max_move_attempts == 0 {
            return Err(EpiError::invalid("max_move_attempts", "must be at least 1"));
        }
        if self.max_placement_attempts == 0 {
            return Err(EpiError::invalid("max_placement_attempts", "must be at least 1"));
        }

        probability("infection_risk", self.infection_risk)?;
        probability("lethality", self.lethality)?;

        if !self.daily_travellers.is_finite() || self.daily_travellers < 0.0 {
            return Err(EpiError::invalid("daily_travellers", "must be a non-negative number"));
        }
        if self.travel_probability() > 1.0 {
            return Err(EpiError::invalid(
                "daily_travellers",
                format!("at most one departure per tick ({} per day)", self.day_length),
            ));
        }

        if !self.incubation_period_days.is_finite() || self.incubation_period_days < 0.0 {
            return Err(EpiError::invalid("incubation_period_days", "must be a non-negative number"));
        }
        if !self.recovery_time_days.is_finite() {
            return Err(EpiError::invalid("recovery_time_days", "must be a finite number"));
        }
        if self.recovery_ticks() <= self.incubation_ticks() {
            return Err(EpiError::invalid(
                "recovery_time_days",
                format!(
                    "recovery ({} ticks) must come after incubation ({} ticks)",
                    self.recovery_ticks(),
                    self.incubation_ticks(),
                ),
            ));
        }

        Ok(())
    }

    // ── Derived quantities ────────────────────────────────────────────────

    /// Whole ticks from infection to recovery.
    #[inline]
    pub fn recovery_ticks(&self) -> u64 {
        days_to_ticks(self.recovery_time_days, self.day_length)
    }

    /// Whole ticks from infection until death becomes possible.
    #[inline]
    pub fn incubation_ticks(&self) -> u64 {
        days_to_ticks(self.incubation_period_days, self.day_length)
    }

    /// Length of the window in which an infected agent can die.
    #[inline]
    pub fn symptomatic_ticks(&self) -> u64 {
        self.recovery_ticks().saturating_sub(self.incubation_ticks())
    }

    /// Per-tick probability that one traveller departs.
    #[inline]
    pub fn travel_probability(&self) -> f64 {
        self.daily_travellers / self.day_length as f64
    }

    /// Occupancy-grid slots for this world: the world plus an
    /// `infection_radius` border on every side.
    #[inline]
    pub fn grid_cells(&self) -> i64 {
        let pad = 2 * i64::from(self.infection_radius) + 1;
        (i64::from(self.world_width) + pad).saturating_mul(i64::from(self.world_height) + pad)
    }

    /// The unpadded world rectangle, origin at `(0, 0)`.
    #[inline]
    pub fn world_rect(&self) -> Rect {
        Rect::from_origin(0, 0, self.world_width, self.world_height)
    }
}

fn days_to_ticks(days: f64, day_length: u64) -> u64 {
    (days * day_length as f64).max(0.0) as u64
}

fn positive(name: &'static str, value: i32) -> EpiResult<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(EpiError::invalid(name, format!("must be positive, got {value}")))
    }
}

fn non_negative(name: &'static str, value: i32) -> EpiResult<()> {
    if value >= 0 {
        Ok(())
    } else {
        Err(EpiError::invalid(name, format!("must not be negative, got {value}")))
    }
}

fn probability(name: &'static str, value: f64) -> EpiResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EpiError::invalid(name, format!("must be within [0, 1], got {value}")))
    }
}
