//! Ticks and days.
//!
//! One tick is one pass of the driver (walk, infect, migrate).  A day is
//! `day_length` consecutive ticks; disease durations, the traveller rate and
//! the daily statistics are all expressed in days.
//!
//! ```text
//! day(t)         = t / day_length
//! tick_of_day(t) = t % day_length
//! ```

use std::fmt;

/// Absolute tick counter, starting at 0.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// Position of this tick in a per-tick series.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick {}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The driver's clock.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Ticks per day, ≥ 1.
    pub day_length:   u64,
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(day_length: u64) -> Self {
        Self { day_length: day_length.max(1), current_tick: Tick::ZERO }
    }

    /// Move to the next tick.  `true` if that tick starts a new day.
    #[inline]
    pub fn advance(&mut self) -> bool {
        self.current_tick = self.current_tick.next();
        self.current_tick.0.is_multiple_of(self.day_length)
    }

    #[inline]
    pub fn day(&self) -> u64 {
        self.day_of(self.current_tick)
    }

    #[inline]
    pub fn day_of(&self, tick: Tick) -> u64 {
        tick.0 / self.day_length
    }

    #[inline]
    pub fn tick_of_day(&self) -> u64 {
        self.current_tick.0 % self.day_length
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {} +{}", self.day(), self.tick_of_day())
    }
}
