//! Time series collected while the simulation runs.
//!
//! # Indexing
//!
//! Per-tick series have one entry for the initial population plus one per
//! completed tick, so `infected()[t]` is the count after `t` ticks.
//!
//! Per-day series hold one bucket per started day.  Events that happen
//! during tick `t` land in bucket `t / day_length`; the last bucket is the
//! day still in progress.

use epi_agent::HealthCounts;

/// Epidemic curves for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    infected:             Vec<usize>,
    healthy:              Vec<usize>,
    dead:                 Vec<usize>,
    recovered:            Vec<usize>,
    daily_new_infections: Vec<usize>,
    daily_new_deaths:     Vec<usize>,
    latest:               HealthCounts,
}

impl Statistics {
    /// Start the series from the initial population and open day 0.
    pub fn new(initial: HealthCounts) -> Self {
        let mut stats = Self {
            infected:             Vec::new(),
            healthy:              Vec::new(),
            dead:                 Vec::new(),
            recovered:            Vec::new(),
            daily_new_infections: vec![0],
            daily_new_deaths:     vec![0],
            latest:               initial,
        };
        stats.push_counts(initial);
        stats
    }

    /// Append the counts at the end of a tick.
    pub fn record_tick(&mut self, counts: HealthCounts) {
        self.push_counts(counts);
        self.latest = counts;
    }

    /// Add a tick's events to the day in progress.
    pub fn record_events(&mut self, new_infections: usize, new_deaths: usize) {
        if let Some(today) = self.daily_new_infections.last_mut() {
            *today += new_infections;
        }
        if let Some(today) = self.daily_new_deaths.last_mut() {
            *today += new_deaths;
        }
    }

    /// Open an empty bucket for the next day.
    pub fn open_day(&mut self) {
        self.daily_new_infections.push(0);
        self.daily_new_deaths.push(0);
    }

    fn push_counts(&mut self, counts: HealthCounts) {
        self.infected.push(counts.infected());
        self.healthy.push(counts.healthy());
        self.dead.push(counts.dead());
        self.recovered.push(counts.recovered());
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn infected(&self) -> &[usize] {
        &self.infected
    }

    /// Susceptible plus recovered, per tick.
    pub fn healthy(&self) -> &[usize] {
        &self.healthy
    }

    pub fn dead(&self) -> &[usize] {
        &self.dead
    }

    pub fn recovered(&self) -> &[usize] {
        &self.recovered
    }

    pub fn daily_new_infections(&self) -> &[usize] {
        &self.daily_new_infections
    }

    pub fn daily_new_deaths(&self) -> &[usize] {
        &self.daily_new_deaths
    }

    /// Counts after the most recent tick.
    pub fn latest(&self) -> HealthCounts {
        self.latest
    }

    /// Completed ticks.
    pub fn ticks_recorded(&self) -> usize {
        self.infected.len() - 1
    }

    /// `(tick, count)` of the highest infected count so far; the earliest
    /// tick wins ties.
    pub fn peak_infected(&self) -> (usize, usize) {
        self.infected
            .iter()
            .copied()
            .enumerate()
            .fold((0, 0), |best, (t, n)| if n > best.1 { (t, n) } else { best })
    }
}
