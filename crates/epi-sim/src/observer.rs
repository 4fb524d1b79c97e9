//! Simulation observer trait for progress reporting and data collection.

use epi_core::Tick;

use crate::{SimView, Statistics, TickReport};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers get read-only access; the
/// engine state cannot be changed from here.
///
/// # Example: daily curve printer
///
/// ```rust,ignore
/// struct Curve;
///
/// impl SimObserver for Curve {
///     fn on_day_end(&mut self, day: u64, stats: &Statistics) {
///         println!("day {day}: {} new cases", stats.daily_new_infections()[day as usize]);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick's phases and statistics, with the state as it
    /// stands for the next tick.
    fn on_tick_end(&mut self, _report: &TickReport, _view: &SimView<'_>) {}

    /// Called when the clock crosses into a new day.  `day` is the day that
    /// just ended.
    fn on_day_end(&mut self, _day: u64, _stats: &Statistics) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &Statistics) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
