//! Run observer hooks for progress reporting and data collection.

use auv_core::Tick;

use crate::runner::RunOutcome;

/// Callbacks invoked by [`MissionRunner::run`][crate::MissionRunner::run]
/// at tick boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  None of them participate in mission
/// correctness — the loop behaves identically under a `NoopObserver`.
pub trait MissionObserver {
    /// Called before a tick's update phase.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a tick's communicate phase, before the termination check.
    fn on_tick_end(&mut self, _tick: Tick, _sim_time_secs: f64) {}

    /// Called once, after the loop exits.
    fn on_run_end(&mut self, _final_tick: Tick, _outcome: RunOutcome) {}
}

/// A [`MissionObserver`] that does nothing.
pub struct NoopObserver;

impl MissionObserver for NoopObserver {}
