//! Simulation time model.
//!
//! Time advances only through a fixed timestep: every tick the clock moves
//! forward by `dt_secs` and nothing else ever mutates it.  The integer tick
//! counter is the canonical ordering; the floating-point elapsed time is
//! derived, so two runs with the same `dt` agree on both.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── MissionClock ──────────────────────────────────────────────────────────────

/// Fixed-step clock for one mission run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionClock {
    /// Simulated seconds per tick.
    pub dt_secs: f64,
    /// The current tick — advanced by `MissionClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl MissionClock {
    /// Create a clock at tick 0 with the given resolution.
    pub fn new(dt_secs: f64) -> Self {
        debug_assert!(dt_secs > 0.0, "dt must be positive");
        Self { dt_secs, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.dt_secs
    }
}

impl fmt::Display for MissionClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1} s)", self.current_tick, self.elapsed_secs())
    }
}
