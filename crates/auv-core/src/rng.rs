//! Deterministic per-agent and mission-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent ids uniformly across the seed space.
//! Agents therefore never share RNG state: the noise one agent draws is
//! unaffected by how many draws its neighbors made, and adding a landmark
//! to the fleet does not disturb the trajectories of existing vehicles.
//!
//! There is no process-wide generator anywhere in the workspace — every
//! random draw flows through an explicitly passed `AgentRng` or `SimRng`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG, used for heading-noise draws during drift.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent id.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform draw from `[-bound, bound]`.  Returns 0.0 when `bound <= 0`
    /// without consuming RNG state, so a zero noise configuration stays
    /// bit-identical to one with the noise path compiled out.
    #[inline]
    pub fn symmetric(&mut self, bound: f64) -> f64 {
        if bound <= 0.0 {
            return 0.0;
        }
        self.0.gen_range(-bound..=bound)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Mission-level RNG for construction-time randomness (drift-field layout).
///
/// Used only single-threaded, before the tick loop starts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — lets a builder
    /// hand independent streams to independent construction steps.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 =
            self.0.gen_range(0..=u64::MAX) ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
