//! The two-phase mission tick loop.

use std::time::{Duration, Instant};

use tracing::info;

use auv_agent::{Agent, Peers};
use auv_core::{AgentId, AgentRng, MissionClock, Tick};
use auv_drift::DriftField;
use auv_plan::MissionPlan;

use crate::observer::MissionObserver;
use crate::stats::MissionStats;

/// Minimum wall-clock interval between progress log lines.
const PROGRESS_INTERVAL: Duration = Duration::from_secs(5);

/// Why the loop stopped.  Both are expected terminations, not failures.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every agent exhausted its waypoints.
    PlanComplete,
    /// Simulated time reached the last scheduled waypoint time.
    MaxTimeReached,
}

/// Owns the fleet and drives it tick by tick.
///
/// Per tick, strictly in this order:
///
/// 1. `update` on every participant, in index order — motion and mission
///    progression.  Later agents see earlier agents' already-updated poses.
/// 2. `communicate` on every *mobile* agent, in index order — proximity
///    exchange and transition-gated correction.
///
/// Because all of phase 1 happens before any of phase 2, an agent's motion
/// decision in tick N can never observe a peer's tick-N communication
/// outcome; those become visible in tick N + 1.  The fixed ordering also
/// means no two agents ever mutate shared state at the same time, so the
/// loop needs no synchronization at all.
pub struct MissionRunner {
    pub plan: MissionPlan,
    pub clock: MissionClock,
    agents: Vec<Agent>,
    rngs: Vec<AgentRng>,
    drift: Option<DriftField>,
    use_summary: bool,
}

impl MissionRunner {
    /// Called by [`MissionBuilder`][crate::MissionBuilder] only.
    pub(crate) fn assemble(
        plan: MissionPlan,
        clock: MissionClock,
        agents: Vec<Agent>,
        rngs: Vec<AgentRng>,
        drift: Option<DriftField>,
        use_summary: bool,
    ) -> Self {
        Self { plan, clock, agents, rngs, drift, use_summary }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the plan completes or the schedule runs out.
    pub fn run<O: MissionObserver>(&mut self, observer: &mut O) -> RunOutcome {
        let started = Instant::now();
        let mut last_progress = Instant::now();

        let outcome = loop {
            observer.on_tick_start(self.clock.current_tick);
            self.step();
            observer.on_tick_end(self.clock.current_tick, self.clock.elapsed_secs());

            if self.plan.is_complete() {
                info!("mission plan complete");
                break RunOutcome::PlanComplete;
            }
            if self.clock.elapsed_secs() >= self.plan.last_planned_time() {
                info!("last planned waypoint time reached");
                break RunOutcome::MaxTimeReached;
            }

            if last_progress.elapsed() > PROGRESS_INTERVAL {
                info!(
                    simulated_secs = self.clock.elapsed_secs() as u64,
                    planned_secs = self.plan.last_planned_time() as u64,
                    elapsed_secs = started.elapsed().as_secs(),
                    "mission progress"
                );
                last_progress = Instant::now();
            }
        };

        observer.on_run_end(self.clock.current_tick, outcome);
        outcome
    }

    /// Advance the whole fleet by exactly one tick.
    pub fn step(&mut self) {
        self.clock.advance();
        let dt = self.clock.dt_secs;

        // ── Phase 1: update every participant ─────────────────────────────
        for i in 0..self.agents.len() {
            let (before, rest) = self.agents.split_at_mut(i);
            let Some((agent, after)) = rest.split_first_mut() else {
                break;
            };
            agent.update(
                dt,
                &mut self.plan,
                &Peers::new(before, after),
                self.drift.as_ref(),
                &mut self.rngs[i],
            );
        }

        // ── Phase 2: communicate, mobiles only ────────────────────────────
        for i in 0..self.agents.len() {
            if self.agents[i].role().is_landmark() {
                continue;
            }
            let (before, rest) = self.agents.split_at_mut(i);
            let Some((agent, after)) = rest.split_first_mut() else {
                break;
            };
            agent.communicate(&mut self.plan, &Peers::new(before, after), self.use_summary);
        }
    }

    /// Aggregate post-run statistics from the fleet's read-only state.
    pub fn stats(&self) -> MissionStats {
        MissionStats::compute(&self.agents, &self.plan)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }
}
