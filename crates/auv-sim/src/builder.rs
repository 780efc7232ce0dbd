//! Fluent builder for constructing a [`MissionRunner`].

use auv_agent::Agent;
use auv_core::{AgentId, AgentRng, MissionClock, Pose, SimRng};
use auv_drift::{DriftField, DriftSpec};
use auv_kinematics::{Auv, AuvConfig};
use auv_plan::MissionPlan;

use crate::error::{SimError, SimResult};
use crate::runner::MissionRunner;

/// How far behind its first waypoint an agent launches, so the very start
/// of the first lane still gets swept.
const LAUNCH_SETBACK: f64 = 0.5;

/// Fluent builder for [`MissionRunner`].
///
/// # Required inputs
///
/// - `seed` — the single source of randomness for the whole run
/// - `dt` — fixed timestep in seconds
/// - [`MissionPlan`] — one timed path per mobile agent
///
/// # Optional inputs
///
/// | Method              | Default                                  |
/// |---------------------|------------------------------------------|
/// | `.drift(spec)`      | no drift field                           |
/// | `.landmarks(poses)` | no landmark platforms                    |
/// | `.use_summary(b)`   | `true` (summarized merges)               |
/// | `.vehicle(config)`  | derived from the plan's speed/threshold  |
///
/// # Example
///
/// ```rust,ignore
/// let runner = MissionBuilder::new(42, 0.05, plan)
///     .drift(DriftSpec::default())
///     .landmarks(vec![Pose::new(100.0, 200.0, 0.0)])
///     .build()?;
/// ```
pub struct MissionBuilder {
    seed: u64,
    dt: f64,
    plan: MissionPlan,
    drift: Option<DriftSpec>,
    landmarks: Vec<Pose>,
    use_summary: bool,
    vehicle: Option<AuvConfig>,
}

impl MissionBuilder {
    pub fn new(seed: u64, dt: f64, plan: MissionPlan) -> Self {
        Self {
            seed,
            dt,
            plan,
            drift: None,
            landmarks: Vec::new(),
            use_summary: true,
            vehicle: None,
        }
    }

    /// Add a drift field laid out from the mission seed.
    pub fn drift(mut self, spec: DriftSpec) -> Self {
        self.drift = Some(spec);
        self
    }

    /// Place stationary landmark platforms at `poses`.
    pub fn landmarks(mut self, poses: Vec<Pose>) -> Self {
        self.landmarks = poses;
        self
    }

    /// Merge summarized graph fragments (default) or verbatim ones.
    pub fn use_summary(mut self, use_summary: bool) -> Self {
        self.use_summary = use_summary;
        self
    }

    /// Override the vehicle parameters derived from the plan config.
    pub fn vehicle(mut self, config: AuvConfig) -> Self {
        self.vehicle = Some(config);
        self
    }

    /// Validate, construct the fleet, and return a ready-to-run runner.
    pub fn build(self) -> SimResult<MissionRunner> {
        if self.dt <= 0.0 {
            return Err(SimError::BadTimestep(self.dt));
        }
        let mobile_count = self.plan.agent_count();
        if mobile_count == 0 {
            return Err(SimError::EmptyPlan);
        }

        let vehicle_config = self.vehicle.unwrap_or(AuvConfig {
            forward_speed: self.plan.config.speed,
            target_threshold: self.plan.config.target_threshold,
            max_turn_rate_deg: AuvConfig::default().max_turn_rate_deg,
        });

        // ── Drift field, laid out from the mission seed ───────────────────
        let mut root_rng = SimRng::new(self.seed);
        let drift = self
            .drift
            .as_ref()
            .map(|spec| DriftField::new(spec, &mut root_rng));

        // ── Mobile agents, one per timed path ─────────────────────────────
        let mut agents = Vec::with_capacity(mobile_count + self.landmarks.len());
        for i in 0..mobile_count {
            let id = AgentId(i as u32);
            let launch = self
                .plan
                .initial_pose(id)
                .ok_or(SimError::MissingInitialPose(id))?;
            // Start just behind the first waypoint, along its heading.
            let (bx, by) = launch.ahead(-LAUNCH_SETBACK);
            let truth = Auv::new(id, bx, by, launch.heading.to_degrees(), vehicle_config);
            agents.push(Agent::new_mobile(truth));
        }

        // ── Landmark platforms, ids continuing after the mobiles ──────────
        for (j, pose) in self.landmarks.iter().enumerate() {
            let id = AgentId((mobile_count + j) as u32);
            agents.push(Agent::new_landmark(id, *pose));
        }

        // ── Per-agent RNG streams ─────────────────────────────────────────
        let rngs = agents
            .iter()
            .map(|agent| AgentRng::new(self.seed, agent.id()))
            .collect();

        Ok(MissionRunner::assemble(
            self.plan,
            MissionClock::new(self.dt),
            agents,
            rngs,
            drift,
            self.use_summary,
        ))
    }
}
