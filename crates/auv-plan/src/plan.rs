//! `MissionPlan` — shared per-agent waypoint cursors — and `MissionConfig`.

use auv_core::AgentId;

use crate::waypoint::{TimedPath, TimedWaypoint};

// ── MissionConfig ─────────────────────────────────────────────────────────────

/// Mission-wide scalar parameters shared by every agent.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionConfig {
    /// Inter-vehicle communication range in meters.  `<= 0` disables all
    /// communication (and with it rendezvous and drift correction).
    pub comm_range: f64,

    /// Range at which a landmark platform offers a position fix.
    pub landmark_range: f64,

    /// Sonar swath width in meters.
    pub swath: f64,

    /// Minimum turn radius used for path planning.
    pub turn_radius: f64,

    /// Positional drift accumulated per meter of uncorroborated coverage
    /// travel (meters of drift per meter moved).
    pub accumulation_rate_k: f64,

    /// Bound of the symmetric per-tick compass noise, in radians.
    pub heading_noise_rad: f64,

    /// Commanded forward speed in m/s.
    pub speed: f64,

    /// Survey rectangle dimensions in meters (origin at (0, 0)).
    pub rect_width: f64,
    pub rect_height: f64,

    /// Vehicle arrival threshold in meters.
    pub target_threshold: f64,

    /// Default waypoint uncertainty radius in meters.
    pub uncertainty_radius: f64,

    /// Pattern indices at which a rendezvous may substitute for waiting out
    /// the schedule — the "meet" legs of the repeating waypoint pattern.
    /// An explicit contract with the plan generator, never hard-coded at
    /// the check site.
    pub rendezvous_pattern: Vec<usize>,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            comm_range: 50.0,
            landmark_range: 30.0,
            swath: 50.0,
            turn_radius: 5.0,
            accumulation_rate_k: 0.05,
            heading_noise_rad: 0.01,
            speed: 1.5,
            rect_width: 200.0,
            rect_height: 400.0,
            target_threshold: 2.0,
            uncertainty_radius: 10.0,
            rendezvous_pattern: vec![1, 3, 5],
        }
    }
}

impl MissionConfig {
    /// `true` if `idx` is a rendezvous-eligible pattern position.
    #[inline]
    pub fn is_rendezvous_index(&self, idx: usize) -> bool {
        self.rendezvous_pattern.contains(&idx)
    }
}

// ── MissionPlan ───────────────────────────────────────────────────────────────

/// The shared mission: one timed path per mobile agent plus visit cursors.
///
/// Agents are identified by index into `paths`; ids beyond the path count
/// (landmark platforms) simply have no waypoints.
#[derive(Clone, Debug)]
pub struct MissionPlan {
    pub config: MissionConfig,
    paths: Vec<TimedPath>,
    cursors: Vec<usize>,
    last_planned_time: f64,
}

impl MissionPlan {
    pub fn new(config: MissionConfig, paths: Vec<TimedPath>) -> Self {
        let last_planned_time = paths
            .iter()
            .map(TimedPath::last_time)
            .fold(0.0, f64::max);
        let cursors = vec![0; paths.len()];
        Self { config, paths, cursors, last_planned_time }
    }

    /// Number of mobile agents this plan schedules.
    pub fn agent_count(&self) -> usize {
        self.paths.len()
    }

    /// The waypoint `agent` is currently working toward, or `None` when the
    /// agent has no path or has exhausted it.
    pub fn current_wp(&self, agent: AgentId) -> Option<&TimedWaypoint> {
        let path = self.paths.get(agent.index())?;
        path.wps.get(self.cursors[agent.index()])
    }

    /// Advance `agent`'s cursor past its current waypoint.
    ///
    /// Saturates once the path is exhausted; unknown agents are a no-op.
    pub fn visit_current_wp(&mut self, agent: AgentId) {
        if let Some(path) = self.paths.get(agent.index()) {
            let cursor = &mut self.cursors[agent.index()];
            *cursor = (*cursor + 1).min(path.wps.len());
        }
    }

    /// Mark the current waypoint's rendezvous flag.  No-op when the agent
    /// has no current waypoint.
    pub fn mark_rendezvous(&mut self, agent: AgentId) {
        if let Some(path) = self.paths.get_mut(agent.index()) {
            if let Some(wp) = path.wps.get_mut(self.cursors[agent.index()]) {
                wp.rendezvous_happened = true;
            }
        }
    }

    /// `true` once every agent has exhausted its path.
    pub fn is_complete(&self) -> bool {
        self.paths
            .iter()
            .zip(&self.cursors)
            .all(|(path, &cursor)| cursor >= path.wps.len())
    }

    /// The latest scheduled waypoint time across all agents.
    pub fn last_planned_time(&self) -> f64 {
        self.last_planned_time
    }

    /// Launch pose for `agent` — the pose of its first waypoint.
    pub fn initial_pose(&self, agent: AgentId) -> Option<auv_core::Pose> {
        self.paths.get(agent.index())?.initial_pose()
    }

    /// Read-only view of an agent's full path.
    pub fn path(&self, agent: AgentId) -> Option<&TimedPath> {
        self.paths.get(agent.index())
    }
}
