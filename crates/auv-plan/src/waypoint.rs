//! Timed waypoints and per-agent paths.

use auv_core::Pose;

// ── LinePosition ──────────────────────────────────────────────────────────────

/// Where a waypoint sits within its local lane group.
///
/// The coverage sensor is only active on legs toward a `Last` waypoint —
/// transit and alignment legs do not sweep.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinePosition {
    First,
    Middle,
    Last,
}

// ── TimedWaypoint ─────────────────────────────────────────────────────────────

/// One scheduled waypoint of an agent's mission.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedWaypoint {
    /// Target pose; the heading is the travel direction through the point.
    pub pose: Pose,

    /// Scheduled arrival time in seconds from mission start.
    pub time: f64,

    /// Role of this waypoint within its lane group.
    pub position_in_line: LinePosition,

    /// Index within the repeating waypoint pattern (0-based).  Which indices
    /// are rendezvous-eligible is a mission-level configuration contract
    /// ([`crate::MissionConfig::rendezvous_pattern`]), not a property the
    /// waypoint itself interprets.
    pub idx_in_pattern: usize,

    /// Radius within which a communicating agent may attribute a rendezvous
    /// to this waypoint.
    pub uncertainty_radius: f64,

    /// Set once a rendezvous has been attributed to this waypoint.
    pub rendezvous_happened: bool,
}

impl TimedWaypoint {
    pub fn new(
        pose: Pose,
        time: f64,
        position_in_line: LinePosition,
        idx_in_pattern: usize,
        uncertainty_radius: f64,
    ) -> Self {
        Self {
            pose,
            time,
            position_in_line,
            idx_in_pattern,
            uncertainty_radius,
            rendezvous_happened: false,
        }
    }
}

// ── TimedPath ─────────────────────────────────────────────────────────────────

/// One agent's ordered waypoint sequence.  Times are non-decreasing.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedPath {
    pub wps: Vec<TimedWaypoint>,
}

impl TimedPath {
    pub fn new(wps: Vec<TimedWaypoint>) -> Self {
        debug_assert!(
            wps.windows(2).all(|w| w[0].time <= w[1].time),
            "waypoint times must be non-decreasing"
        );
        Self { wps }
    }

    pub fn len(&self) -> usize {
        self.wps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wps.is_empty()
    }

    /// The pose of the first waypoint, if any — the agent's launch pose.
    pub fn initial_pose(&self) -> Option<Pose> {
        self.wps.first().map(|wp| wp.pose)
    }

    /// Scheduled time of the final waypoint; 0 for an empty path.
    pub fn last_time(&self) -> f64 {
        self.wps.last().map_or(0.0, |wp| wp.time)
    }
}
