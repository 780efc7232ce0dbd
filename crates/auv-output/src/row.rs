//! Plain data row types written by output backends.

/// One normalized-error sample: error divided by distance traveled so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorSampleRow {
    pub agent_id: u32,
    pub time_s: f64,
    pub error_per_m: f64,
}

/// Error reduction achieved by one successful correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorDropRow {
    pub agent_id: u32,
    pub time_s: f64,
    pub drop_m: f64,
}

/// Graph data volume received during one in-range contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReceivedRow {
    pub agent_id: u32,
    pub time_s: f64,
    pub vertices: u64,
    pub edges: u64,
}

/// Waypoint arrival bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaypointArrivalRow {
    pub agent_id: u32,
    pub time_s: f64,
    /// Arrival time minus scheduled time; negative = early.
    pub slack_s: f64,
}

/// One tick of one agent's connectivity trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionRow {
    pub agent_id: u32,
    pub tick: u64,
    pub connected: bool,
}

/// Minimum-rotated-rectangle extent of one missed hole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissedAreaRow {
    pub length_m: f64,
    pub width_m: f64,
}

/// Final recorded error of one agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinalErrorRow {
    pub agent_id: u32,
    pub error_m: f64,
}

/// The single fleet-level result row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MissionSummaryRow {
    pub missed_area_m2: f64,
    pub missed_holes: u64,
    pub total_travel_m: f64,
    pub total_agent_time_s: f64,
}
