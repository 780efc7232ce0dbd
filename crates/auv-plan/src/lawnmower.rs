//! Serpentine lawnmower pattern generator.
//!
//! The survey rectangle is split into one vertical band per agent; each
//! agent sweeps its band in horizontal lanes, alternating direction.  Every
//! two lanes form one 6-waypoint pattern period:
//!
//! | idx | role   | placement                          |
//! |-----|--------|------------------------------------|
//! | 0   | First  | lane A start                       |
//! | 1   | Middle | 10 % along lane A ("meet")         |
//! | 2   | Last   | lane A end (coverage leg)          |
//! | 3   | First  | lane B start ("meet", at the turn) |
//! | 4   | Middle | 10 % along lane B ("align")        |
//! | 5   | Last   | lane B end (coverage leg)          |
//!
//! Indices 1, 3 and 5 sit where adjacent agents' lane boundaries coincide,
//! which is why they are the rendezvous-eligible set in the default
//! [`MissionConfig`](crate::MissionConfig).  This table is the binding
//! definition of `idx_in_pattern`; consumers interpret it only through
//! `MissionConfig::rendezvous_pattern`.

use std::f64::consts::PI;

use auv_core::Pose;

use crate::error::{PlanError, PlanResult};
use crate::waypoint::{LinePosition, TimedPath, TimedWaypoint};

/// Fraction of a lane at which the early "meet"/"align" waypoint sits.
const LEAD_IN_FRACTION: f64 = 0.1;

// ── LawnmowerSpec ─────────────────────────────────────────────────────────────

/// Inputs to the generator.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LawnmowerSpec {
    pub num_agents: usize,
    pub swath: f64,
    pub rect_width: f64,
    pub rect_height: f64,
    pub speed: f64,
    /// Schedule slack in seconds granted per waypoint.
    pub straight_slack: f64,
    /// Lane-to-lane overlap within a band, in meters.
    pub overlap_between_rows: f64,
    /// Band-to-band overlap between adjacent agents, in meters.
    pub overlap_between_lanes: f64,
    /// Uncertainty radius stamped on every generated waypoint.
    pub uncertainty_radius: f64,
}

impl Default for LawnmowerSpec {
    fn default() -> Self {
        Self {
            num_agents: 2,
            swath: 50.0,
            rect_width: 200.0,
            rect_height: 400.0,
            speed: 1.5,
            straight_slack: 1.0,
            overlap_between_rows: 10.0,
            overlap_between_lanes: 10.0,
            uncertainty_radius: 10.0,
        }
    }
}

// ── Generator ─────────────────────────────────────────────────────────────────

/// Generate one serpentine timed path per agent.
pub fn plan_lawnmower(spec: &LawnmowerSpec) -> PlanResult<Vec<TimedPath>> {
    if spec.num_agents == 0 {
        return Err(PlanError::NoAgents);
    }
    if spec.swath <= 0.0 {
        return Err(PlanError::BadSwath(spec.swath));
    }
    if spec.speed <= 0.0 {
        return Err(PlanError::BadSpeed(spec.speed));
    }
    if spec.rect_width <= 0.0 || spec.rect_height <= 0.0 {
        return Err(PlanError::BadArea(spec.rect_width, spec.rect_height));
    }

    let band_width = spec.rect_width / spec.num_agents as f64;
    (0..spec.num_agents)
        .map(|i| Ok(agent_path(spec, i, band_width)))
        .collect()
}

fn agent_path(spec: &LawnmowerSpec, agent: usize, band_width: f64) -> TimedPath {
    // Band extent, widened into the neighbors by half the lane overlap.
    let x_lo = (agent as f64 * band_width - spec.overlap_between_lanes / 2.0).max(0.0);
    let x_hi =
        ((agent as f64 + 1.0) * band_width + spec.overlap_between_lanes / 2.0).min(spec.rect_width);

    // Lane centerlines, bottom to top.
    let pitch = (spec.swath - spec.overlap_between_rows).max(spec.swath * 0.1);
    let mut lane_ys = Vec::new();
    let mut y = (spec.swath / 2.0).min(spec.rect_height / 2.0);
    while y <= spec.rect_height - spec.swath / 2.0 + 1e-9 {
        lane_ys.push(y);
        y += pitch;
    }
    if lane_ys.is_empty() {
        lane_ys.push(spec.rect_height / 2.0);
    }

    let mut builder = PathBuilder::new(spec);
    for (k, &lane_y) in lane_ys.iter().enumerate() {
        // Serpentine: even lanes run +x, odd lanes run -x.
        let (start_x, end_x, heading) = if k % 2 == 0 {
            (x_lo, x_hi, 0.0)
        } else {
            (x_hi, x_lo, PI)
        };
        let lead_x = start_x + (end_x - start_x) * LEAD_IN_FRACTION;
        // Pattern indices continue across lane pairs: lane A gets 0..=2,
        // lane B gets 3..=5, then the period repeats.
        let base = (k % 2) * 3;

        builder.push(start_x, lane_y, heading, LinePosition::First, base);
        builder.push(lead_x, lane_y, heading, LinePosition::Middle, base + 1);
        builder.push(end_x, lane_y, heading, LinePosition::Last, base + 2);
    }

    builder.finish()
}

/// Accumulates waypoints with schedule times from cumulative travel.
struct PathBuilder<'a> {
    spec: &'a LawnmowerSpec,
    wps: Vec<TimedWaypoint>,
    cum_dist: f64,
    prev: Option<(f64, f64)>,
}

impl<'a> PathBuilder<'a> {
    fn new(spec: &'a LawnmowerSpec) -> Self {
        Self { spec, wps: Vec::new(), cum_dist: 0.0, prev: None }
    }

    fn push(&mut self, x: f64, y: f64, heading: f64, position: LinePosition, idx: usize) {
        if let Some((px, py)) = self.prev {
            self.cum_dist += ((x - px).powi(2) + (y - py).powi(2)).sqrt();
        }
        self.prev = Some((x, y));

        let ordinal = self.wps.len() as f64;
        let time = self.cum_dist / self.spec.speed + ordinal * self.spec.straight_slack;
        self.wps.push(TimedWaypoint::new(
            Pose::new(x, y, heading),
            time,
            position,
            idx,
            self.spec.uncertainty_radius,
        ));
    }

    fn finish(self) -> TimedPath {
        TimedPath::new(self.wps)
    }
}
