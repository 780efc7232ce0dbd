//! The `Auv` vehicle: steering controller and one-tick motion integration.

use auv_core::pose::wrap_angle;
use auv_core::{AgentId, Pose};

// ── Control ───────────────────────────────────────────────────────────────────

/// Requested turn direction for one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnDirection {
    Left,
    Straight,
    Right,
}

impl TurnDirection {
    /// Signed heading-change factor: left is positive (counter-clockwise).
    #[inline]
    pub fn signum(self) -> f64 {
        match self {
            TurnDirection::Left => 1.0,
            TurnDirection::Straight => 0.0,
            TurnDirection::Right => -1.0,
        }
    }
}

/// One tick's worth of commanded motion, produced by [`Auv::steer`] and
/// consumed by [`Auv::update`] — possibly by a *different* vehicle than the
/// one that produced it (the truth vehicle replays the belief's control).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Control {
    pub direction: TurnDirection,
    /// Turn magnitude in radians for this tick (already rate-clamped).
    pub turn: f64,
    /// Forward travel in meters for this tick; 0 when holding station.
    pub forward: f64,
}

impl Control {
    /// Hold station: no turn, no forward motion.
    pub const HOLD: Control = Control {
        direction: TurnDirection::Straight,
        turn: 0.0,
        forward: 0.0,
    };
}

// ── Drift ─────────────────────────────────────────────────────────────────────

/// Unmodeled disturbance applied on top of a control during integration.
///
/// Only the truth vehicle ever receives a non-zero drift; the belief vehicle
/// integrates with [`Drift::NONE`], which is exactly what makes the two
/// diverge in a way the agent cannot directly observe.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Drift {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

impl Drift {
    pub const NONE: Drift = Drift { x: 0.0, y: 0.0, heading: 0.0 };
}

// ── AuvConfig ─────────────────────────────────────────────────────────────────

/// Construction parameters for one vehicle.
///
/// The turn rate is given in degrees per second — the one place degrees are
/// accepted; everything downstream is radians.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuvConfig {
    /// Forward speed in m/s.  0 makes the vehicle a stationary platform.
    pub forward_speed: f64,
    /// Distance at which a target counts as reached, in meters.
    pub target_threshold: f64,
    /// Maximum turn rate in degrees per second.
    pub max_turn_rate_deg: f64,
}

impl Default for AuvConfig {
    fn default() -> Self {
        Self {
            forward_speed: 1.5,
            target_threshold: 2.0,
            max_turn_rate_deg: 25.0,
        }
    }
}

// ── Auv ───────────────────────────────────────────────────────────────────────

/// A point vehicle with heading, bounded turn rate, and a coverage trace.
#[derive(Clone, Debug)]
pub struct Auv {
    id: AgentId,
    pose: Pose,
    target: Option<(f64, f64)>,

    target_threshold: f64,
    forward_speed: f64,
    /// Maximum turn rate in rad/s (converted from degrees at construction).
    max_turn_rate: f64,

    last_moved: f64,
    total_distance: f64,

    /// Pose after every integration step; `trace[0]` is the initial pose.
    trace: Vec<Pose>,
    /// `covered[k]` — was coverage active over the segment `trace[k] → trace[k+1]`.
    covered: Vec<bool>,
}

impl Auv {
    /// Construct a vehicle at `(x, y)` with `heading_deg` degrees.
    pub fn new(id: AgentId, x: f64, y: f64, heading_deg: f64, config: AuvConfig) -> Self {
        let pose = Pose::new(x, y, heading_deg.to_radians());
        Self {
            id,
            pose,
            target: None,
            target_threshold: config.target_threshold,
            forward_speed: config.forward_speed,
            max_turn_rate: config.max_turn_rate_deg.to_radians(),
            last_moved: 0.0,
            total_distance: 0.0,
            trace: vec![pose],
            covered: Vec::new(),
        }
    }

    // ── Steering ──────────────────────────────────────────────────────────

    /// Set the point the controller steers at.
    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = Some((x, y));
    }

    /// Compute this tick's control toward the stored target.
    ///
    /// Does not move the vehicle.  Returns [`Control::HOLD`] when there is
    /// no target or the target is within the arrival threshold — a vehicle
    /// that has reached its goal holds station instead of orbiting it.
    pub fn steer(&self, dt: f64) -> Control {
        let Some((tx, ty)) = self.target else {
            return Control::HOLD;
        };
        let dist = self.pose.distance_to_point(tx, ty);
        if dist <= self.target_threshold {
            return Control::HOLD;
        }

        let desired = (ty - self.pose.y).atan2(tx - self.pose.x);
        let err = wrap_angle(desired - self.pose.heading);
        let turn = err.abs().min(self.max_turn_rate * dt);
        let direction = if err > f64::EPSILON {
            TurnDirection::Left
        } else if err < -f64::EPSILON {
            TurnDirection::Right
        } else {
            TurnDirection::Straight
        };

        Control {
            direction,
            turn,
            forward: self.forward_speed * dt,
        }
    }

    // ── Integration ───────────────────────────────────────────────────────

    /// Integrate one tick: apply `control` plus `drift`, append to the trace.
    ///
    /// The control is re-clamped against this vehicle's own limits, so a
    /// control produced by a faster vehicle cannot push this one past its
    /// physical envelope — in particular a zero-speed platform never moves
    /// forward no matter what it is fed.
    pub fn update(&mut self, dt: f64, control: Control, drift: Drift, cover: bool) {
        let turn = control.turn.min(self.max_turn_rate * dt).max(0.0);
        let forward = control.forward.min(self.forward_speed * dt).max(0.0);

        let heading = wrap_angle(self.pose.heading + control.direction.signum() * turn + drift.heading);
        let x = self.pose.x + forward * heading.cos() + drift.x;
        let y = self.pose.y + forward * heading.sin() + drift.y;
        self.pose = Pose { x, y, heading };

        self.last_moved = forward;
        self.total_distance += forward;
        self.trace.push(self.pose);
        self.covered.push(cover && forward > 0.0);
    }

    // ── Direct pose writes ────────────────────────────────────────────────

    /// Overwrite the heading (radians).  Used for the per-tick compass copy.
    pub fn set_heading(&mut self, heading: f64) {
        self.pose.heading = wrap_angle(heading);
    }

    /// Overwrite the full pose.  Used for landmark fixes and post-optimization
    /// snaps; intentionally not recorded in the trace (the next integration
    /// step records the pose it produced).
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = Pose::new(pose.x, pose.y, pose.heading);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    #[inline]
    pub fn position(&self) -> (f64, f64) {
        (self.pose.x, self.pose.y)
    }

    #[inline]
    pub fn heading(&self) -> f64 {
        self.pose.heading
    }

    #[inline]
    pub fn target_threshold(&self) -> f64 {
        self.target_threshold
    }

    #[inline]
    pub fn forward_speed(&self) -> f64 {
        self.forward_speed
    }

    /// Meters moved by the most recent `update`.
    #[inline]
    pub fn last_moved_distance(&self) -> f64 {
        self.last_moved
    }

    /// Cumulative commanded travel over the whole run.
    #[inline]
    pub fn total_distance_traveled(&self) -> f64 {
        self.total_distance
    }

    /// Every pose this vehicle has occupied, in tick order.
    #[inline]
    pub fn pose_trace(&self) -> &[Pose] {
        &self.trace
    }

    /// Per-segment coverage flags, parallel to `pose_trace()` segments.
    #[inline]
    pub fn covered_segments(&self) -> &[bool] {
        &self.covered
    }

    /// Polygons swept by the coverage sensor; see [`crate::coverage_polygons`].
    pub fn coverage_polygons(&self, swath: f64, beam_radius: f64) -> Vec<geo::Polygon<f64>> {
        crate::coverage::coverage_polygons(&self.trace, &self.covered, swath, beam_radius)
    }
}
