//! The `Agent`: mission sync, path following, drift injection, and the
//! opportunistic communication/correction protocol.

use std::collections::VecDeque;

use tracing::debug;

use auv_core::{AgentId, AgentRng, Pose};
use auv_drift::DriftField;
use auv_dubins::shortest_path;
use auv_graph::PoseGraph;
use auv_kinematics::{Auv, AuvConfig, Drift};
use auv_plan::{LinePosition, MissionPlan};

use crate::logs::{AgentLog, Connectivity, CountSample, Sample, VizLog, WaypointArrival};
use crate::peers::Peers;

/// Distance margin beyond the arrival threshold under which the agent
/// steers straight at the waypoint instead of planning a curve.
const DIRECT_STEER_MARGIN: f64 = 0.5;
/// Arc-length spacing of sampled path points, meters.
const PATH_SAMPLE_STEP: f64 = 0.5;

// ── Role ──────────────────────────────────────────────────────────────────────

/// Participant kind.  One `Agent` type carries both so the fleet is a single
/// homogeneous vector; mission and planning state is simply inert for
/// landmarks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    /// Mission-following vehicle.
    Mobile,
    /// Stationary platform offering position fixes; has no mission.
    Landmark,
}

impl Role {
    #[inline]
    pub fn is_landmark(self) -> bool {
        matches!(self, Role::Landmark)
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One fleet participant.
pub struct Agent {
    id: AgentId,
    role: Role,

    /// Ground truth: what physically happens, drift included.
    truth: Auv,
    /// The agent's own belief, driven by dead reckoning and corrections.
    belief: Auv,
    /// The estimator reconciling the two.
    graph: PoseGraph,

    /// Simulated seconds this agent has lived.
    time: f64,

    /// Sampled path points toward the active waypoint, lead point first.
    /// Cleared on waypoint changes and corrections to force replanning.
    path_queue: VecDeque<Pose>,

    conn: Connectivity,
    log: AgentLog,
    viz: VizLog,
}

impl Agent {
    /// Build a mission-following agent around its truth vehicle.  The
    /// belief vehicle starts as an exact copy — truth and belief only
    /// diverge once drift is injected.
    pub fn new_mobile(truth: Auv) -> Self {
        let id = truth.id();
        let belief = truth.clone();
        Self {
            id,
            role: Role::Mobile,
            truth,
            belief,
            graph: PoseGraph::new(id),
            time: 0.0,
            path_queue: VecDeque::new(),
            conn: Connectivity::default(),
            log: AgentLog::default(),
            viz: VizLog::default(),
        }
    }

    /// Build a stationary landmark platform at `pose`.
    ///
    /// Its single (anchored) graph vertex is appended here, at construction
    /// — nothing is ever appended again.
    pub fn new_landmark(id: AgentId, pose: Pose) -> Self {
        let config = AuvConfig { forward_speed: 0.0, ..AuvConfig::default() };
        let truth = Auv::new(id, pose.x, pose.y, pose.heading.to_degrees(), config);
        let belief = truth.clone();
        let mut graph = PoseGraph::new(id);
        graph.append_anchor_pose(pose);
        Self {
            id,
            role: Role::Landmark,
            truth,
            belief,
            graph,
            time: 0.0,
            path_queue: VecDeque::new(),
            conn: Connectivity::default(),
            log: AgentLog::default(),
            viz: VizLog::default(),
        }
    }

    // ── Phase 1: update ───────────────────────────────────────────────────

    /// Advance mission progress, target selection, and both vehicles by `dt`.
    pub fn update(
        &mut self,
        dt: f64,
        plan: &mut MissionPlan,
        peers: &Peers<'_>,
        drift: Option<&DriftField>,
        rng: &mut AgentRng,
    ) {
        self.time += dt;
        if self.role.is_landmark() {
            return;
        }

        let comm_range = plan.config.comm_range;
        let landmark_range = plan.config.landmark_range;
        let turn_radius = plan.config.turn_radius;
        let accumulation_k = plan.config.accumulation_rate_k;
        let noise_bound = plan.config.heading_noise_rad;

        // ── Mission sync ──────────────────────────────────────────────────
        let dist;
        let mut current = plan.current_wp(self.id).cloned();
        match current.take() {
            None => {
                // Cursor may simply never have produced a waypoint; nudge it
                // once and refetch before declaring the mission over.
                plan.visit_current_wp(self.id);
                current = plan.current_wp(self.id).cloned();
                let Some(wp) = &current else {
                    return; // mission exhausted — idle for the rest of the run
                };
                dist = self.belief.pose().distance_to(&wp.pose);
            }
            Some(wp) => {
                dist = self.belief.pose().distance_to(&wp.pose);
                let at_target = dist <= self.belief.target_threshold();
                let mut advanced = false;
                if at_target {
                    self.log.waypoint_arrivals.push(WaypointArrival {
                        time: self.time,
                        slack: self.time - wp.time,
                    });
                    // A rendezvous only excuses the wait on the "meet" legs
                    // of the pattern, never on lining-up legs.
                    let rendezvous_satisfied = wp.rendezvous_happened
                        && plan.config.is_rendezvous_index(wp.idx_in_pattern);
                    if self.time >= wp.time || rendezvous_satisfied {
                        plan.visit_current_wp(self.id);
                        current = plan.current_wp(self.id).cloned();
                        self.path_queue.clear();
                        advanced = true;
                    } else {
                        // Ahead of schedule with nobody met: hold position.
                        self.viz.waited.push(self.belief.pose());
                    }
                }
                if !advanced {
                    current = Some(wp);
                }
            }
        }
        let Some(wp) = current else {
            return; // walked off the end of the plan this tick
        };

        // ── Path planning ─────────────────────────────────────────────────
        let threshold = self.belief.target_threshold();
        let target = if dist < threshold + DIRECT_STEER_MARGIN {
            (wp.pose.x, wp.pose.y)
        } else {
            if self.path_queue.is_empty() {
                match shortest_path(self.belief.pose(), wp.pose, turn_radius) {
                    Ok(path) => {
                        self.path_queue = path.sample(PATH_SAMPLE_STEP).into();
                        self.viz.planned.push(self.belief.pose());
                    }
                    Err(_) => {
                        // Degenerate geometry — fall through and steer
                        // straight at the waypoint.
                    }
                }
            }
            // Drop lead samples already reached, then chase the new lead.
            while self.path_queue.len() > 1 {
                let Some(front) = self.path_queue.front() else { break };
                if self.belief.pose().distance_to_point(front.x, front.y) > threshold {
                    break;
                }
                self.path_queue.pop_front();
            }
            match self.path_queue.front() {
                Some(front) => (front.x, front.y),
                None => (wp.pose.x, wp.pose.y),
            }
        };

        // ── Motion ────────────────────────────────────────────────────────
        // Coverage only sweeps on the final leg of each lane.
        let cover = wp.position_in_line == LinePosition::Last;

        let truth_pose = self.truth.pose();
        let mut alone = true;
        let mut near_landmark = false;
        for peer in peers.iter() {
            if peer.id == self.id {
                continue;
            }
            let d = truth_pose.distance_to(&peer.truth.pose());
            match peer.role {
                Role::Mobile => {
                    if d <= comm_range {
                        alone = false;
                    }
                }
                Role::Landmark => {
                    if d <= landmark_range {
                        near_landmark = true;
                    }
                }
            }
        }

        self.belief.set_target(target.0, target.1);
        let control = self.belief.steer(dt);
        self.belief.update(dt, control, Drift::NONE, cover);
        let moved = self.belief.last_moved_distance();

        // Drift accumulates only during uncorroborated coverage motion.
        let (drift_vec, heading_noise) = match drift {
            Some(field) if cover && alone => {
                let (_, _, angle) = field.sample(truth_pose.x, truth_pose.y);
                let magnitude = moved * accumulation_k;
                let vec = Drift {
                    x: magnitude * angle.cos(),
                    y: magnitude * angle.sin(),
                    heading: 0.0,
                };
                (vec, rng.symmetric(noise_bound))
            }
            _ => (Drift::NONE, 0.0),
        };
        self.truth.update(dt, control, drift_vec, cover);

        // ── Belief reconciliation ─────────────────────────────────────────
        // The compass is the one exact sensor, modulo the drawn noise term.
        self.belief.set_heading(self.truth.heading() + heading_noise);
        if near_landmark {
            // A landmark in range fixes the whole pose.
            self.belief.set_pose(self.truth.pose());
        }
        self.graph.append_odom_pose(self.belief.pose());

        self.log.errors.push(Sample {
            time: self.time,
            value: self.truth.pose().distance_to(&self.belief.pose()),
        });
        self.log.moved.push(Sample { time: self.time, value: moved });
    }

    // ── Phase 2: communicate ──────────────────────────────────────────────

    /// Detect in-range peers, exchange graph data, and correct on
    /// connectivity transitions.
    pub fn communicate(&mut self, plan: &mut MissionPlan, peers: &Peers<'_>, use_summary: bool) {
        if self.role.is_landmark() {
            return;
        }

        let comm_range = plan.config.comm_range;
        let landmark_range = plan.config.landmark_range;
        let mut connected = false;

        if comm_range > 0.0 {
            let self_truth = self.truth.pose();
            for peer in peers.iter() {
                if peer.id == self.id {
                    continue;
                }
                let is_landmark = peer.role.is_landmark();
                let range = if is_landmark { landmark_range } else { comm_range };
                let peer_truth = peer.truth.pose();
                if self_truth.distance_to(&peer_truth) > range {
                    continue;
                }

                self.graph
                    .measure_tip_to_tip(&self_truth, &peer_truth, &peer.graph, is_landmark);
                // Landmark fragments are certain information — always merge
                // them verbatim.
                let summarize = use_summary && !is_landmark;
                let (verts, edges) = self
                    .graph
                    .fill_in_since_last_interaction(&peer.graph, summarize);
                self.log.received_vertices.push(CountSample::at(self.time, verts));
                self.log.received_edges.push(CountSample::at(self.time, edges));

                connected = true;
            }
        }

        self.conn.record(connected);

        if connected {
            // Attribute the rendezvous to the active waypoint, but only if
            // the agent is actually near it — a coincidental meeting far
            // away must not satisfy an unrelated waypoint.
            let near_wp = plan
                .current_wp(self.id)
                .map(|wp| (wp.pose, wp.uncertainty_radius));
            if let Some((wp_pose, radius)) = near_wp {
                if self.belief.pose().distance_to(&wp_pose) <= radius {
                    plan.mark_rendezvous(self.id);
                }
            }
        }

        // Optimize only on rising/falling connectivity edges — while a
        // link persists the estimate is still converging on fresh
        // measurements, and this bounds the optimizer to O(transitions).
        if self.conn.transition() {
            if let Some(corrected) = self.graph.optimize(use_summary) {
                let err_before = self.translational_error();
                self.belief.set_pose(corrected);
                self.viz.corrected.push(corrected);
                self.path_queue.clear();
                let err_after = self.translational_error();
                self.log.error_drops.push(Sample {
                    time: self.time,
                    value: err_before - err_after,
                });
                debug!(
                    agent = self.id.0,
                    drop = err_before - err_after,
                    "correction applied"
                );
            }
        }
    }

    // ── Derived measures ──────────────────────────────────────────────────

    /// Current truth↔belief distance.
    pub fn translational_error(&self) -> f64 {
        self.truth.pose().distance_to(&self.belief.pose())
    }

    /// Error normalized by distance traveled; 0 before any motion.
    pub fn error_per_meter(&self) -> f64 {
        let travel = self.truth.total_distance_traveled();
        if travel <= f64::EPSILON {
            return 0.0;
        }
        self.translational_error() / travel
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn truth(&self) -> &Auv {
        &self.truth
    }

    pub fn belief(&self) -> &Auv {
        &self.belief
    }

    pub fn graph(&self) -> &PoseGraph {
        &self.graph
    }

    pub fn connectivity(&self) -> &Connectivity {
        &self.conn
    }

    pub fn log(&self) -> &AgentLog {
        &self.log
    }

    pub fn viz(&self) -> &VizLog {
        &self.viz
    }

    /// Number of queued path samples (replanning diagnostics).
    pub fn queued_path_len(&self) -> usize {
        self.path_queue.len()
    }

    /// Teleport both vehicles (scenario tests only).
    #[cfg(test)]
    pub(crate) fn set_poses_for_test(&mut self, truth: Pose, belief: Pose) {
        self.truth.set_pose(truth);
        self.belief.set_pose(belief);
    }
}
