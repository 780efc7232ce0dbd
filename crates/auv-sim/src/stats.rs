//! Post-run fleet statistics: coverage geometry and error series.

use geo::{Area, BooleanOps, MinimumRotatedRect, MultiPolygon, Polygon, Rect};

use auv_agent::{Agent, Sample};
use auv_core::AgentId;
use auv_plan::MissionPlan;

/// Extra swath width granted when assessing coverage, meters.  The sensor
/// footprint is slightly wider than the nominal planning swath.
const COVERAGE_SWATH_MARGIN: f64 = 1.0;
/// Sonar beam radius used to extend strip ends, meters.
const BEAM_RADIUS: f64 = 1.5;
/// Guard against division by zero when normalizing by distance traveled.
const TRAVEL_EPS: f64 = 1e-6;

/// One agent's `(time, value)` series.
#[derive(Clone, Debug)]
pub struct AgentSeries {
    pub agent: AgentId,
    pub samples: Vec<Sample>,
}

/// Everything the reporting surface needs after a run.
#[derive(Clone, Debug)]
pub struct MissionStats {
    /// Union of every agent's coverage strips.
    pub covered: MultiPolygon<f64>,
    /// Survey rectangle minus coverage.  May be empty or multi-part; both
    /// are handled uniformly.
    pub missed: MultiPolygon<f64>,
    pub missed_area: f64,
    /// `(length, width)` of each missed hole's minimum rotated rectangle.
    pub missed_lenwidths: Vec<(f64, f64)>,

    /// Per-agent error normalized by cumulative distance traveled.
    pub translational_error_series: Vec<AgentSeries>,
    /// Per-agent error drops achieved by corrections.
    pub error_drop_series: Vec<AgentSeries>,

    /// Fleet-total commanded travel, meters.
    pub total_travel: f64,
    /// Mobile-agent count × last planned time, seconds.
    pub total_agent_time: f64,
    /// Final recorded error per agent (agents with no samples are skipped).
    pub final_errors: Vec<(AgentId, f64)>,
}

impl MissionStats {
    /// Aggregate from the fleet's read-only state.  Total, never panics:
    /// landmark agents, empty series, and degenerate geometry all reduce to
    /// empty or zero results.
    pub fn compute(agents: &[Agent], plan: &MissionPlan) -> MissionStats {
        let swath = plan.config.swath + COVERAGE_SWATH_MARGIN;

        // ── Coverage union ────────────────────────────────────────────────
        let mut covered = MultiPolygon::new(Vec::new());
        for agent in agents {
            for poly in agent.truth().coverage_polygons(swath, BEAM_RADIUS) {
                covered = covered.union(&MultiPolygon::new(vec![poly]));
            }
        }

        // ── Missed area ───────────────────────────────────────────────────
        let survey: Polygon<f64> = Rect::new(
            (0.0, 0.0),
            (plan.config.rect_width, plan.config.rect_height),
        )
        .to_polygon();
        let missed = MultiPolygon::new(vec![survey]).difference(&covered);
        let missed_area = missed.unsigned_area();

        let missed_lenwidths = missed.iter().filter_map(hole_lenwidth).collect();

        // ── Error series ──────────────────────────────────────────────────
        let mut translational_error_series = Vec::new();
        let mut error_drop_series = Vec::new();
        let mut final_errors = Vec::new();

        for agent in agents {
            let log = agent.log();
            if log.errors.is_empty() {
                continue; // landmarks, or a run that never ticked
            }

            // Normalize each error sample by the distance traveled so far.
            let mut cumulative = 0.0;
            let samples = log
                .errors
                .iter()
                .zip(&log.moved)
                .map(|(err, moved)| {
                    cumulative += moved.value;
                    Sample {
                        time: err.time,
                        value: err.value / (cumulative + TRAVEL_EPS),
                    }
                })
                .collect();
            translational_error_series.push(AgentSeries { agent: agent.id(), samples });

            if !log.error_drops.is_empty() {
                error_drop_series.push(AgentSeries {
                    agent: agent.id(),
                    samples: log.error_drops.clone(),
                });
            }

            if let Some(last) = log.errors.last() {
                final_errors.push((agent.id(), last.value));
            }
        }

        let total_travel = agents
            .iter()
            .map(|a| a.truth().total_distance_traveled())
            .sum();
        let mobile_count = agents.iter().filter(|a| !a.role().is_landmark()).count();
        let total_agent_time = mobile_count as f64 * plan.last_planned_time();

        MissionStats {
            covered,
            missed,
            missed_area,
            missed_lenwidths,
            translational_error_series,
            error_drop_series,
            total_travel,
            total_agent_time,
            final_errors,
        }
    }
}

/// `(length, width)` of one hole's minimum rotated rectangle.
///
/// Returns `None` for degenerate holes the rectangle fit rejects.
fn hole_lenwidth(hole: &Polygon<f64>) -> Option<(f64, f64)> {
    let rect = hole.minimum_rotated_rect()?;
    let ring = &rect.exterior().0;
    if ring.len() < 3 {
        return None;
    }
    let edge = |a: usize, b: usize| {
        let (pa, pb) = (ring[a], ring[b]);
        ((pa.x - pb.x).powi(2) + (pa.y - pb.y).powi(2)).sqrt()
    };
    let e0 = edge(0, 1);
    let e1 = edge(1, 2);
    Some((e0.max(e1), e0.min(e1)))
}
