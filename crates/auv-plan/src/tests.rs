//! Unit tests for mission plans and the lawnmower generator.

use auv_core::{AgentId, Pose};

use crate::{
    LawnmowerSpec, LinePosition, MissionConfig, MissionPlan, PlanError, TimedPath, TimedWaypoint,
    plan_lawnmower,
};

fn wp(x: f64, y: f64, time: f64, pos: LinePosition, idx: usize) -> TimedWaypoint {
    TimedWaypoint::new(Pose::new(x, y, 0.0), time, pos, idx, 10.0)
}

fn two_wp_plan() -> MissionPlan {
    let path = TimedPath::new(vec![
        wp(0.0, 0.0, 0.0, LinePosition::First, 0),
        wp(10.0, 0.0, 10.0, LinePosition::Last, 2),
    ]);
    MissionPlan::new(MissionConfig::default(), vec![path])
}

#[cfg(test)]
mod cursors {
    use super::*;

    #[test]
    fn walks_the_path_then_exhausts() {
        let mut plan = two_wp_plan();
        let a = AgentId(0);
        assert_eq!(plan.current_wp(a).unwrap().pose.x, 0.0);
        plan.visit_current_wp(a);
        assert_eq!(plan.current_wp(a).unwrap().pose.x, 10.0);
        plan.visit_current_wp(a);
        assert!(plan.current_wp(a).is_none());
        // saturates — further visits stay exhausted
        plan.visit_current_wp(a);
        assert!(plan.current_wp(a).is_none());
    }

    #[test]
    fn unknown_agent_has_no_waypoints() {
        let mut plan = two_wp_plan();
        let landmark = AgentId(5);
        assert!(plan.current_wp(landmark).is_none());
        plan.visit_current_wp(landmark); // must not panic
        plan.mark_rendezvous(landmark);
    }

    #[test]
    fn complete_only_when_all_paths_exhausted() {
        let paths = vec![
            TimedPath::new(vec![wp(0.0, 0.0, 0.0, LinePosition::First, 0)]),
            TimedPath::new(vec![wp(5.0, 0.0, 5.0, LinePosition::First, 0)]),
        ];
        let mut plan = MissionPlan::new(MissionConfig::default(), paths);
        assert!(!plan.is_complete());
        plan.visit_current_wp(AgentId(0));
        assert!(!plan.is_complete());
        plan.visit_current_wp(AgentId(1));
        assert!(plan.is_complete());
    }

    #[test]
    fn mark_rendezvous_hits_the_current_waypoint_only() {
        let mut plan = two_wp_plan();
        let a = AgentId(0);
        plan.mark_rendezvous(a);
        assert!(plan.current_wp(a).unwrap().rendezvous_happened);
        plan.visit_current_wp(a);
        assert!(!plan.current_wp(a).unwrap().rendezvous_happened);
    }

    #[test]
    fn last_planned_time_is_fleet_max() {
        let paths = vec![
            TimedPath::new(vec![wp(0.0, 0.0, 30.0, LinePosition::Last, 2)]),
            TimedPath::new(vec![wp(0.0, 0.0, 80.0, LinePosition::Last, 2)]),
        ];
        let plan = MissionPlan::new(MissionConfig::default(), paths);
        assert_eq!(plan.last_planned_time(), 80.0);
    }
}

#[cfg(test)]
mod config {
    use super::*;

    #[test]
    fn default_rendezvous_pattern_is_odd_indices() {
        let cfg = MissionConfig::default();
        assert!(cfg.is_rendezvous_index(1));
        assert!(cfg.is_rendezvous_index(3));
        assert!(cfg.is_rendezvous_index(5));
        assert!(!cfg.is_rendezvous_index(0));
        assert!(!cfg.is_rendezvous_index(2));
        assert!(!cfg.is_rendezvous_index(4));
    }

    #[test]
    fn pattern_is_configurable() {
        let cfg = MissionConfig { rendezvous_pattern: vec![0], ..Default::default() };
        assert!(cfg.is_rendezvous_index(0));
        assert!(!cfg.is_rendezvous_index(1));
    }
}

#[cfg(test)]
mod lawnmower {
    use super::*;

    fn spec() -> LawnmowerSpec {
        LawnmowerSpec::default()
    }

    #[test]
    fn rejects_degenerate_specs() {
        assert_eq!(
            plan_lawnmower(&LawnmowerSpec { num_agents: 0, ..spec() }).unwrap_err(),
            PlanError::NoAgents
        );
        assert!(matches!(
            plan_lawnmower(&LawnmowerSpec { swath: 0.0, ..spec() }),
            Err(PlanError::BadSwath(_))
        ));
        assert!(matches!(
            plan_lawnmower(&LawnmowerSpec { speed: -1.0, ..spec() }),
            Err(PlanError::BadSpeed(_))
        ));
        assert!(matches!(
            plan_lawnmower(&LawnmowerSpec { rect_height: 0.0, ..spec() }),
            Err(PlanError::BadArea(..))
        ));
    }

    #[test]
    fn one_path_per_agent() {
        let paths = plan_lawnmower(&LawnmowerSpec { num_agents: 3, ..spec() }).unwrap();
        assert_eq!(paths.len(), 3);
        assert!(paths.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn times_are_non_decreasing_and_start_at_zero() {
        for path in plan_lawnmower(&spec()).unwrap() {
            assert_eq!(path.wps[0].time, 0.0);
            for w in path.wps.windows(2) {
                assert!(w[0].time <= w[1].time);
            }
        }
    }

    #[test]
    fn lanes_come_in_first_middle_last_triples() {
        for path in plan_lawnmower(&spec()).unwrap() {
            assert_eq!(path.wps.len() % 3, 0);
            for lane in path.wps.chunks(3) {
                assert_eq!(lane[0].position_in_line, LinePosition::First);
                assert_eq!(lane[1].position_in_line, LinePosition::Middle);
                assert_eq!(lane[2].position_in_line, LinePosition::Last);
            }
        }
    }

    #[test]
    fn pattern_indices_cycle_over_lane_pairs() {
        for path in plan_lawnmower(&spec()).unwrap() {
            for (k, lane) in path.wps.chunks(3).enumerate() {
                let base = (k % 2) * 3;
                assert_eq!(lane[0].idx_in_pattern, base);
                assert_eq!(lane[1].idx_in_pattern, base + 1);
                assert_eq!(lane[2].idx_in_pattern, base + 2);
            }
        }
    }

    #[test]
    fn rendezvous_eligible_waypoints_sit_on_band_boundaries_or_lane_ends() {
        // The default config's eligible set {1, 3, 5} must line up with the
        // generator's meet/align/last placement.
        let cfg = MissionConfig::default();
        for path in plan_lawnmower(&spec()).unwrap() {
            for wp in &path.wps {
                if wp.position_in_line == LinePosition::Last && wp.idx_in_pattern == 5 {
                    assert!(cfg.is_rendezvous_index(wp.idx_in_pattern));
                }
            }
        }
    }

    #[test]
    fn serpentine_alternates_direction() {
        let paths = plan_lawnmower(&spec()).unwrap();
        for path in paths {
            for (k, lane) in path.wps.chunks(3).enumerate() {
                let dx = lane[2].pose.x - lane[0].pose.x;
                if k % 2 == 0 {
                    assert!(dx > 0.0, "even lanes must run +x");
                } else {
                    assert!(dx < 0.0, "odd lanes must run -x");
                }
            }
        }
    }

    #[test]
    fn bands_partition_the_rectangle() {
        let s = LawnmowerSpec { num_agents: 2, overlap_between_lanes: 0.0, ..spec() };
        let paths = plan_lawnmower(&s).unwrap();
        // Agent 0 stays in [0, 100], agent 1 in [100, 200].
        for wp in &paths[0].wps {
            assert!(wp.pose.x <= 100.0 + 1e-9);
        }
        for wp in &paths[1].wps {
            assert!(wp.pose.x >= 100.0 - 1e-9);
        }
    }

    #[test]
    fn lanes_stay_inside_the_survey_height() {
        let paths = plan_lawnmower(&spec()).unwrap();
        for path in paths {
            for wp in &path.wps {
                assert!(wp.pose.y >= 0.0 && wp.pose.y <= 400.0);
            }
        }
    }
}
