//! Unit tests for the vehicle model.

use auv_core::AgentId;

use crate::{Auv, AuvConfig, Control, Drift, TurnDirection};

fn test_auv(speed: f64) -> Auv {
    Auv::new(
        AgentId(0),
        0.0,
        0.0,
        0.0,
        AuvConfig {
            forward_speed: speed,
            target_threshold: 2.0,
            max_turn_rate_deg: 45.0,
        },
    )
}

#[cfg(test)]
mod steering {
    use super::*;

    #[test]
    fn no_target_holds_station() {
        let auv = test_auv(1.5);
        assert_eq!(auv.steer(0.1), Control::HOLD);
    }

    #[test]
    fn target_within_threshold_holds_station() {
        let mut auv = test_auv(1.5);
        auv.set_target(1.0, 0.0); // 1 m away, threshold 2 m
        assert_eq!(auv.steer(0.1), Control::HOLD);
    }

    #[test]
    fn steers_left_toward_target_above() {
        let mut auv = test_auv(1.5);
        auv.set_target(0.0, 100.0);
        let ctrl = auv.steer(0.1);
        assert_eq!(ctrl.direction, TurnDirection::Left);
        assert!(ctrl.turn > 0.0);
        assert!((ctrl.forward - 0.15).abs() < 1e-12);
    }

    #[test]
    fn turn_is_rate_clamped() {
        let mut auv = test_auv(1.5);
        auv.set_target(-100.0, 0.0); // π radians of error
        let ctrl = auv.steer(0.1);
        // 45 deg/s × 0.1 s
        assert!((ctrl.turn - 45.0_f64.to_radians() * 0.1).abs() < 1e-12);
    }

    #[test]
    fn small_error_not_overclamped() {
        let mut auv = test_auv(1.5);
        auv.set_target(100.0, 0.1); // tiny heading error
        let ctrl = auv.steer(0.1);
        assert!(ctrl.turn < 45.0_f64.to_radians() * 0.1);
    }
}

#[cfg(test)]
mod integration {
    use super::*;

    #[test]
    fn straight_motion_advances_along_heading() {
        let mut auv = test_auv(1.5);
        auv.update(
            0.1,
            Control { direction: TurnDirection::Straight, turn: 0.0, forward: 0.15 },
            Drift::NONE,
            false,
        );
        let (x, y) = auv.position();
        assert!((x - 0.15).abs() < 1e-12);
        assert!(y.abs() < 1e-12);
        assert!((auv.last_moved_distance() - 0.15).abs() < 1e-12);
        assert!((auv.total_distance_traveled() - 0.15).abs() < 1e-12);
    }

    #[test]
    fn same_control_gives_identical_motion() {
        let mut a = test_auv(1.5);
        let mut b = test_auv(1.5);
        a.set_target(50.0, 30.0);
        for _ in 0..200 {
            let ctrl = a.steer(0.1);
            a.update(0.1, ctrl, Drift::NONE, false);
            b.update(0.1, ctrl, Drift::NONE, false);
        }
        assert_eq!(a.pose(), b.pose());
    }

    #[test]
    fn drift_displaces_without_counting_as_travel() {
        let mut auv = test_auv(1.5);
        auv.update(
            0.1,
            Control::HOLD,
            Drift { x: 1.0, y: -2.0, heading: 0.0 },
            false,
        );
        let (x, y) = auv.position();
        assert!((x - 1.0).abs() < 1e-12);
        assert!((y + 2.0).abs() < 1e-12);
        assert_eq!(auv.last_moved_distance(), 0.0);
        assert_eq!(auv.total_distance_traveled(), 0.0);
    }

    #[test]
    fn zero_speed_platform_never_moves_forward() {
        let mut platform = test_auv(0.0);
        // Feed it a control produced by a moving vehicle.
        platform.update(
            0.1,
            Control { direction: TurnDirection::Left, turn: 0.05, forward: 0.15 },
            Drift::NONE,
            false,
        );
        assert_eq!(platform.position(), (0.0, 0.0));
        assert_eq!(platform.total_distance_traveled(), 0.0);
    }

    #[test]
    fn foreign_control_is_reclamped() {
        let mut auv = test_auv(1.5);
        // Turn far beyond this vehicle's 45 deg/s envelope.
        auv.update(
            0.1,
            Control { direction: TurnDirection::Left, turn: 10.0, forward: 0.15 },
            Drift::NONE,
            false,
        );
        assert!((auv.heading() - 45.0_f64.to_radians() * 0.1).abs() < 1e-12);
    }

    #[test]
    fn trace_grows_per_update() {
        let mut auv = test_auv(1.5);
        assert_eq!(auv.pose_trace().len(), 1);
        for _ in 0..5 {
            auv.update(0.1, Control::HOLD, Drift::NONE, false);
        }
        assert_eq!(auv.pose_trace().len(), 6);
        assert_eq!(auv.covered_segments().len(), 5);
    }
}

#[cfg(test)]
mod coverage {
    use super::*;
    use geo::Area;

    #[test]
    fn straight_covered_run_yields_swath_rectangle() {
        let mut auv = test_auv(1.0);
        // 10 straight covered meters.
        for _ in 0..100 {
            auv.update(
                0.1,
                Control { direction: TurnDirection::Straight, turn: 0.0, forward: 0.1 },
                Drift::NONE,
                true,
            );
        }
        let polys = auv.coverage_polygons(4.0, 0.0);
        assert_eq!(polys.len(), 1);
        let area = polys[0].unsigned_area();
        // 10 m × 4 m swath
        assert!((area - 40.0).abs() < 0.5, "got {area}");
    }

    #[test]
    fn beam_radius_extends_the_strip() {
        let mut auv = test_auv(1.0);
        for _ in 0..100 {
            auv.update(
                0.1,
                Control { direction: TurnDirection::Straight, turn: 0.0, forward: 0.1 },
                Drift::NONE,
                true,
            );
        }
        let bare = auv.coverage_polygons(4.0, 0.0)[0].unsigned_area();
        let extended = auv.coverage_polygons(4.0, 1.5)[0].unsigned_area();
        // 2 × 1.5 m × 4 m of extra strip
        assert!((extended - bare - 12.0).abs() < 0.5);
    }

    #[test]
    fn uncovered_motion_yields_no_polygons() {
        let mut auv = test_auv(1.0);
        for _ in 0..50 {
            auv.update(
                0.1,
                Control { direction: TurnDirection::Straight, turn: 0.0, forward: 0.1 },
                Drift::NONE,
                false,
            );
        }
        assert!(auv.coverage_polygons(4.0, 1.5).is_empty());
    }

    #[test]
    fn interleaved_runs_yield_separate_polygons() {
        let mut auv = test_auv(1.0);
        for phase in 0..4 {
            let cover = phase % 2 == 0;
            for _ in 0..20 {
                auv.update(
                    0.1,
                    Control { direction: TurnDirection::Straight, turn: 0.0, forward: 0.1 },
                    Drift::NONE,
                    cover,
                );
            }
        }
        assert_eq!(auv.coverage_polygons(4.0, 0.0).len(), 2);
    }
}
