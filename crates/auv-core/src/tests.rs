//! Unit tests for auv-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod pose {
    use std::f64::consts::PI;

    use crate::pose::wrap_angle;
    use crate::{Pose, PoseDelta};

    #[test]
    fn wrap_angle_range() {
        // 3π lands on the ±π boundary; either sign of π is on-range.
        assert!((wrap_angle(3.0 * PI).abs() - PI).abs() < 1e-9);
        assert!((wrap_angle(-3.0 * PI).abs() - PI).abs() < 1e-9);
        assert_eq!(wrap_angle(0.0), 0.0);
        // boundary: exactly -π wraps to +π, +π stays
        assert!((wrap_angle(PI) - PI).abs() < 1e-12);
        assert!((wrap_angle(-PI) - PI).abs() < 1e-12);
        for a in [-10.0, -4.0, -0.5, 0.7, 4.0, 10.0, 100.0] {
            let w = wrap_angle(a);
            assert!(w > -PI - 1e-12 && w <= PI + 1e-12, "{a} wrapped to {w}");
            assert!((w.sin() - a.sin()).abs() < 1e-9);
            assert!((w.cos() - a.cos()).abs() < 1e-9);
        }
    }

    #[test]
    fn construction_normalizes_heading() {
        let p = Pose::new(0.0, 0.0, 5.0 * PI / 2.0);
        assert!((p.heading - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn array_form_matches_fields() {
        let p = Pose::new(1.5, -2.0, 0.25);
        assert_eq!(p.array(), [1.5, -2.0, 0.25]);
    }

    #[test]
    fn distance_is_positional_only() {
        let a = Pose::new(0.0, 0.0, 0.0);
        let b = Pose::new(3.0, 4.0, PI);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn offset_roundtrip() {
        let a = Pose::new(1.0, 2.0, 0.3);
        let b = Pose::new(-4.0, 7.5, -1.1);
        let d = a.offset_to(&b);
        let back = d.applied_to(&a);
        assert!((back.x - b.x).abs() < 1e-12);
        assert!((back.y - b.y).abs() < 1e-12);
        assert!((back.heading - b.heading).abs() < 1e-12);
    }

    #[test]
    fn delta_invert_and_chain() {
        let d = PoseDelta { dx: 2.0, dy: -1.0, dheading: 0.4 };
        let z = d.then(&d.inverted());
        assert!(z.norm() < 1e-12);
        assert!(z.dheading.abs() < 1e-12);
    }

    #[test]
    fn ahead_follows_heading() {
        let p = Pose::new(0.0, 0.0, PI / 2.0);
        let (x, y) = p.ahead(2.0);
        assert!(x.abs() < 1e-12);
        assert!((y - 2.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod time {
    use crate::{MissionClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = MissionClock::new(0.05);
        assert_eq!(clock.elapsed_secs(), 0.0);
        for _ in 0..40 {
            clock.advance();
        }
        assert!((clock.elapsed_secs() - 2.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f64 = r1.gen_range(0.0..1.0);
            let b: f64 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.gen_range(0..u64::MAX);
        let b: u64 = r1.gen_range(0..u64::MAX);
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn symmetric_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(3));
        for _ in 0..1000 {
            let v = rng.symmetric(0.1);
            assert!((-0.1..=0.1).contains(&v));
        }
    }

    #[test]
    fn symmetric_zero_bound_is_zero() {
        let mut rng = AgentRng::new(0, AgentId(3));
        assert_eq!(rng.symmetric(0.0), 0.0);
        assert_eq!(rng.symmetric(-1.0), 0.0);
    }

    #[test]
    fn sim_rng_children_diverge() {
        let mut root = SimRng::new(9);
        let mut a = root.child(1);
        let mut b = root.child(2);
        let va: u64 = a.gen_range(0..u64::MAX);
        let vb: u64 = b.gen_range(0..u64::MAX);
        assert_ne!(va, vb);
    }
}
