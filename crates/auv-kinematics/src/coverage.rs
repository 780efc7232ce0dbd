//! Coverage-swath polygon extraction from a vehicle trace.
//!
//! Each maximal run of covered trace segments becomes one quad-strip
//! polygon: at every pose in the run, a left and a right offset point are
//! placed `swath / 2` meters perpendicular to the heading; the exterior ring
//! walks the left side forward and the right side back.  Run ends are
//! extended by the sonar beam radius so adjacent lanes overlap the way the
//! physical footprint does.

use auv_core::Pose;
use geo::{Coord, LineString, Polygon};

use std::f64::consts::FRAC_PI_2;

/// Extract one polygon per maximal covered run.
///
/// `covered[k]` flags the segment `trace[k] → trace[k + 1]`.  Runs with no
/// extent (a single repeated point) are skipped.
pub fn coverage_polygons(
    trace: &[Pose],
    covered: &[bool],
    swath: f64,
    beam_radius: f64,
) -> Vec<Polygon<f64>> {
    debug_assert!(trace.len() == covered.len() + 1, "one flag per trace segment");
    let mut polys = Vec::new();
    let mut run_start: Option<usize> = None;

    for k in 0..=covered.len() {
        let on = k < covered.len() && covered[k];
        match (run_start, on) {
            (None, true) => run_start = Some(k),
            (Some(start), false) => {
                // segments start..k → trace points start..=k
                if let Some(poly) = strip_polygon(&trace[start..=k], swath, beam_radius) {
                    polys.push(poly);
                }
                run_start = None;
            }
            _ => {}
        }
    }

    polys
}

/// Build the quad-strip polygon for one run of poses.
///
/// Returns `None` for degenerate runs (fewer than two points, or zero
/// total extent).
fn strip_polygon(run: &[Pose], swath: f64, beam_radius: f64) -> Option<Polygon<f64>> {
    if run.len() < 2 || swath <= 0.0 {
        return None;
    }
    let extent: f64 = run.windows(2).map(|w| w[0].distance_to(&w[1])).sum();
    if extent <= f64::EPSILON {
        return None;
    }

    let half = swath / 2.0;
    let mut left: Vec<Coord<f64>> = Vec::with_capacity(run.len() + 2);
    let mut right: Vec<Coord<f64>> = Vec::with_capacity(run.len() + 2);

    // Beam-radius lead-in before the first pose.
    let first = extended(run[0], -beam_radius);
    let last = extended(run[run.len() - 1], beam_radius);

    for pose in std::iter::once(&first).chain(run.iter()).chain(std::iter::once(&last)) {
        let (lx, ly) = offset(pose, half, FRAC_PI_2);
        let (rx, ry) = offset(pose, half, -FRAC_PI_2);
        left.push(Coord { x: lx, y: ly });
        right.push(Coord { x: rx, y: ry });
    }

    // Exterior: left side forward, right side back, closed.
    let mut ring = left;
    ring.extend(right.into_iter().rev());
    ring.push(ring[0]);

    Some(Polygon::new(LineString::from(ring), vec![]))
}

#[inline]
fn offset(pose: &Pose, dist: f64, angle_off: f64) -> (f64, f64) {
    let a = pose.heading + angle_off;
    (pose.x + dist * a.cos(), pose.y + dist * a.sin())
}

#[inline]
fn extended(pose: Pose, dist: f64) -> Pose {
    let (x, y) = pose.ahead(dist);
    Pose { x, y, heading: pose.heading }
}
