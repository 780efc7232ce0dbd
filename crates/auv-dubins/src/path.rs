//! Dubins word solutions, path representation, and sampling.

use std::f64::consts::TAU;

use auv_core::Pose;
use auv_core::pose::wrap_angle;
use thiserror::Error;

/// Errors from the path solver.
#[derive(Debug, Error, PartialEq)]
pub enum DubinsError {
    #[error("turn radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("no feasible word for this configuration")]
    NoPath,
}

pub type DubinsResult<T> = Result<T, DubinsError>;

/// Normalize an angle to `[0, 2π)` — the convention the word formulas use.
#[inline]
fn mod2pi(a: f64) -> f64 {
    let r = a % TAU;
    if r < 0.0 { r + TAU } else { r }
}

// ── Words and segments ────────────────────────────────────────────────────────

/// One of the three segment motions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Segment {
    Left,
    Straight,
    Right,
}

/// The six Dubins words.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathWord {
    Lsl,
    Rsr,
    Lsr,
    Rsl,
    Rlr,
    Lrl,
}

impl PathWord {
    const ALL: [PathWord; 6] = [
        PathWord::Lsl,
        PathWord::Rsr,
        PathWord::Lsr,
        PathWord::Rsl,
        PathWord::Rlr,
        PathWord::Lrl,
    ];

    fn segments(self) -> [Segment; 3] {
        use Segment::*;
        match self {
            PathWord::Lsl => [Left, Straight, Left],
            PathWord::Rsr => [Right, Straight, Right],
            PathWord::Lsr => [Left, Straight, Right],
            PathWord::Rsl => [Right, Straight, Left],
            PathWord::Rlr => [Right, Left, Right],
            PathWord::Lrl => [Left, Right, Left],
        }
    }

    /// Solve this word for the normalized configuration `(α, β, d)`.
    ///
    /// Returns the three segment lengths in turn-radius units, or `None`
    /// when the word is infeasible for this configuration.
    fn solve(self, alpha: f64, beta: f64, d: f64) -> Option<[f64; 3]> {
        let (sa, ca) = alpha.sin_cos();
        let (sb, cb) = beta.sin_cos();
        let cab = (alpha - beta).cos();

        match self {
            PathWord::Lsl => {
                let p_sq = 2.0 + d * d - 2.0 * cab + 2.0 * d * (sa - sb);
                if p_sq < 0.0 {
                    return None;
                }
                let tmp = (cb - ca).atan2(d + sa - sb);
                Some([mod2pi(-alpha + tmp), p_sq.sqrt(), mod2pi(beta - tmp)])
            }
            PathWord::Rsr => {
                let p_sq = 2.0 + d * d - 2.0 * cab + 2.0 * d * (sb - sa);
                if p_sq < 0.0 {
                    return None;
                }
                let tmp = (ca - cb).atan2(d - sa + sb);
                Some([mod2pi(alpha - tmp), p_sq.sqrt(), mod2pi(tmp - beta)])
            }
            PathWord::Lsr => {
                let p_sq = -2.0 + d * d + 2.0 * cab + 2.0 * d * (sa + sb);
                if p_sq < 0.0 {
                    return None;
                }
                let p = p_sq.sqrt();
                let tmp = (-ca - cb).atan2(d + sa + sb) - (-2.0_f64).atan2(p);
                Some([mod2pi(-alpha + tmp), p, mod2pi(-mod2pi(beta) + tmp)])
            }
            PathWord::Rsl => {
                let p_sq = -2.0 + d * d + 2.0 * cab - 2.0 * d * (sa + sb);
                if p_sq < 0.0 {
                    return None;
                }
                let p = p_sq.sqrt();
                let tmp = (ca + cb).atan2(d - sa - sb) - 2.0_f64.atan2(p);
                Some([mod2pi(alpha - tmp), p, mod2pi(beta - tmp)])
            }
            PathWord::Rlr => {
                let tmp = (6.0 - d * d + 2.0 * cab + 2.0 * d * (sa - sb)) / 8.0;
                if tmp.abs() > 1.0 {
                    return None;
                }
                let p = mod2pi(TAU - tmp.acos());
                let t = mod2pi(alpha - (ca - cb).atan2(d - sa + sb) + mod2pi(p / 2.0));
                Some([t, p, mod2pi(alpha - beta - t + mod2pi(p))])
            }
            PathWord::Lrl => {
                let tmp = (6.0 - d * d + 2.0 * cab + 2.0 * d * (sb - sa)) / 8.0;
                if tmp.abs() > 1.0 {
                    return None;
                }
                let p = mod2pi(TAU - tmp.acos());
                let t = mod2pi(-alpha - (ca - cb).atan2(d + sa - sb) + p / 2.0);
                Some([t, p, mod2pi(mod2pi(beta) - alpha - t + mod2pi(p))])
            }
        }
    }
}

// ── DubinsPath ────────────────────────────────────────────────────────────────

/// A solved path: start pose, winning word, and normalized segment lengths.
#[derive(Clone, Debug)]
pub struct DubinsPath {
    start: Pose,
    radius: f64,
    word: PathWord,
    /// Segment lengths in turn-radius units.
    params: [f64; 3],
}

impl DubinsPath {
    /// Total arc length in meters.
    pub fn length(&self) -> f64 {
        (self.params[0] + self.params[1] + self.params[2]) * self.radius
    }

    /// The winning word.
    pub fn word(&self) -> PathWord {
        self.word
    }

    /// Pose at arc length `s` meters from the start (clamped to the path).
    pub fn sample_at(&self, s: f64) -> Pose {
        let total: f64 = self.params.iter().sum();
        let mut remaining = (s / self.radius).clamp(0.0, total);
        let mut pose = self.start;
        for (segment, &len) in self.word.segments().iter().zip(&self.params) {
            let step = remaining.min(len);
            pose = advance(pose, *segment, step, self.radius);
            remaining -= step;
            if remaining <= 0.0 {
                break;
            }
        }
        pose
    }

    /// Poses every `step` meters along the path, ending with the goal pose.
    ///
    /// The start pose itself is not included — the follower is already there.
    pub fn sample(&self, step: f64) -> Vec<Pose> {
        debug_assert!(step > 0.0, "sample step must be positive");
        let total = self.length();
        let mut out = Vec::with_capacity((total / step) as usize + 1);
        let mut s = step;
        while s < total {
            out.push(self.sample_at(s));
            s += step;
        }
        out.push(self.sample_at(total));
        out
    }
}

/// Advance `pose` along one segment for `t` radius-units.
fn advance(pose: Pose, segment: Segment, t: f64, radius: f64) -> Pose {
    let h = pose.heading;
    match segment {
        Segment::Straight => Pose {
            x: pose.x + radius * t * h.cos(),
            y: pose.y + radius * t * h.sin(),
            heading: h,
        },
        Segment::Left => {
            let h2 = h + t;
            Pose {
                x: pose.x + radius * (h2.sin() - h.sin()),
                y: pose.y + radius * (h.cos() - h2.cos()),
                heading: wrap_angle(h2),
            }
        }
        Segment::Right => {
            let h2 = h - t;
            Pose {
                x: pose.x + radius * (h.sin() - h2.sin()),
                y: pose.y + radius * (h2.cos() - h.cos()),
                heading: wrap_angle(h2),
            }
        }
    }
}

// ── Solver ────────────────────────────────────────────────────────────────────

/// Shortest curvature-constrained path from `start` to `goal`.
pub fn shortest_path(start: Pose, goal: Pose, radius: f64) -> DubinsResult<DubinsPath> {
    if radius <= 0.0 {
        return Err(DubinsError::InvalidRadius(radius));
    }

    let dx = goal.x - start.x;
    let dy = goal.y - start.y;
    let d = (dx * dx + dy * dy).sqrt() / radius;
    let theta = if d > f64::EPSILON { mod2pi(dy.atan2(dx)) } else { 0.0 };
    let alpha = mod2pi(start.heading - theta);
    let beta = mod2pi(goal.heading - theta);

    let mut best: Option<(f64, PathWord, [f64; 3])> = None;
    for word in PathWord::ALL {
        if let Some(params) = word.solve(alpha, beta, d) {
            let len: f64 = params.iter().sum();
            if best.as_ref().is_none_or(|(b, _, _)| len < *b) {
                best = Some((len, word, params));
            }
        }
    }

    match best {
        Some((_, word, params)) => Ok(DubinsPath { start, radius, word, params }),
        None => Err(DubinsError::NoPath),
    }
}
