//! `auv-drift` — the unmodeled current field.
//!
//! A [`DriftField`] is a static, deterministic direction field over the
//! survey rectangle: a handful of spiral eddies with random centers and
//! spins, optional radial ripples, and a constant bias current.  Agents
//! sample it at their ground-truth position to decide which way their
//! uncorroborated dead reckoning is being pushed; the *magnitude* of the
//! drift is decided by the agent (distance moved × accumulation rate), so
//! the field only supplies direction.
//!
//! Construction consumes a [`SimRng`](auv_core::SimRng), making the whole
//! field a pure function of the mission seed.

use auv_core::SimRng;


// ── DriftSpec ─────────────────────────────────────────────────────────────────

/// Field construction parameters.
#[derive(Clone, Debug)]
pub struct DriftSpec {
    /// Number of spiral eddies scattered over the area.
    pub num_spirals: usize,
    /// Number of radial ripple cells scattered over the area.
    pub num_ripples: usize,
    /// Survey rectangle extents in meters (origin at (0, 0)).
    pub area_width: f64,
    pub area_height: f64,
    /// Constant bias current added to every sample.
    pub x_bias: f64,
    pub y_bias: f64,
    /// Influence falloff distance of each cell, in meters.
    pub scale: f64,
}

impl Default for DriftSpec {
    fn default() -> Self {
        Self {
            num_spirals: 10,
            num_ripples: 0,
            area_width: 200.0,
            area_height: 400.0,
            x_bias: 0.0,
            y_bias: 0.0,
            scale: 50.0,
        }
    }
}

// ── DriftField ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct Eddy {
    cx: f64,
    cy: f64,
    /// +1 counter-clockwise, -1 clockwise.
    spin: f64,
}

#[derive(Clone, Debug)]
struct Ripple {
    cx: f64,
    cy: f64,
    wavelength: f64,
}

/// A frozen current field.  Sampling is pure and lock-free.
#[derive(Clone, Debug)]
pub struct DriftField {
    eddies: Vec<Eddy>,
    ripples: Vec<Ripple>,
    bias: (f64, f64),
    scale: f64,
}

impl DriftField {
    /// Lay out the field using `rng` — every placement draw comes from the
    /// mission seed, so equal seeds produce equal fields.
    pub fn new(spec: &DriftSpec, rng: &mut SimRng) -> Self {
        let eddies = (0..spec.num_spirals)
            .map(|_| Eddy {
                cx: rng.gen_range(0.0..=spec.area_width),
                cy: rng.gen_range(0.0..=spec.area_height),
                spin: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
            })
            .collect();

        let ripples = (0..spec.num_ripples)
            .map(|_| Ripple {
                cx: rng.gen_range(0.0..=spec.area_width),
                cy: rng.gen_range(0.0..=spec.area_height),
                wavelength: rng.gen_range(spec.scale * 0.5..=spec.scale * 2.0),
            })
            .collect();

        Self {
            eddies,
            ripples,
            bias: (spec.x_bias, spec.y_bias),
            scale: spec.scale.max(f64::EPSILON),
        }
    }

    /// Sample the field: returns `(vx, vy, angle)` where `angle` is the
    /// drift direction in radians.  The vector is the raw field value; only
    /// the angle is consumed by the drift injection path.
    pub fn sample(&self, x: f64, y: f64) -> (f64, f64, f64) {
        let (mut vx, mut vy) = self.bias;

        for eddy in &self.eddies {
            let dx = x - eddy.cx;
            let dy = y - eddy.cy;
            let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
            // Tangential unit vector around the eddy center, damped with
            // distance in units of the falloff scale.
            let falloff = 1.0 / (1.0 + dist / self.scale);
            vx += eddy.spin * (-dy / dist) * falloff;
            vy += eddy.spin * (dx / dist) * falloff;
        }

        for ripple in &self.ripples {
            let dx = x - ripple.cx;
            let dy = y - ripple.cy;
            let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
            let radial = (std::f64::consts::TAU * dist / ripple.wavelength).sin();
            vx += radial * dx / dist;
            vy += radial * dy / dist;
        }

        let angle = if vx.abs() < 1e-12 && vy.abs() < 1e-12 {
            0.0
        } else {
            vy.atan2(vx)
        };
        (vx, vy, angle)
    }
}
