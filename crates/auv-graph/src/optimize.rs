//! Weighted Gauss–Seidel relaxation over graph constraints.
//!
//! Each sweep re-estimates every free vertex as the weighted mean of the
//! positions its incident edges imply from its neighbors' current poses.
//! With world-frame deltas the objective is quadratic in the positions, so
//! the sweeps converge monotonically; headings are averaged on the unit
//! circle.  The sweep order is the vertex storage order, which is
//! append-order and therefore identical across runs — the pass is fully
//! deterministic.

use std::collections::{HashMap, HashSet};

use auv_core::Pose;

use crate::graph::{Edge, Vertex};
use crate::keys::VertexKey;

/// Maximum relaxation sweeps per optimize call.
const MAX_SWEEPS: usize = 60;
/// Convergence threshold on the largest per-sweep position shift, meters.
const CONVERGENCE_EPS: f64 = 1e-4;

/// Relax `vertices` in place.  Returns `false` when the pass produced a
/// non-finite pose (treated as optimization failure by the caller).
pub(crate) fn relax(
    vertices: &mut [Vertex],
    edges: &[Edge],
    index: &HashMap<VertexKey, usize>,
    free: &HashSet<VertexKey>,
) -> bool {
    // Incidence lists: vertex index → (edge index, vertex-is-from).
    let mut incident: Vec<Vec<(usize, bool)>> = vec![Vec::new(); vertices.len()];
    for (e, edge) in edges.iter().enumerate() {
        if let Some(&i) = index.get(&edge.from) {
            incident[i].push((e, true));
        }
        if let Some(&i) = index.get(&edge.to) {
            incident[i].push((e, false));
        }
    }

    for _ in 0..MAX_SWEEPS {
        let mut max_shift: f64 = 0.0;

        for i in 0..vertices.len() {
            if !free.contains(&vertices[i].key) || incident[i].is_empty() {
                continue;
            }

            let mut weight_sum = 0.0;
            let mut x = 0.0;
            let mut y = 0.0;
            let mut hx = 0.0;
            let mut hy = 0.0;

            for &(e, is_from) in &incident[i] {
                let edge = &edges[e];
                let (neighbor_key, delta) = if is_from {
                    // v --delta--> neighbor : v = neighbor ∘ delta⁻¹
                    (edge.to, edge.delta.inverted())
                } else {
                    (edge.from, edge.delta)
                };
                let Some(&n) = index.get(&neighbor_key) else { continue };
                let estimate: Pose = delta.applied_to(&vertices[n].pose);

                weight_sum += edge.weight;
                x += edge.weight * estimate.x;
                y += edge.weight * estimate.y;
                hx += edge.weight * estimate.heading.cos();
                hy += edge.weight * estimate.heading.sin();
            }

            if weight_sum <= 0.0 {
                continue;
            }

            let new_pose = Pose::new(x / weight_sum, y / weight_sum, hy.atan2(hx));
            let shift = vertices[i].pose.distance_to(&new_pose);
            max_shift = max_shift.max(shift);
            vertices[i].pose = new_pose;
        }

        if max_shift < CONVERGENCE_EPS {
            break;
        }
    }

    vertices
        .iter()
        .all(|v| v.pose.x.is_finite() && v.pose.y.is_finite() && v.pose.heading.is_finite())
}
