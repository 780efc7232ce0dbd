//! `PoseGraph` storage, measurement recording, and fragment merging.

use std::collections::{HashMap, HashSet};

use auv_core::{AgentId, Pose, PoseDelta};

use crate::keys::{EdgeKey, VertexKey};
use crate::optimize::relax;

/// Constraint weight of an odometry edge.
const ODOMETRY_WEIGHT: f64 = 1.0;
/// Constraint weight of a vehicle-to-vehicle measurement edge.
const MEASUREMENT_WEIGHT: f64 = 5.0;
/// Constraint weight of a vehicle-to-landmark measurement edge.  Landmark
/// positions are certain, so their constraints dominate the relaxation.
const LANDMARK_WEIGHT: f64 = 50.0;

// ── Elements ──────────────────────────────────────────────────────────────────

/// Kind of constraint an edge encodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    /// Dead-reckoned motion between two consecutive own poses (or a
    /// composite over a summarized chain).
    Odometry,
    /// Relative offset between two agents' tips, taken from the idealized
    /// ranging sensor.
    Measurement,
}

/// One pose estimate.
#[derive(Copy, Clone, Debug)]
pub struct Vertex {
    pub key: VertexKey,
    pub pose: Pose,
    /// `true` only for a landmark platform's construction vertex — the one
    /// kind of vertex whose pose is ground truth by definition.
    pub anchored: bool,
}

/// One constraint between two vertices.
#[derive(Copy, Clone, Debug)]
pub struct Edge {
    pub key: EdgeKey,
    pub from: VertexKey,
    pub to: VertexKey,
    /// World-frame offset from `from` to `to`.
    pub delta: PoseDelta,
    pub weight: f64,
    pub kind: EdgeKind,
}

// ── PoseGraph ─────────────────────────────────────────────────────────────────

/// One agent's accumulated pose graph.
#[derive(Clone, Debug)]
pub struct PoseGraph {
    owner: AgentId,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    /// Vertex key → index into `vertices`.
    index: HashMap<VertexKey, usize>,
    /// Keys of real (non-synthesized) edges already present.
    edge_keys: HashSet<EdgeKey>,
    /// Endpoint pairs of synthesized composite edges already present.
    composite_pairs: HashSet<(VertexKey, VertexKey)>,

    next_vertex_seq: u32,
    next_edge_seq: u32,
    /// Own latest vertex.
    tip: Option<VertexKey>,
    /// Own vertex sequence reached by the last successful optimize.
    optimized_watermark: u32,
}

impl PoseGraph {
    pub fn new(owner: AgentId) -> Self {
        Self {
            owner,
            vertices: Vec::new(),
            edges: Vec::new(),
            index: HashMap::new(),
            edge_keys: HashSet::new(),
            composite_pairs: HashSet::new(),
            next_vertex_seq: 0,
            next_edge_seq: 0,
            tip: None,
            optimized_watermark: 0,
        }
    }

    // ── Appending own state ───────────────────────────────────────────────

    /// Append one dead-reckoned pose, chaining an odometry edge from the
    /// previous own vertex.
    pub fn append_odom_pose(&mut self, pose: Pose) {
        let prev = self.tip;
        let key = self.push_own_vertex(pose, false);
        if let Some(prev) = prev {
            let prev_pose = self.vertices[self.index[&prev]].pose;
            let delta = prev_pose.offset_to(&pose);
            self.push_edge(prev, key, delta, ODOMETRY_WEIGHT, EdgeKind::Odometry);
        }
    }

    /// Append the single anchored vertex of a stationary platform.
    ///
    /// Called exactly once, at construction, before anything else.
    pub fn append_anchor_pose(&mut self, pose: Pose) {
        debug_assert!(self.vertices.is_empty(), "anchor must be the first vertex");
        self.push_own_vertex(pose, true);
    }

    // ── Inter-agent operations ────────────────────────────────────────────

    /// Record a tip-to-tip measurement against `other`.
    ///
    /// The edge carries the *true* relative offset (the ranging sensor is
    /// idealized: within range it always succeeds and reports truth,
    /// independent of either agent's belief error).  The peer's tip vertex
    /// is imported if unseen.  No-op when either graph has no tip yet.
    pub fn measure_tip_to_tip(
        &mut self,
        self_truth: &Pose,
        other_truth: &Pose,
        other: &PoseGraph,
        is_landmark: bool,
    ) {
        let Some(self_tip) = self.tip else { return };
        let Some(other_tip) = other.tip_vertex() else { return };

        self.import_vertex(other_tip);

        let delta = self_truth.offset_to(other_truth);
        let weight = if is_landmark { LANDMARK_WEIGHT } else { MEASUREMENT_WEIGHT };
        self.push_edge(self_tip, other_tip.key, delta, weight, EdgeKind::Measurement);
    }

    /// Import the part of `other`'s graph this graph has not seen yet.
    ///
    /// With `use_summary`, only significant vertices (anchors, measurement
    /// endpoints, chain ends) are imported and the skipped odometry chains
    /// are collapsed into composite edges.  Landmark fragments are always
    /// merged verbatim by the caller passing `use_summary = false`.
    ///
    /// Returns `(imported_vertices, imported_edges)`.
    pub fn fill_in_since_last_interaction(
        &mut self,
        other: &PoseGraph,
        use_summary: bool,
    ) -> (usize, usize) {
        let mut new_vertices = 0;
        let mut new_edges = 0;

        if use_summary {
            let significant: HashSet<VertexKey> = other
                .vertices
                .iter()
                .filter(|v| other.is_significant(v.key))
                .map(|v| v.key)
                .collect();

            for vertex in other.vertices.iter().filter(|v| significant.contains(&v.key)) {
                new_vertices += self.import_vertex(vertex) as usize;
            }

            // Real edges whose endpoints both survived the summary.
            for edge in &other.edges {
                if significant.contains(&edge.from) && significant.contains(&edge.to) {
                    new_edges += self.import_edge(edge) as usize;
                }
            }

            // Composite odometry edges over the skipped spans of the peer's
            // own chain.
            let chain: Vec<&Vertex> = other
                .vertices
                .iter()
                .filter(|v| v.key.owner == other.owner && significant.contains(&v.key))
                .collect();
            for pair in chain.windows(2) {
                if pair[1].key.seq == pair[0].key.seq + 1 {
                    continue; // adjacent — the real edge already covers it
                }
                new_edges += self.push_composite_edge(pair[0], pair[1]) as usize;
            }
        } else {
            for vertex in &other.vertices {
                new_vertices += self.import_vertex(vertex) as usize;
            }
            for edge in &other.edges {
                new_edges += self.import_edge(edge) as usize;
            }
        }

        (new_vertices, new_edges)
    }

    // ── Optimization ──────────────────────────────────────────────────────

    /// Relax the graph and return the corrected tip pose.
    ///
    /// Returns `None` — a failed, skippable optimization — when there is
    /// nothing to correct: no tip, no measurement constraint anywhere, or
    /// (in summary mode) no own vertex appended since the last success.
    pub fn optimize(&mut self, use_summary: bool) -> Option<Pose> {
        let tip = self.tip?;
        if !self.edges.iter().any(|e| e.kind == EdgeKind::Measurement) {
            return None;
        }
        if use_summary && self.optimized_watermark >= self.next_vertex_seq {
            return None;
        }

        // Vertices held fixed: anchors, the own gauge origin, and — in
        // summary mode — everything already settled by a previous pass.
        let free: HashSet<VertexKey> = self
            .vertices
            .iter()
            .filter(|v| {
                !v.anchored
                    && !(v.key.owner == self.owner && v.key.seq == 0)
                    && !(use_summary
                        && v.key.owner == self.owner
                        && v.key.seq < self.optimized_watermark)
            })
            .map(|v| v.key)
            .collect();
        if free.is_empty() {
            return None;
        }

        if !relax(&mut self.vertices, &self.edges, &self.index, &free) {
            return None;
        }

        self.optimized_watermark = self.next_vertex_seq;
        Some(self.vertices[self.index[&tip]].pose)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn owner(&self) -> AgentId {
        self.owner
    }

    pub fn tip_key(&self) -> Option<VertexKey> {
        self.tip
    }

    pub fn tip_vertex(&self) -> Option<&Vertex> {
        self.tip.map(|key| &self.vertices[self.index[&key]])
    }

    /// The current dead-reckoned (or last-corrected) tip pose.
    pub fn tip_pose(&self) -> Option<Pose> {
        self.tip_vertex().map(|v| v.pose)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn measurement_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.kind == EdgeKind::Measurement).count()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn push_own_vertex(&mut self, pose: Pose, anchored: bool) -> VertexKey {
        let key = VertexKey::new(self.owner, self.next_vertex_seq);
        self.next_vertex_seq += 1;
        self.index.insert(key, self.vertices.len());
        self.vertices.push(Vertex { key, pose, anchored });
        self.tip = Some(key);
        key
    }

    fn push_edge(
        &mut self,
        from: VertexKey,
        to: VertexKey,
        delta: PoseDelta,
        weight: f64,
        kind: EdgeKind,
    ) {
        let key = EdgeKey::new(self.owner, self.next_edge_seq);
        self.next_edge_seq += 1;
        self.edge_keys.insert(key);
        self.edges.push(Edge { key, from, to, delta, weight, kind });
    }

    /// Copy a foreign vertex if unseen.  Returns `true` if it was new.
    fn import_vertex(&mut self, vertex: &Vertex) -> bool {
        if self.index.contains_key(&vertex.key) {
            return false;
        }
        self.index.insert(vertex.key, self.vertices.len());
        self.vertices.push(*vertex);
        true
    }

    /// Copy a foreign edge if unseen and both endpoints are known.
    fn import_edge(&mut self, edge: &Edge) -> bool {
        if self.edge_keys.contains(&edge.key)
            || !self.index.contains_key(&edge.from)
            || !self.index.contains_key(&edge.to)
        {
            return false;
        }
        self.edge_keys.insert(edge.key);
        self.edges.push(*edge);
        true
    }

    /// Synthesize one composite odometry edge across a summarized span.
    fn push_composite_edge(&mut self, from: &Vertex, to: &Vertex) -> bool {
        let pair = (from.key, to.key);
        if self.composite_pairs.contains(&pair) {
            return false;
        }
        self.composite_pairs.insert(pair);
        let delta = from.pose.offset_to(&to.pose);
        let key = EdgeKey::new(self.owner, self.next_edge_seq);
        self.next_edge_seq += 1;
        self.edges.push(Edge {
            key,
            from: from.key,
            to: to.key,
            delta,
            weight: ODOMETRY_WEIGHT,
            kind: EdgeKind::Odometry,
        });
        true
    }

    /// Is `key` worth keeping in a summarized fragment?
    fn is_significant(&self, key: VertexKey) -> bool {
        if Some(key) == self.tip {
            return true;
        }
        match self.index.get(&key).map(|&i| &self.vertices[i]) {
            Some(v) if v.anchored => return true,
            Some(v) if v.key.seq == 0 => return true,
            _ => {}
        }
        self.edges
            .iter()
            .any(|e| e.kind == EdgeKind::Measurement && (e.from == key || e.to == key))
    }
}
