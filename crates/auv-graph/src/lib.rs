//! `auv-graph` — the drift-correction estimator.
//!
//! Every agent owns one [`PoseGraph`] accumulating its odometry chain plus
//! relative measurement edges to peers it has met.  Graphs merge fragments
//! of each other opportunistically when vehicles come into range, and an
//! iterative relaxation pass ([`PoseGraph::optimize`]) produces a corrected
//! tip pose on demand.
//!
//! # Identity without a shared counter
//!
//! Vertex and edge keys are `(owner, sequence)` pairs, so ids are globally
//! unique even though each graph mints its own sequences independently.
//! Merging is therefore pure set union with no id translation and no shared
//! mutable id store between agents.
//!
//! | Module       | Contents                                  |
//! |--------------|-------------------------------------------|
//! | [`keys`]     | `VertexKey`, `EdgeKey`                    |
//! | [`graph`]    | `PoseGraph`, `Vertex`, `Edge`, `EdgeKind` |
//! | [`optimize`] | weighted Gauss–Seidel relaxation          |

pub mod graph;
pub mod keys;
pub mod optimize;

#[cfg(test)]
mod tests;

pub use graph::{Edge, EdgeKind, PoseGraph, Vertex};
pub use keys::{EdgeKey, VertexKey};
