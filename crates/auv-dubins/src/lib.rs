//! `auv-dubins` — shortest curvature-constrained paths between oriented poses.
//!
//! A Dubins path is the shortest path between two poses for a vehicle that
//! can only go straight or turn at a minimum radius.  Every such path is one
//! of six "words" — three segments each of which is a left arc, a right arc,
//! or a straight: LSL, RSR, LSR, RSL, RLR, LRL.  [`shortest_path`] solves
//! all six and keeps the shortest feasible one; [`DubinsPath::sample`]
//! yields poses at a fixed arc-length step for a waypoint follower to chase.
//!
//! The word solutions are the standard closed forms over the normalized
//! triple `(α, β, d)` (headings relative to the start→goal bearing, distance
//! in turn-radius units).

pub mod path;


pub use path::{DubinsError, DubinsPath, DubinsResult, PathWord, shortest_path};
