//! `auv-core` — foundational types for the `auv_swarm` coverage simulation.
//!
//! This crate is a dependency of every other `auv-*` crate.  It intentionally
//! has no `auv-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `AgentId`                                         |
//! | [`pose`]    | `Pose`, `PoseDelta`, angle helpers                |
//! | [`time`]    | `Tick`, `MissionClock`                            |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (mission-level)  |
//! | [`error`]   | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod pose;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use pose::{Pose, PoseDelta, wrap_angle};
pub use rng::{AgentRng, SimRng};
pub use time::{MissionClock, Tick};
