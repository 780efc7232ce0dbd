//! `auv-plan` — mission plans for coordinated coverage.
//!
//! A mission plan holds one timed waypoint sequence per mobile agent plus a
//! per-agent visit cursor.  Agents read their current waypoint, decide when
//! to advance, and mark rendezvous outcomes; the plan itself never decides
//! anything.
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`waypoint`] | `TimedWaypoint`, `TimedPath`, `LinePosition`        |
//! | [`plan`]     | `MissionPlan`, `MissionConfig`                      |
//! | [`lawnmower`]| serpentine coverage-pattern generator               |
//! | [`error`]    | `PlanError`, `PlanResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod lawnmower;
pub mod plan;
pub mod waypoint;

#[cfg(test)]
mod tests;

pub use error::{PlanError, PlanResult};
pub use lawnmower::{LawnmowerSpec, plan_lawnmower};
pub use plan::{MissionConfig, MissionPlan};
pub use waypoint::{LinePosition, TimedPath, TimedWaypoint};
