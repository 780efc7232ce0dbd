//! `auv-sim` — the mission runner.
//!
//! [`MissionBuilder`] assembles the fleet from a mission plan (one agent
//! per timed path, plus optional landmark platforms and a drift field);
//! [`MissionRunner`] drives the strict two-phase tick loop — every agent's
//! `update`, then every mobile agent's `communicate`, in fixed index order
//! — until the plan completes or the schedule runs out.  After the run,
//! [`MissionStats`] aggregates coverage geometry and error series from the
//! agents' read-only state.
//!
//! | Module       | Contents                                        |
//! |--------------|-------------------------------------------------|
//! | [`builder`]  | `MissionBuilder`                                |
//! | [`runner`]   | `MissionRunner`, `RunOutcome`                   |
//! | [`observer`] | `MissionObserver`, `NoopObserver`               |
//! | [`stats`]    | `MissionStats`, `AgentSeries`                   |
//! | [`error`]    | `SimError`, `SimResult`                         |

pub mod builder;
pub mod error;
pub mod observer;
pub mod runner;
pub mod stats;


pub use builder::MissionBuilder;
pub use error::{SimError, SimResult};
pub use observer::{MissionObserver, NoopObserver};
pub use runner::{MissionRunner, RunOutcome};
pub use stats::{AgentSeries, MissionStats};
