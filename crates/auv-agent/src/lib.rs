//! `auv-agent` — the coordination and estimation core.
//!
//! One [`Agent`] couples two vehicles — the **truth** vehicle that physics
//! acts on and the **belief** vehicle the agent plans with — plus the pose
//! graph that reconciles them.  Each tick the mission runner calls
//! [`Agent::update`] (mission sync, path following, motion, drift) on every
//! agent, then [`Agent::communicate`] (proximity exchange, rendezvous
//! marking, transition-gated correction) on every mobile agent.
//!
//! | Module    | Contents                                        |
//! |-----------|-------------------------------------------------|
//! | [`agent`] | `Agent`, `Role`, the two phase methods          |
//! | [`peers`] | `Peers` — split-slice view of the rest of the fleet |
//! | [`logs`]  | time-series and viz records the agent accumulates |

pub mod agent;
pub mod logs;
pub mod peers;


pub use agent::{Agent, Role};
pub use logs::{AgentLog, Connectivity, CountSample, Sample, VizLog, WaypointArrival};
pub use peers::Peers;
