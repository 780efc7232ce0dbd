//! `auv-kinematics` — the vehicle model for the `auv_swarm` simulation.
//!
//! One [`Auv`] is a point vehicle with a heading, a forward speed, and a
//! bounded turn rate.  The same type serves three roles:
//!
//! - the **truth** vehicle of a mobile agent (receives injected drift),
//! - the **belief** vehicle of a mobile agent (never sees drift),
//! - a stationary **landmark** platform (forward speed 0, never moves).
//!
//! # Control split
//!
//! [`Auv::steer`] computes a [`Control`] from the stored target without
//! moving anything; [`Auv::update`] integrates a control.  The agent layer
//! steers the belief vehicle once and applies the *same* control to both
//! vehicles, so belief and truth stay bit-identical until drift or heading
//! noise is injected.
//!
//! | Module       | Contents                                      |
//! |--------------|-----------------------------------------------|
//! | [`vehicle`]  | `Auv`, `AuvConfig`, `Control`, `Drift`        |
//! | [`coverage`] | covered-trace → `geo` polygon extraction      |

pub mod coverage;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use coverage::coverage_polygons;
pub use vehicle::{Auv, AuvConfig, Control, Drift, TurnDirection};
