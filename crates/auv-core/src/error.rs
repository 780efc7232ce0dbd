//! Workspace base error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or wrap it as one variant.  Simulation
//! conditions that the mission absorbs locally (exhausted waypoints, failed
//! optimizations, empty series) are *not* errors and never appear here.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `auv-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `auv-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
