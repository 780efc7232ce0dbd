//! Runner construction errors.

use auv_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("mission plan schedules no agents")]
    EmptyPlan,

    #[error("agent {0} has an empty path and no launch pose")]
    MissingInitialPose(AgentId),

    #[error("dt must be positive, got {0}")]
    BadTimestep(f64),
}

pub type SimResult<T> = Result<T, SimError>;
