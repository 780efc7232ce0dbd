//! Plan construction errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("at least one agent is required")]
    NoAgents,

    #[error("swath must be positive, got {0}")]
    BadSwath(f64),

    #[error("speed must be positive, got {0}")]
    BadSpeed(f64),

    #[error("survey rectangle must have positive area, got {0} x {1}")]
    BadArea(f64, f64),
}

pub type PlanResult<T> = Result<T, PlanError>;
