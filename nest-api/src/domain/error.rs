use nest_calendar::CalendarError;
use thiserror::Error;

use super::models::TaskId;

/// Errors that can occur during planner operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    AmbiguousEncoding(String),
    #[error("task title must not be empty")]
    EmptyTitle,
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    #[error("a task is already scheduled at {0}")]
    DuplicateTask(TaskId),
    #[error("{0}")]
    Unknown(String),
}

impl PlannerError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::Unknown(msg.into())
    }
}

impl From<CalendarError> for PlannerError {
    fn from(err: CalendarError) -> Self {
        match err {
            CalendarError::InvalidArgument(msg) => Self::InvalidArgument(msg),
            CalendarError::AmbiguousEncoding(msg) => Self::AmbiguousEncoding(msg),
        }
    }
}
