use serde::Serialize;
use std::fmt;

use crate::domain::PlannerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidArgument,
    AmbiguousEncoding,
    NotFound,
    Conflict,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: ErrorCode,
}

/// A planner failure translated for the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: u16, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: message.into(),
                code,
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, ErrorCode::InvalidArgument, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, ErrorCode::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(409, ErrorCode::Conflict, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(500, ErrorCode::Internal, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.body.error)
    }
}

impl From<PlannerError> for ApiError {
    fn from(err: PlannerError) -> Self {
        match &err {
            PlannerError::InvalidArgument(_) | PlannerError::EmptyTitle => {
                Self::bad_request(err.to_string())
            }
            PlannerError::AmbiguousEncoding(_) => {
                Self::new(422, ErrorCode::AmbiguousEncoding, err.to_string())
            }
            PlannerError::TaskNotFound(_) => Self::not_found(err.to_string()),
            PlannerError::DuplicateTask(_) => Self::conflict(err.to_string()),
            PlannerError::Unknown(msg) => {
                tracing::error!("planner failure: {}", msg);
                Self::internal("internal error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invalid_date_becomes_bad_request() {
        let err = ApiError::from(PlannerError::invalid("could not parse task date: soon"));
        assert_eq!(err.status, 400);
        assert_eq!(
            serde_json::to_value(&err.body).unwrap(),
            json!({"error": "could not parse task date: soon", "code": "INVALID_ARGUMENT"})
        );
    }

    #[test]
    fn empty_title_has_readable_message() {
        let err = ApiError::from(PlannerError::EmptyTitle);
        assert_eq!(err.status, 400);
        assert_eq!(err.body.error, "task title must not be empty");
    }

    #[test]
    fn unknown_errors_are_not_leaked() {
        let err = ApiError::from(PlannerError::unknown("lock poisoned"));
        assert_eq!(err.status, 500);
        assert_eq!(err.body.error, "internal error");
        assert_eq!(err.body.code, ErrorCode::Internal);
    }

    #[test]
    fn ambiguous_encoding_is_unprocessable() {
        let err = ApiError::from(PlannerError::AmbiguousEncoding("year 12000".to_string()));
        assert_eq!(err.status, 422);
        assert_eq!(err.body.code, ErrorCode::AmbiguousEncoding);
    }
}
