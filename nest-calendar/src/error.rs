use thiserror::Error;

/// Errors produced by calendar computations and encodings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("ambiguous encoding: {0}")]
    AmbiguousEncoding(String),
}

impl CalendarError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn ambiguous(msg: impl Into<String>) -> Self {
        Self::AmbiguousEncoding(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;
