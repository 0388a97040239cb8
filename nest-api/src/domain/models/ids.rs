use nest_calendar::{CalendarError, TaskIdentity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A task identifier.
///
/// Every task is keyed by the identity of the moment it is scheduled at,
/// so the id doubles as a sortable `YYYYMMDDhhmmss` number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(TaskIdentity);

impl TaskId {
    pub fn new(identity: TaskIdentity) -> Self {
        Self(identity)
    }

    pub fn as_i64(&self) -> i64 {
        self.0.as_i64()
    }

    pub fn identity(&self) -> TaskIdentity {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TaskIdentity> for TaskId {
    fn from(identity: TaskIdentity) -> Self {
        Self(identity)
    }
}

impl TryFrom<i64> for TaskId {
    type Error = CalendarError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        TaskIdentity::try_from(id).map(Self)
    }
}

impl From<TaskId> for i64 {
    fn from(id: TaskId) -> Self {
        id.as_i64()
    }
}
