use time::OffsetDateTime;

use super::TaskId;

/// A planner task as persisted by the task store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub scheduled_at: OffsetDateTime,
}

/// Request to schedule a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: OffsetDateTime,
    pub is_completed: bool,
}

impl NewTask {
    pub fn new(title: impl Into<String>, scheduled_at: OffsetDateTime) -> Self {
        Self {
            title: title.into(),
            description: None,
            scheduled_at,
            is_completed: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }
}

/// Partial update of a task. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub scheduled_at: Option<OffsetDateTime>,
    pub is_completed: Option<bool>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.scheduled_at.is_none()
            && self.is_completed.is_none()
    }
}
