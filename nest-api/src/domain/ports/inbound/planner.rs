use async_trait::async_trait;

use crate::domain::{
    models::{MonthAgenda, NewTask, Task, TaskId, TaskUpdate},
    PlannerError,
};

/// Inbound port for planner operations.
///
/// This trait defines the use cases that HTTP handlers and the CLI invoke.
/// It combines the calendar engine with the task store.
#[async_trait]
pub trait PlannerService: Send + Sync + 'static {
    /// Schedule a new task. Its id is derived from the scheduled moment.
    async fn schedule_task(&self, task: &NewTask) -> Result<Task, PlannerError>;

    /// Get a task by id.
    async fn get_task(&self, id: &TaskId) -> Result<Task, PlannerError>;

    /// Apply a partial update. Rescheduling moves the task to a new id.
    async fn update_task(&self, id: &TaskId, update: &TaskUpdate) -> Result<Task, PlannerError>;

    /// Mark a task as completed or open again.
    async fn set_completed(&self, id: &TaskId, is_completed: bool) -> Result<Task, PlannerError>;

    /// Delete a task.
    async fn delete_task(&self, id: &TaskId) -> Result<(), PlannerError>;

    /// The month grid for a zero-based `month` with tasks attached to each day.
    async fn month_agenda(&self, month: u8, year: i32) -> Result<MonthAgenda, PlannerError>;
}
