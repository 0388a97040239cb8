//! Task store port (outbound).
//!
//! Defines the interface for persisting planner tasks.

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::domain::{
    models::{Task, TaskId},
    PlannerError,
};

/// Outbound port for task persistence.
///
/// Tasks are keyed by their `TaskId`; the store does not derive ids itself.
#[async_trait]
pub trait TaskStore: Send + Sync + 'static {
    /// Persist a new task. Fails with `DuplicateTask` if the id is taken.
    async fn create(&self, task: &Task) -> Result<(), PlannerError>;

    /// Get a task by id.
    async fn get(&self, id: &TaskId) -> Result<Option<Task>, PlannerError>;

    /// Replace the task stored under `id` with `task`.
    ///
    /// `task.id` may differ from `id` when a task is rescheduled; the store
    /// moves it to the new key. Fails with `TaskNotFound` if `id` is absent.
    async fn update(&self, id: &TaskId, task: &Task) -> Result<(), PlannerError>;

    /// Delete a task. Returns whether a task was removed.
    async fn delete(&self, id: &TaskId) -> Result<bool, PlannerError>;

    /// Tasks scheduled in `[from, to]`, ordered by scheduled time.
    async fn list_between(
        &self,
        from: &OffsetDateTime,
        to: &OffsetDateTime,
    ) -> Result<Vec<Task>, PlannerError>;
}
