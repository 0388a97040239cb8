//! In-memory task store.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use time::OffsetDateTime;

use crate::domain::{
    models::{Task, TaskId},
    ports::outbound::TaskStore,
    PlannerError,
};

/// Task store backed by an in-memory map.
///
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<BTreeMap<TaskId, Task>>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with tasks, replacing any with the same id.
    pub fn with_tasks(self, tasks: Vec<Task>) -> Result<Self, PlannerError> {
        {
            let mut map = self.write()?;
            for task in tasks {
                map.insert(task.id, task);
            }
        }
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<TaskId, Task>>, PlannerError> {
        self.tasks
            .read()
            .map_err(|_| PlannerError::unknown("task store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<TaskId, Task>>, PlannerError> {
        self.tasks
            .write()
            .map_err(|_| PlannerError::unknown("task store lock poisoned"))
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn create(&self, task: &Task) -> Result<(), PlannerError> {
        let mut map = self.write()?;
        if map.contains_key(&task.id) {
            return Err(PlannerError::DuplicateTask(task.id));
        }
        map.insert(task.id, task.clone());
        Ok(())
    }

    async fn get(&self, id: &TaskId) -> Result<Option<Task>, PlannerError> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn update(&self, id: &TaskId, task: &Task) -> Result<(), PlannerError> {
        let mut map = self.write()?;
        if !map.contains_key(id) {
            return Err(PlannerError::TaskNotFound(*id));
        }
        if task.id != *id && map.contains_key(&task.id) {
            return Err(PlannerError::DuplicateTask(task.id));
        }
        map.remove(id);
        map.insert(task.id, task.clone());
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> Result<bool, PlannerError> {
        Ok(self.write()?.remove(id).is_some())
    }

    async fn list_between(
        &self,
        from: &OffsetDateTime,
        to: &OffsetDateTime,
    ) -> Result<Vec<Task>, PlannerError> {
        let mut tasks: Vec<Task> = self
            .read()?
            .values()
            .filter(|task| task.scheduled_at >= *from && task.scheduled_at <= *to)
            .cloned()
            .collect();
        tasks.sort_by(|a, b| {
            a.scheduled_at
                .cmp(&b.scheduled_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(tasks)
    }
}
