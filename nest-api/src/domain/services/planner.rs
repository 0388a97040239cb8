use std::sync::Arc;

use async_trait::async_trait;
use nest_calendar::{
    build_month_grid_with,
    schedule::{join_timestamp, split_timestamp},
    to_task_identity, CalendarTime, GridLayout,
};
use time::{OffsetDateTime, UtcOffset};
use tracing::instrument;

use crate::domain::{
    models::{MonthAgenda, NewTask, Task, TaskId, TaskUpdate},
    ports::{inbound::PlannerService, outbound::TaskStore},
    PlannerError,
};

/// Calendar settings the planner applies to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerOptions {
    pub grid_layout: GridLayout,
    /// Offset in which task timestamps are turned into calendar days.
    pub utc_offset: UtcOffset,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            grid_layout: GridLayout::Balanced,
            utc_offset: UtcOffset::UTC,
        }
    }
}

/// Implementation of the PlannerService inbound port.
pub struct PlannerServiceImpl<S> {
    store: Arc<S>,
    options: PlannerOptions,
}

impl<S> PlannerServiceImpl<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_options(store, PlannerOptions::default())
    }

    pub fn with_options(store: Arc<S>, options: PlannerOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    fn task_id_for(&self, scheduled_at: OffsetDateTime) -> Result<TaskId, PlannerError> {
        let (date, time) = split_timestamp(scheduled_at, self.options.utc_offset);
        Ok(TaskId::new(to_task_identity(&date, &time)?))
    }
}

fn normalize_title(title: &str) -> Result<String, PlannerError> {
    let title = title.trim();
    if title.is_empty() {
        tracing::warn!("rejected task with empty title");
        return Err(PlannerError::EmptyTitle);
    }
    Ok(title.to_string())
}

fn normalize_description(description: Option<&String>) -> Option<String> {
    description
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl<S: TaskStore> PlannerService for PlannerServiceImpl<S> {
    #[instrument(name = "PlannerService::schedule_task", skip(self, task), fields(title = %task.title))]
    async fn schedule_task(&self, task: &NewTask) -> Result<Task, PlannerError> {
        let created = Task {
            id: self.task_id_for(task.scheduled_at)?,
            title: normalize_title(&task.title)?,
            description: normalize_description(task.description.as_ref()),
            is_completed: task.is_completed,
            scheduled_at: task.scheduled_at,
        };

        self.store.create(&created).await?;
        tracing::debug!(id = %created.id, "scheduled task");

        Ok(created)
    }

    async fn get_task(&self, id: &TaskId) -> Result<Task, PlannerError> {
        self.store
            .get(id)
            .await?
            .ok_or(PlannerError::TaskNotFound(*id))
    }

    #[instrument(name = "PlannerService::update_task", skip(self, update), fields(id = %id))]
    async fn update_task(&self, id: &TaskId, update: &TaskUpdate) -> Result<Task, PlannerError> {
        let mut task = self.get_task(id).await?;
        if update.is_empty() {
            return Ok(task);
        }

        if let Some(title) = &update.title {
            task.title = normalize_title(title)?;
        }
        if let Some(description) = &update.description {
            task.description = normalize_description(description.as_ref());
        }
        if let Some(is_completed) = update.is_completed {
            task.is_completed = is_completed;
        }
        if let Some(scheduled_at) = update.scheduled_at {
            task.scheduled_at = scheduled_at;
            task.id = self.task_id_for(scheduled_at)?;
        }

        self.store.update(id, &task).await?;
        if task.id != *id {
            tracing::debug!(new_id = %task.id, "rescheduled task");
        }

        Ok(task)
    }

    async fn set_completed(&self, id: &TaskId, is_completed: bool) -> Result<Task, PlannerError> {
        let update = TaskUpdate {
            is_completed: Some(is_completed),
            ..TaskUpdate::default()
        };
        self.update_task(id, &update).await
    }

    #[instrument(name = "PlannerService::delete_task", skip(self), fields(id = %id))]
    async fn delete_task(&self, id: &TaskId) -> Result<(), PlannerError> {
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(PlannerError::TaskNotFound(*id))
        }
    }

    #[instrument(name = "PlannerService::month_agenda", skip(self))]
    async fn month_agenda(&self, month: u8, year: i32) -> Result<MonthAgenda, PlannerError> {
        let offset = self.options.utc_offset;
        let grid = build_month_grid_with(month, year, self.options.grid_layout)?;

        let from = join_timestamp(&grid.first_date(), &CalendarTime::MIDNIGHT, offset)?;
        let to = join_timestamp(&grid.last_date().succ()?, &CalendarTime::MIDNIGHT, offset)?;
        let tasks = self.store.list_between(&from, &to).await?;

        Ok(MonthAgenda::assemble(&grid, tasks, |task| {
            split_timestamp(task.scheduled_at, offset).0
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::InMemoryTaskStore;
    use nest_calendar::{CalendarDate, MonthPosition};
    use time::macros::{datetime, offset};

    fn service() -> PlannerServiceImpl<InMemoryTaskStore> {
        PlannerServiceImpl::new(Arc::new(InMemoryTaskStore::new()))
    }

    #[tokio::test]
    async fn schedule_derives_id_from_moment() {
        let service = service();
        let task = service
            .schedule_task(&NewTask::new("  Vitamins ", datetime!(2024-01-05 09:30:00 UTC)))
            .await
            .unwrap();

        assert_eq!(task.id.as_i64(), 20240105093000);
        assert_eq!(task.title, "Vitamins");
        assert!(!task.is_completed);
    }

    #[tokio::test]
    async fn schedule_uses_configured_offset_for_id() {
        let options = PlannerOptions {
            utc_offset: offset!(+2),
            ..PlannerOptions::default()
        };
        let service = PlannerServiceImpl::with_options(Arc::new(InMemoryTaskStore::new()), options);
        let task = service
            .schedule_task(&NewTask::new("Walk", datetime!(2024-01-05 23:30:00 UTC)))
            .await
            .unwrap();

        assert_eq!(task.id.as_i64(), 20240106013000);
    }

    #[tokio::test]
    async fn schedule_rejects_blank_title() {
        let err = service()
            .schedule_task(&NewTask::new("   ", datetime!(2024-01-05 09:30:00 UTC)))
            .await
            .unwrap_err();
        assert_eq!(err, PlannerError::EmptyTitle);
    }

    #[tokio::test]
    async fn schedule_rejects_same_moment_twice() {
        let service = service();
        let at = datetime!(2024-01-05 09:30:00 UTC);
        let first = service.schedule_task(&NewTask::new("A", at)).await.unwrap();
        let err = service
            .schedule_task(&NewTask::new("B", at))
            .await
            .unwrap_err();
        assert_eq!(err, PlannerError::DuplicateTask(first.id));
    }

    #[tokio::test]
    async fn blank_description_is_dropped() {
        let task = service()
            .schedule_task(
                &NewTask::new("Checkup", datetime!(2024-03-01 10:00:00 UTC)).with_description(" "),
            )
            .await
            .unwrap();
        assert_eq!(task.description, None);
    }

    #[tokio::test]
    async fn reschedule_rekeys_task() {
        let service = service();
        let task = service
            .schedule_task(&NewTask::new("Nap", datetime!(2024-01-05 13:00:00 UTC)))
            .await
            .unwrap();

        let update = TaskUpdate {
            scheduled_at: Some(datetime!(2024-01-06 13:00:00 UTC)),
            description: Some(Some("after lunch".to_string())),
            ..TaskUpdate::default()
        };
        let moved = service.update_task(&task.id, &update).await.unwrap();

        assert_eq!(moved.id.as_i64(), 20240106130000);
        assert_eq!(moved.description.as_deref(), Some("after lunch"));
        assert_eq!(
            service.get_task(&task.id).await.unwrap_err(),
            PlannerError::TaskNotFound(task.id)
        );
        assert_eq!(service.get_task(&moved.id).await.unwrap(), moved);
    }

    #[tokio::test]
    async fn set_completed_toggles_flag() {
        let service = service();
        let task = service
            .schedule_task(&NewTask::new("Pump", datetime!(2024-01-05 06:00:00 UTC)))
            .await
            .unwrap();

        let done = service.set_completed(&task.id, true).await.unwrap();
        assert!(done.is_completed);
        assert_eq!(done.id, task.id);

        let reopened = service.set_completed(&task.id, false).await.unwrap();
        assert!(!reopened.is_completed);
    }

    #[tokio::test]
    async fn delete_missing_task_is_not_found() {
        let service = service();
        let task = service
            .schedule_task(&NewTask::new("Bath", datetime!(2024-01-05 19:00:00 UTC)))
            .await
            .unwrap();

        service.delete_task(&task.id).await.unwrap();
        assert_eq!(
            service.delete_task(&task.id).await.unwrap_err(),
            PlannerError::TaskNotFound(task.id)
        );
    }

    #[tokio::test]
    async fn month_agenda_attaches_tasks_to_cells() {
        let service = service();
        for (title, at) in [
            ("before grid", datetime!(2023-12-23 12:00:00 UTC)),
            ("leading", datetime!(2023-12-24 08:00:00 UTC)),
            ("first", datetime!(2024-01-01 08:00:00 UTC)),
            ("first later", datetime!(2024-01-01 20:00:00 UTC)),
            ("trailing", datetime!(2024-02-03 23:59:59 UTC)),
            ("after grid", datetime!(2024-02-04 00:00:00 UTC)),
        ] {
            service.schedule_task(&NewTask::new(title, at)).await.unwrap();
        }

        let agenda = service.month_agenda(0, 2024).await.unwrap();
        assert_eq!(agenda.days.len(), 42);
        assert_eq!(agenda.task_count(), 4);

        let first = &agenda.days[8];
        assert_eq!(first.cell.date, CalendarDate::new(1, 0, 2024).unwrap());
        let titles: Vec<_> = first.tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "first later"]);

        assert_eq!(agenda.days[0].cell.position, MonthPosition::Previous);
        assert_eq!(agenda.days[0].tasks.len(), 1);
        assert_eq!(agenda.days[41].cell.position, MonthPosition::Next);
        assert_eq!(agenda.days[41].tasks.len(), 1);
    }

    #[tokio::test]
    async fn month_agenda_rejects_invalid_month() {
        assert!(matches!(
            service().month_agenda(12, 2024).await,
            Err(PlannerError::InvalidArgument(_))
        ));
    }
}
