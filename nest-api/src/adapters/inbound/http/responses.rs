//! HTTP response types for planner endpoints.
//!
//! These types serialize to the JSON format expected by the frontend.

use nest_calendar::{
    format_date_string, schedule::split_timestamp, GridCell, MonthGrid, MonthPosition,
};
use serde::Serialize;
use time::{OffsetDateTime, UtcOffset};

use crate::domain::models::{AgendaDay, MonthAgenda, Task};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    /// Scheduled moment (ISO 8601).
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// Scheduled day as `weekday/day/month/year`.
    pub date_string: String,
}

impl TaskResponse {
    pub fn from_task(task: Task, offset: UtcOffset) -> Self {
        let (day, _) = split_timestamp(task.scheduled_at, offset);
        Self {
            id: task.id.as_i64(),
            title: task.title,
            description: task.description,
            is_completed: task.is_completed,
            date: task.scheduled_at,
            date_string: format_date_string(&day),
        }
    }
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self::from_task(task, UtcOffset::UTC)
    }
}

/// A single grid cell.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayResponse {
    pub day: u8,
    /// Zero-based month.
    pub month: u8,
    pub year: i32,
    /// 0 = Sunday.
    pub weekday: u8,
    pub position: MonthPosition,
    pub date_string: String,
}

impl From<&GridCell> for DayResponse {
    fn from(cell: &GridCell) -> Self {
        Self {
            day: cell.date.day(),
            month: cell.date.month(),
            year: cell.date.year(),
            weekday: cell.weekday.index(),
            position: cell.position,
            date_string: format_date_string(&cell.date),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGridResponse {
    pub month: u8,
    pub year: i32,
    pub weeks: Vec<Vec<DayResponse>>,
}

impl From<&MonthGrid> for MonthGridResponse {
    fn from(grid: &MonthGrid) -> Self {
        Self {
            month: grid.month(),
            year: grid.year(),
            weeks: grid
                .weeks()
                .map(|week| week.iter().map(DayResponse::from).collect())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaDayResponse {
    #[serde(flatten)]
    pub day: DayResponse,
    pub tasks: Vec<TaskResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthAgendaResponse {
    pub month: u8,
    pub year: i32,
    pub open_tasks: usize,
    pub days: Vec<AgendaDayResponse>,
}

impl MonthAgendaResponse {
    pub fn from_agenda(agenda: MonthAgenda, offset: UtcOffset) -> Self {
        let open_tasks = agenda.open_task_count();
        Self {
            month: agenda.month,
            year: agenda.year,
            open_tasks,
            days: agenda
                .days
                .into_iter()
                .map(|AgendaDay { cell, tasks }| AgendaDayResponse {
                    day: DayResponse::from(&cell),
                    tasks: tasks
                        .into_iter()
                        .map(|task| TaskResponse::from_task(task, offset))
                        .collect(),
                })
                .collect(),
        }
    }
}
