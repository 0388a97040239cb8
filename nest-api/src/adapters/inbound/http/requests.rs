//! HTTP request payloads for planner endpoints.
//!
//! Payloads are validated when converted into domain requests, so handlers
//! never see a half-parsed date.

use nest_calendar::{schedule::ScheduledAt, CalendarTime};
use serde::{Deserialize, Deserializer};
use time::UtcOffset;

use crate::domain::{
    models::{NewTask, TaskUpdate},
    PlannerError,
};

/// How bare dates (no time of day) are placed on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateResolution {
    pub default_time: CalendarTime,
    pub utc_offset: UtcOffset,
}

impl Default for DateResolution {
    fn default() -> Self {
        Self {
            default_time: CalendarTime::MIDNIGHT,
            utc_offset: UtcOffset::UTC,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskPayload {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// RFC 3339 timestamp or `weekday/day/month/year` date string.
    #[serde(alias = "startDate")]
    pub date: String,
    #[serde(default)]
    pub is_completed: Option<bool>,
}

impl CreateTaskPayload {
    pub fn into_new_task(self, resolution: &DateResolution) -> Result<NewTask, PlannerError> {
        let scheduled_at = resolve_date(&self.date, resolution)?;
        Ok(NewTask {
            title: self.title,
            description: self.description,
            scheduled_at,
            is_completed: self.is_completed.unwrap_or(false),
        })
    }
}

impl TryFrom<CreateTaskPayload> for NewTask {
    type Error = PlannerError;

    fn try_from(payload: CreateTaskPayload) -> Result<Self, Self::Error> {
        payload.into_new_task(&DateResolution::default())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskPayload {
    #[serde(default)]
    pub title: Option<String>,
    /// Absent leaves the description alone; `null` clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, alias = "startDate")]
    pub date: Option<String>,
    #[serde(default)]
    pub is_completed: Option<bool>,
}

impl UpdateTaskPayload {
    pub fn into_update(self, resolution: &DateResolution) -> Result<TaskUpdate, PlannerError> {
        let scheduled_at = self
            .date
            .as_deref()
            .map(|raw| resolve_date(raw, resolution))
            .transpose()?;

        Ok(TaskUpdate {
            title: self.title,
            description: self.description,
            scheduled_at,
            is_completed: self.is_completed,
        })
    }
}

impl TryFrom<UpdateTaskPayload> for TaskUpdate {
    type Error = PlannerError;

    fn try_from(payload: UpdateTaskPayload) -> Result<Self, Self::Error> {
        payload.into_update(&DateResolution::default())
    }
}

fn resolve_date(
    raw: &str,
    resolution: &DateResolution,
) -> Result<time::OffsetDateTime, PlannerError> {
    let scheduled = ScheduledAt::parse(raw).map_err(|e| {
        tracing::warn!("rejected task date {:?}: {}", raw, e);
        PlannerError::invalid(format!("could not parse task date: {raw}"))
    })?;
    Ok(scheduled.resolve(resolution.default_time, resolution.utc_offset)?)
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
