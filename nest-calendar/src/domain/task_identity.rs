use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CalendarDate, CalendarTime};
use crate::error::{CalendarError, Result};

const MAX_ENCODABLE_YEAR: i32 = 9999;
const TIME_FACTOR: i64 = 1_000_000;

/// Canonical key of a scheduled moment.
///
/// Encodes the moment as the decimal digits `YYYYMMDDhhmmss` (one-based
/// month) so every field has a fixed width and the key decodes uniquely.
/// Only years `0..=9999` fit the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TaskIdentity(i64);

impl TaskIdentity {
    pub fn new(date: &CalendarDate, time: &CalendarTime) -> Result<Self> {
        if !(0..=MAX_ENCODABLE_YEAR).contains(&date.year()) {
            return Err(CalendarError::ambiguous(format!(
                "year {} does not fit the four digit identity layout",
                date.year()
            )));
        }

        let date_part = i64::from(date.year()) * 10_000
            + i64::from(date.month1()) * 100
            + i64::from(date.day());
        let time_part = i64::from(time.hour()) * 10_000
            + i64::from(time.minute()) * 100
            + i64::from(time.second());

        Ok(Self(date_part * TIME_FACTOR + time_part))
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Splits the identity back into the moment it was derived from.
    pub fn decode(&self) -> Result<(CalendarDate, CalendarTime)> {
        decode(self.0)
    }
}

fn decode(value: i64) -> Result<(CalendarDate, CalendarTime)> {
    let not_canonical =
        |reason: String| CalendarError::ambiguous(format!("{value} is not a task identity: {reason}"));

    if value < 0 {
        return Err(not_canonical("negative".to_string()));
    }

    let date_part = value / TIME_FACTOR;
    let time_part = value % TIME_FACTOR;

    let year = date_part / 10_000;
    let month1 = (date_part / 100) % 100;
    let day = date_part % 100;
    if year > i64::from(MAX_ENCODABLE_YEAR) {
        return Err(not_canonical(format!("year {year} is out of range")));
    }
    if month1 == 0 {
        return Err(not_canonical("month is zero".to_string()));
    }

    let date = CalendarDate::new(day as u8, (month1 - 1) as u8, year as i32)
        .map_err(|e| not_canonical(e.to_string()))?;
    let time = CalendarTime::new(
        (time_part / 10_000) as u8,
        ((time_part / 100) % 100) as u8,
        (time_part % 100) as u8,
    )
    .map_err(|e| not_canonical(e.to_string()))?;

    Ok((date, time))
}

/// Derives the canonical identity for a scheduled moment.
pub fn to_task_identity(date: &CalendarDate, time: &CalendarTime) -> Result<TaskIdentity> {
    TaskIdentity::new(date, time)
}

impl fmt::Display for TaskIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:014}", self.0)
    }
}

impl TryFrom<i64> for TaskIdentity {
    type Error = CalendarError;

    fn try_from(value: i64) -> Result<Self> {
        decode(value)?;
        Ok(Self(value))
    }
}

impl From<TaskIdentity> for i64 {
    fn from(identity: TaskIdentity) -> Self {
        identity.0
    }
}

/// Key format written by older planner clients.
///
/// Unpadded day, zero-based month and year are concatenated, then a slash,
/// then unpadded hour, minute and second. Different moments can produce
/// the same key (day 1 of month 11 and day 11 of month 1 both start with
/// `111`), so it is only used to match previously stored keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LegacyTaskKey(String);

impl LegacyTaskKey {
    pub fn new(date: &CalendarDate, time: &CalendarTime) -> Self {
        Self(format!(
            "{}{}{}/{}{}{}",
            date.day(),
            date.month(),
            date.year(),
            time.hour(),
            time.minute(),
            time.second()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, stored: &str) -> bool {
        self.0 == stored.trim()
    }
}

impl fmt::Display for LegacyTaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
