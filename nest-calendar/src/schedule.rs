//! Reconciles planner date inputs with ISO timestamps.
//!
//! Clients send either an RFC 3339 timestamp or a legacy slash date string
//! (see [`crate::date_string`]). Both are normalized to an
//! [`OffsetDateTime`] before reaching the task store.

use time::{format_description::well_known::Rfc3339, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::date_string::{format_date_string, parse_date_string};
use crate::domain::{CalendarDate, CalendarTime};
use crate::error::{CalendarError, Result};

/// A schedule value as received from a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAt {
    /// A full RFC 3339 timestamp.
    Iso(OffsetDateTime),
    /// A day without a time of day.
    DateString(CalendarDate),
}

impl ScheduledAt {
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if let Ok(timestamp) = OffsetDateTime::parse(raw, &Rfc3339) {
            return Ok(Self::Iso(timestamp));
        }

        parse_date_string(raw).map(Self::DateString).map_err(|e| {
            CalendarError::invalid(format!(
                "'{raw}' is neither an RFC 3339 timestamp nor a weekday/day/month/year date ({e})"
            ))
        })
    }

    /// Resolves to a timestamp; bare dates are placed at `default_time` in `offset`.
    pub fn resolve(&self, default_time: CalendarTime, offset: UtcOffset) -> Result<OffsetDateTime> {
        match self {
            ScheduledAt::Iso(timestamp) => Ok(*timestamp),
            ScheduledAt::DateString(date) => join_timestamp(date, &default_time, offset),
        }
    }

    /// The calendar day this value falls on when viewed in `offset`.
    pub fn date(&self, offset: UtcOffset) -> CalendarDate {
        match self {
            ScheduledAt::Iso(timestamp) => split_timestamp(*timestamp, offset).0,
            ScheduledAt::DateString(date) => *date,
        }
    }
}

pub fn join_timestamp(
    date: &CalendarDate,
    time: &CalendarTime,
    offset: UtcOffset,
) -> Result<OffsetDateTime> {
    let day = time::Date::try_from(*date)?;
    let clock = time::Time::try_from(*time)?;
    Ok(PrimitiveDateTime::new(day, clock).assume_offset(offset))
}

/// Splits a timestamp into the local day and time of day seen in `offset`.
pub fn split_timestamp(timestamp: OffsetDateTime, offset: UtcOffset) -> (CalendarDate, CalendarTime) {
    let local = timestamp.to_offset(offset);
    (local.date().into(), local.time().into())
}

/// Formats a timestamp as RFC 3339.
pub fn format_iso(timestamp: OffsetDateTime) -> Result<String> {
    timestamp
        .format(&Rfc3339)
        .map_err(|e| CalendarError::invalid(format!("could not format timestamp: {e}")))
}

/// The legacy slash date string of the day `timestamp` falls on in `offset`.
pub fn to_date_string(timestamp: OffsetDateTime, offset: UtcOffset) -> String {
    format_date_string(&split_timestamp(timestamp, offset).0)
}
