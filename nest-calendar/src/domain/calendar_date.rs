use std::fmt;

use serde::{Deserialize, Serialize};

use super::Weekday;
use crate::engine::{self, days_in_month};
use crate::error::{CalendarError, Result};

/// A validated day in the proleptic Gregorian calendar.
///
/// `month` is zero-based (0 = January) to match the planner's persisted
/// date strings. Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCalendarDate")]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    pub fn new(day: u8, month: u8, year: i32) -> Result<Self> {
        let days = days_in_month(month, year)?;
        if day == 0 || day > days {
            return Err(CalendarError::invalid(format!(
                "day {day} is outside 1..={days} for month index {month} of {year}"
            )));
        }

        Ok(Self { year, month, day })
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Zero-based month.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// One-based month, as used by ISO dates.
    pub fn month1(&self) -> u8 {
        self.month + 1
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn weekday(&self) -> Weekday {
        engine::zeller(self.day, self.month1(), self.year)
    }

    pub fn is_leap_year(&self) -> bool {
        engine::is_leap_year(self.year)
    }

    pub fn days_in_month(&self) -> u8 {
        // Validated on construction.
        days_in_month(self.month, self.year).unwrap_or(31)
    }

    /// The following day, rolling over month and year boundaries.
    pub fn succ(&self) -> Result<Self> {
        if self.day < self.days_in_month() {
            return Ok(Self {
                day: self.day + 1,
                ..*self
            });
        }
        let (month, year) = engine::next_month(self.month, self.year)?;
        Ok(Self { year, month, day: 1 })
    }

    /// The preceding day, rolling over month and year boundaries.
    pub fn pred(&self) -> Result<Self> {
        if self.day > 1 {
            return Ok(Self {
                day: self.day - 1,
                ..*self
            });
        }
        let (month, year) = engine::previous_month(self.month, self.year)?;
        let day = days_in_month(month, year)?;
        Ok(Self { year, month, day })
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month1(), self.day)
    }
}

impl From<time::Date> for CalendarDate {
    fn from(date: time::Date) -> Self {
        Self {
            year: date.year(),
            month: u8::from(date.month()) - 1,
            day: date.day(),
        }
    }
}

impl TryFrom<CalendarDate> for time::Date {
    type Error = CalendarError;

    fn try_from(date: CalendarDate) -> Result<Self> {
        let month = time::Month::try_from(date.month1())
            .map_err(|e| CalendarError::invalid(e.to_string()))?;
        time::Date::from_calendar_date(date.year, month, date.day)
            .map_err(|e| CalendarError::invalid(format!("{date} is not representable: {e}")))
    }
}

#[derive(Deserialize)]
struct RawCalendarDate {
    day: u8,
    month: u8,
    year: i32,
}

impl TryFrom<RawCalendarDate> for CalendarDate {
    type Error = CalendarError;

    fn try_from(raw: RawCalendarDate) -> Result<Self> {
        Self::new(raw.day, raw.month, raw.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u8, month: u8, year: i32) -> CalendarDate {
        CalendarDate::new(day, month, year).unwrap()
    }

    #[test]
    fn rejects_days_past_month_end() {
        assert!(CalendarDate::new(29, 1, 2024).is_ok());
        assert!(CalendarDate::new(29, 1, 2023).is_err());
        assert!(CalendarDate::new(31, 3, 2024).is_err());
        assert!(CalendarDate::new(0, 0, 2024).is_err());
        assert!(CalendarDate::new(1, 12, 2024).is_err());
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(date(31, 11, 2023) < date(1, 0, 2024));
        assert!(date(1, 1, 2024) > date(31, 0, 2024));
        assert!(date(2, 5, 2024) > date(1, 5, 2024));
    }

    #[test]
    fn succ_and_pred_cross_boundaries() {
        assert_eq!(date(31, 11, 2024).succ().unwrap(), date(1, 0, 2025));
        assert_eq!(date(28, 1, 2024).succ().unwrap(), date(29, 1, 2024));
        assert_eq!(date(28, 1, 2023).succ().unwrap(), date(1, 2, 2023));
        assert_eq!(date(1, 0, 2024).pred().unwrap(), date(31, 11, 2023));
        assert_eq!(date(1, 2, 2024).pred().unwrap(), date(29, 1, 2024));
    }

    #[test]
    fn displays_iso_style() {
        assert_eq!(date(5, 0, 2024).to_string(), "2024-01-05");
        assert_eq!(date(25, 11, 999).to_string(), "0999-12-25");
    }

    #[test]
    fn converts_to_and_from_time_date() {
        let ours = date(29, 1, 2024);
        let theirs = time::Date::try_from(ours).unwrap();
        assert_eq!(theirs.to_string(), "2024-02-29");
        assert_eq!(CalendarDate::from(theirs), ours);
    }

    #[test]
    fn weekday_is_derived() {
        assert_eq!(date(1, 0, 2024).weekday(), Weekday::Monday);
        assert_eq!(date(1, 0, 2023).weekday(), Weekday::Sunday);
    }

    #[test]
    fn deserialization_validates() {
        let ok: CalendarDate = serde_json::from_str(r#"{"day":29,"month":1,"year":2024}"#).unwrap();
        assert_eq!(ok, date(29, 1, 2024));
        assert!(serde_json::from_str::<CalendarDate>(r#"{"day":30,"month":1,"year":2024}"#).is_err());
    }
}
