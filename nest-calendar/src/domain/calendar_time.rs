use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};

/// A validated time of day with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCalendarTime")]
pub struct CalendarTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl CalendarTime {
    pub const MIDNIGHT: CalendarTime = CalendarTime {
        hour: 0,
        minute: 0,
        second: 0,
    };

    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self> {
        if hour > 23 {
            return Err(CalendarError::invalid(format!("hour {hour} is outside 0..=23")));
        }
        if minute > 59 {
            return Err(CalendarError::invalid(format!(
                "minute {minute} is outside 0..=59"
            )));
        }
        if second > 59 {
            return Err(CalendarError::invalid(format!(
                "second {second} is outside 0..=59"
            )));
        }

        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }
}

impl fmt::Display for CalendarTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Parses `HH:MM` or `HH:MM:SS`.
impl FromStr for CalendarTime {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        let parse = |part: &str| {
            part.parse::<u8>()
                .map_err(|_| CalendarError::invalid(format!("could not parse time: {s}")))
        };

        match parts.as_slice() {
            [hour, minute] => Self::new(parse(hour)?, parse(minute)?, 0),
            [hour, minute, second] => Self::new(parse(hour)?, parse(minute)?, parse(second)?),
            _ => Err(CalendarError::invalid(format!("could not parse time: {s}"))),
        }
    }
}

impl From<time::Time> for CalendarTime {
    fn from(t: time::Time) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
        }
    }
}

impl TryFrom<CalendarTime> for time::Time {
    type Error = CalendarError;

    fn try_from(t: CalendarTime) -> Result<Self> {
        time::Time::from_hms(t.hour, t.minute, t.second)
            .map_err(|e| CalendarError::invalid(e.to_string()))
    }
}

#[derive(Deserialize)]
struct RawCalendarTime {
    hour: u8,
    minute: u8,
    #[serde(default)]
    second: u8,
}

impl TryFrom<RawCalendarTime> for CalendarTime {
    type Error = CalendarError;

    fn try_from(raw: RawCalendarTime) -> Result<Self> {
        Self::new(raw.hour, raw.minute, raw.second)
    }
}
