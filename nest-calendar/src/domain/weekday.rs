use serde::{Deserialize, Serialize};
use strum::Display;

use crate::error::{CalendarError, Result};

/// Day of the week, indexed from Sunday.
///
/// Serializes as its index (0 = Sunday ... 6 = Saturday), which is the
/// convention used by the planner front-end.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn from_index(index: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or_else(|| CalendarError::invalid(format!("weekday index {index} is outside 0..=6")))
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(index: u8) -> Result<Self> {
        Self::from_index(index)
    }
}

impl From<time::Weekday> for Weekday {
    fn from(weekday: time::Weekday) -> Self {
        Self::ALL[usize::from(weekday.number_days_from_sunday())]
    }
}
