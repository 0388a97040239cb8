//! Gregorian calendar arithmetic.
//!
//! All functions are pure and use the proleptic Gregorian calendar with
//! astronomical year numbering, so they are defined for every `i32` year.

use crate::domain::Weekday;
use crate::error::{CalendarError, Result};

const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Number of days in a zero-based `month` of `year`.
pub fn days_in_month(month: u8, year: i32) -> Result<u8> {
    let days = DAYS_IN_MONTH
        .get(usize::from(month))
        .copied()
        .ok_or_else(|| CalendarError::invalid(format!("month index {month} is outside 0..=11")))?;

    if month == 1 && is_leap_year(year) {
        Ok(29)
    } else {
        Ok(days)
    }
}

/// Day of the week for a date given with a one-based month.
pub fn weekday_of(day: u8, month1: u8, year: i32) -> Result<Weekday> {
    if !(1..=12).contains(&month1) {
        return Err(CalendarError::invalid(format!(
            "month {month1} is outside 1..=12"
        )));
    }
    let days = days_in_month(month1 - 1, year)?;
    if day == 0 || day > days {
        return Err(CalendarError::invalid(format!(
            "day {day} is outside 1..={days} for {year}-{month1:02}"
        )));
    }

    Ok(zeller(day, month1, year))
}

/// Zeller's congruence, remapped so that 0 is Sunday.
///
/// Inputs must already be validated.
pub(crate) fn zeller(day: u8, month1: u8, year: i32) -> Weekday {
    let (m, y) = if month1 < 3 {
        (i64::from(month1) + 12, i64::from(year) - 1)
    } else {
        (i64::from(month1), i64::from(year))
    };
    let k = y.rem_euclid(100);
    let j = y.div_euclid(100);

    // Raw result counts from Saturday.
    let h = (i64::from(day) + (13 * (m + 1)) / 5 + k + k / 4 + j.div_euclid(4) + 5 * j)
        .rem_euclid(7);

    Weekday::ALL[((h + 6) % 7) as usize]
}

/// Zero-based (month, year) of the month before `month`.
pub(crate) fn previous_month(month: u8, year: i32) -> Result<(u8, i32)> {
    if month == 0 {
        let year = year
            .checked_sub(1)
            .ok_or_else(|| CalendarError::invalid(format!("year {year} has no predecessor")))?;
        Ok((11, year))
    } else {
        Ok((month - 1, year))
    }
}

/// Zero-based (month, year) of the month after `month`.
pub(crate) fn next_month(month: u8, year: i32) -> Result<(u8, i32)> {
    if month >= 11 {
        let year = year
            .checked_add(1)
            .ok_or_else(|| CalendarError::invalid(format!("year {year} has no successor")))?;
        Ok((0, year))
    } else {
        Ok((month + 1, year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(1, 2024).unwrap(), 29);
        assert_eq!(days_in_month(1, 2023).unwrap(), 28);
        assert_eq!(days_in_month(3, 2024).unwrap(), 30);
        assert_eq!(days_in_month(0, 2024).unwrap(), 31);
        assert_eq!(days_in_month(11, 2024).unwrap(), 31);
    }

    #[test]
    fn month_out_of_range_is_rejected() {
        assert!(matches!(
            days_in_month(12, 2024),
            Err(CalendarError::InvalidArgument(_))
        ));
    }

    #[test]
    fn weekday_calibration_dates() {
        assert_eq!(weekday_of(1, 1, 2024).unwrap(), Weekday::Monday);
        assert_eq!(weekday_of(1, 1, 2023).unwrap(), Weekday::Sunday);
        assert_eq!(weekday_of(29, 2, 2024).unwrap(), Weekday::Thursday);
        assert_eq!(weekday_of(1, 3, 2024).unwrap(), Weekday::Friday);
        assert_eq!(weekday_of(31, 12, 1999).unwrap(), Weekday::Friday);
        assert_eq!(weekday_of(1, 1, 2000).unwrap(), Weekday::Saturday);
    }

    #[test]
    fn weekday_agrees_with_time_crate() {
        let mut date = time::Date::from_calendar_date(2018, time::Month::January, 1).unwrap();
        let end = time::Date::from_calendar_date(2032, time::Month::December, 31).unwrap();
        while date <= end {
            let ours = weekday_of(date.day(), u8::from(date.month()), date.year()).unwrap();
            assert_eq!(ours, Weekday::from(date.weekday()), "mismatch on {date}");
            date = date.next_day().unwrap();
        }
    }

    #[test]
    fn weekday_handles_negative_years() {
        for year in [-401, -400, -101, -100, -1] {
            let date = time::Date::from_calendar_date(year, time::Month::March, 1).unwrap();
            assert_eq!(
                weekday_of(1, 3, year).unwrap(),
                Weekday::from(date.weekday()),
                "mismatch in year {year}"
            );
        }
    }

    #[test]
    fn weekday_rejects_invalid_dates() {
        assert!(weekday_of(0, 1, 2024).is_err());
        assert!(weekday_of(30, 2, 2024).is_err());
        assert!(weekday_of(29, 2, 2023).is_err());
        assert!(weekday_of(1, 0, 2024).is_err());
        assert!(weekday_of(1, 13, 2024).is_err());
    }

    #[test]
    fn month_neighbours_roll_the_year() {
        assert_eq!(previous_month(0, 2024).unwrap(), (11, 2023));
        assert_eq!(previous_month(5, 2024).unwrap(), (4, 2024));
        assert_eq!(next_month(11, 2024).unwrap(), (0, 2025));
        assert_eq!(next_month(5, 2024).unwrap(), (6, 2024));
        assert!(next_month(11, i32::MAX).is_err());
    }
}
