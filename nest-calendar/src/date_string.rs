//! Slash-delimited date strings stored with planner tasks.
//!
//! The format is `{weekday}/{day}/{month}/{year}`: four unpadded integers
//! where the weekday counts from Sunday and the month is zero-based.
//! `2024-01-05` (a Friday) is written `5/5/0/2024`.

use crate::domain::CalendarDate;
use crate::error::{CalendarError, Result};

pub fn format_date_string(date: &CalendarDate) -> String {
    format!(
        "{}/{}/{}/{}",
        date.weekday().index(),
        date.day(),
        date.month(),
        date.year()
    )
}

pub fn parse_date_string(s: &str) -> Result<CalendarDate> {
    let fields: Vec<&str> = s.split('/').collect();
    let [weekday, day, month, year] = fields.as_slice() else {
        return Err(CalendarError::invalid(format!(
            "'{s}' should have four slash-separated fields, found {}",
            fields.len()
        )));
    };

    let weekday: u8 = parse_field(s, "weekday", weekday)?;
    let day: u8 = parse_field(s, "day", day)?;
    let month: u8 = parse_field(s, "month", month)?;
    let year: i32 = parse_field(s, "year", year)?;

    let date = CalendarDate::new(day, month, year)?;
    if date.weekday().index() != weekday {
        return Err(CalendarError::invalid(format!(
            "'{s}' names weekday {weekday} but {date} is a {}",
            date.weekday()
        )));
    }

    Ok(date)
}

/// Parses one field, accepting only its canonical unpadded spelling.
fn parse_field<T>(input: &str, name: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr + ToString,
{
    let invalid = || CalendarError::invalid(format!("'{input}' has an invalid {name}: '{raw}'"));
    let value: T = raw.parse().map_err(|_| invalid())?;
    if value.to_string() != raw {
        return Err(invalid());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u8, month: u8, year: i32) -> CalendarDate {
        CalendarDate::new(day, month, year).unwrap()
    }

    #[test]
    fn formats_weekday_day_month_year() {
        assert_eq!(format_date_string(&date(5, 0, 2024)), "5/5/0/2024");
        assert_eq!(format_date_string(&date(1, 0, 2023)), "0/1/0/2023");
        assert_eq!(format_date_string(&date(25, 11, 2024)), "3/25/11/2024");
    }

    #[test]
    fn parses_what_it_formats() {
        let d = date(29, 1, 2024);
        assert_eq!(parse_date_string(&format_date_string(&d)).unwrap(), d);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(parse_date_string("5/0/2024").is_err());
        assert!(parse_date_string("5/5/0/2024/1").is_err());
        assert!(parse_date_string("").is_err());
    }

    #[test]
    fn rejects_padded_or_signed_fields() {
        assert!(parse_date_string("5/05/0/2024").is_err());
        assert!(parse_date_string("5/+5/0/2024").is_err());
        assert!(parse_date_string("5/5/0/ 2024").is_err());
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            parse_date_string("6/30/1/2024"),
            Err(CalendarError::InvalidArgument(_))
        ));
        assert!(parse_date_string("1/1/12/2024").is_err());
        assert!(parse_date_string("1/0/0/2024").is_err());
    }

    #[test]
    fn rejects_mismatched_weekday() {
        let err = parse_date_string("1/5/0/2024").unwrap_err();
        assert!(err.to_string().contains("Friday"), "{err}");
    }

    #[test]
    fn accepts_negative_years() {
        let d = date(1, 2, -44);
        assert_eq!(parse_date_string(&format_date_string(&d)).unwrap(), d);
    }
}
