//! Lenient date parsing for list query parameters.
//!
//! Accepts either a calendar date (`2024-01-31`) or an RFC 3339 timestamp.
//! A bare date used as a lower bound means the start of that day (UTC); used
//! as an upper bound it covers the whole day.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Which end of a range a date parameter bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

/// Parses a date parameter into a UTC instant.
///
/// Returns `None` if the value is neither a calendar date nor an RFC 3339 timestamp.
pub fn parse_date_param(value: &str, bound: Bound) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let time = match bound {
        Bound::Start => NaiveTime::MIN,
        Bound::End => NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)?,
    };

    Some(date.and_time(time).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_plain_date_as_start() {
        let parsed = parse_date_param("2024-01-31", Bound::Start).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_plain_date_as_end_covers_day() {
        let parsed = parse_date_param("2024-01-31", Bound::End).unwrap();
        assert!(parsed > Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap());
        assert!(parsed < Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339() {
        let parsed = parse_date_param("2024-01-31T10:00:00+02:00", Bound::End).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 31, 8, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_date_param("yesterday", Bound::Start).is_none());
        assert!(parse_date_param("2024-13-01", Bound::Start).is_none());
    }
}
