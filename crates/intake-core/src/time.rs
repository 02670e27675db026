use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use std::fmt::Write as _;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
/// Shape of an HTML `datetime-local` value, used for stored follow-up times.
const DATETIME_STORED_FORMAT: &str = "%Y-%m-%dT%H:%M";

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("timestamp cannot be empty")]
    Empty,
    #[error("invalid date format: expected YYYY-MM-DD")]
    InvalidDateFormat,
    #[error("invalid datetime format: expected YYYY-MM-DD or YYYY-MM-DD HH:MM")]
    InvalidDateTime,
}

/// Creation timestamp in UTC with millisecond precision.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Local calendar date of an instant, as `YYYY-MM-DD`.
pub fn local_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .date_naive()
        .format(DATE_FORMAT)
        .to_string()
}

/// Normalizes a calendar date to `YYYY-MM-DD`.
pub fn parse_date(input: &str) -> Result<String, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }
    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| TimeParseError::InvalidDateFormat)?;
    Ok(date.format(DATE_FORMAT).to_string())
}

/// Normalizes a local date or date+time to `YYYY-MM-DDTHH:MM`. A bare date
/// means midnight.
pub fn parse_date_time(input: &str) -> Result<String, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }
    let naive = parse_naive(trimmed).ok_or(TimeParseError::InvalidDateTime)?;
    Ok(naive.format(DATETIME_STORED_FORMAT).to_string())
}

/// Interprets a stored date string as a local instant. RFC 3339 values carry
/// their own offset; everything else is read as local wall time.
pub fn parse_stored_instant(raw: &str) -> Option<DateTime<Local>> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Local));
    }
    let naive = parse_naive(trimmed)?;
    Local.from_local_datetime(&naive).earliest()
}

/// Renders a stored date for display: `N/A` when missing, the raw string
/// when it does not parse.
pub fn format_display(raw: Option<&str>, format: &str) -> String {
    let raw = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return "N/A".to_string(),
    };
    let Some(instant) = parse_stored_instant(raw) else {
        return raw.to_string();
    };
    let mut out = String::new();
    if write!(out, "{}", instant.format(format)).is_err() {
        return raw.to_string();
    }
    out
}

pub fn is_valid_datetime_format(format: &str) -> bool {
    !format.trim().is_empty()
        && StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
        return date.and_hms_opt(0, 0, 0);
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::{
        format_display, format_timestamp, is_valid_datetime_format, local_date, parse_date,
        parse_date_time, TimeParseError, DEFAULT_DATETIME_FORMAT,
    };
    use chrono::{Local, TimeZone, Utc};

    #[test]
    fn parse_date_accepts_iso_date() {
        assert_eq!(parse_date(" 2024-03-05 ").unwrap(), "2024-03-05");
        assert_eq!(
            parse_date("05/03/2024").unwrap_err(),
            TimeParseError::InvalidDateFormat
        );
        assert_eq!(parse_date("").unwrap_err(), TimeParseError::Empty);
    }

    #[test]
    fn parse_date_time_normalizes_to_datetime_local() {
        assert_eq!(
            parse_date_time("2024-01-01 10:00").unwrap(),
            "2024-01-01T10:00"
        );
        assert_eq!(
            parse_date_time("2024-01-01T10:00").unwrap(),
            "2024-01-01T10:00"
        );
        assert_eq!(parse_date_time("2024-01-01").unwrap(), "2024-01-01T00:00");
        assert_eq!(
            parse_date_time("tomorrow").unwrap_err(),
            TimeParseError::InvalidDateTime
        );
    }

    #[test]
    fn format_timestamp_uses_millis_and_z() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        assert_eq!(format_timestamp(at), "2024-01-01T10:00:00.000Z");
    }

    #[test]
    fn local_date_matches_local_calendar() {
        let local = Local.with_ymd_and_hms(2030, 1, 15, 13, 45, 0).unwrap();
        assert_eq!(local_date(local.with_timezone(&Utc)), "2030-01-15");
    }

    #[test]
    fn format_display_reads_local_wall_time() {
        assert_eq!(
            format_display(Some("2024-01-01T10:00"), DEFAULT_DATETIME_FORMAT),
            "2024-01-01 10:00"
        );
        assert_eq!(
            format_display(Some("2024-01-01"), DEFAULT_DATETIME_FORMAT),
            "2024-01-01 00:00"
        );
    }

    #[test]
    fn format_display_converts_rfc3339_to_local() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let expected = at
            .with_timezone(&Local)
            .format(DEFAULT_DATETIME_FORMAT)
            .to_string();
        assert_eq!(
            format_display(Some("2024-01-01T10:00:00.000Z"), DEFAULT_DATETIME_FORMAT),
            expected
        );
    }

    #[test]
    fn format_display_handles_missing_and_garbage() {
        assert_eq!(format_display(None, DEFAULT_DATETIME_FORMAT), "N/A");
        assert_eq!(format_display(Some("  "), DEFAULT_DATETIME_FORMAT), "N/A");
        assert_eq!(
            format_display(Some("next week"), DEFAULT_DATETIME_FORMAT),
            "next week"
        );
    }

    #[test]
    fn datetime_format_validation() {
        assert!(is_valid_datetime_format("%d/%m/%Y %H:%M"));
        assert!(!is_valid_datetime_format("%Q"));
        assert!(!is_valid_datetime_format(""));
    }
}
