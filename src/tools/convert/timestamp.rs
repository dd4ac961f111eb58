//! Unix timestamp converter.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::Serialize;

use crate::tools::{require_input, ToolError, ToolResult};

/// Values with a larger magnitude are read as milliseconds by
/// [`TimestampUnit::Auto`].
pub const MILLISECONDS_THRESHOLD: i64 = 100_000_000_000;

/// Years every notation in [`TimestampInfo`] can represent.
pub const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

named_options! {
    /// Unit of a Unix timestamp.
    pub enum TimestampUnit {
        /// Milliseconds above 10^11, seconds otherwise
        Auto => "auto",
        /// Seconds since the epoch
        Seconds => "seconds",
        /// Milliseconds since the epoch
        Milliseconds => "milliseconds",
    }
}

/// A point in time in several notations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimestampInfo {
    /// Seconds since the epoch
    pub unix_seconds: i64,
    /// Milliseconds since the epoch
    pub unix_milliseconds: i64,
    /// `2024-01-01T00:00:00Z`
    pub rfc3339: String,
    /// `Mon, 1 Jan 2024 00:00:00 +0000`
    pub rfc2822: String,
    /// `2024-01-01`
    pub iso_date: String,
    /// `Monday`
    pub weekday: String,
    /// `3 days ago`, `in 2 hours`, `now`
    pub relative: String,
}

impl TimestampInfo {
    /// Describes `instant` relative to `reference`.
    pub fn new(instant: DateTime<Utc>, reference: DateTime<Utc>) -> Self {
        Self {
            unix_seconds: instant.timestamp(),
            unix_milliseconds: instant.timestamp_millis(),
            rfc3339: instant.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            rfc2822: instant.to_rfc2822(),
            iso_date: instant.format("%Y-%m-%d").to_string(),
            weekday: instant.format("%A").to_string(),
            relative: relative(instant, reference),
        }
    }
}

/// Human description of the distance between two instants, using the
/// largest whole unit.
pub fn relative(instant: DateTime<Utc>, reference: DateTime<Utc>) -> String {
    let delta = instant.signed_duration_since(reference).num_seconds();
    let magnitude = delta.unsigned_abs();
    if magnitude < 60 {
        return "now".to_string();
    }

    const UNITS: [(u64, &str); 6] = [
        (365 * 86_400, "year"),
        (30 * 86_400, "month"),
        (7 * 86_400, "week"),
        (86_400, "day"),
        (3_600, "hour"),
        (60, "minute"),
    ];
    let (size, name) = UNITS
        .iter()
        .copied()
        .find(|(size, _)| magnitude >= *size)
        .unwrap_or((60, "minute"));
    let count = magnitude / size;
    let plural = if count == 1 { "" } else { "s" };

    if delta < 0 {
        format!("{count} {name}{plural} ago")
    } else {
        format!("in {count} {name}{plural}")
    }
}

/// Reads a Unix timestamp.
///
/// ```
/// use utilkit::tools::convert::timestamp::{from_unix, TimestampUnit};
///
/// let t = from_unix(1_700_000_000, TimestampUnit::Auto).unwrap();
/// assert_eq!(t.to_rfc3339(), "2023-11-14T22:13:20+00:00");
/// ```
pub fn from_unix(value: i64, unit: TimestampUnit) -> ToolResult<DateTime<Utc>> {
    let millis = match unit {
        TimestampUnit::Milliseconds => Some(value),
        TimestampUnit::Seconds => value.checked_mul(1000),
        TimestampUnit::Auto if value.unsigned_abs() > MILLISECONDS_THRESHOLD.unsigned_abs() => {
            Some(value)
        }
        TimestampUnit::Auto => value.checked_mul(1000),
    };
    millis
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
        .filter(|instant| SUPPORTED_YEARS.contains(&instant.year()))
        .ok_or_else(|| {
            ToolError::malformed(format!(
                "timestamp {value} is out of range (years {}..={})",
                SUPPORTED_YEARS.start(),
                SUPPORTED_YEARS.end()
            ))
        })
}

fn check_year(instant: DateTime<Utc>, text: &str) -> ToolResult<DateTime<Utc>> {
    if SUPPORTED_YEARS.contains(&instant.year()) {
        Ok(instant)
    } else {
        Err(ToolError::malformed(format!("'{text}' is outside years 0..=9999")))
    }
}

/// Parses a date-time as RFC 3339 or `YYYY-MM-DD[ HH:MM[:SS]]` (UTC).
pub fn to_unix(input: &str) -> ToolResult<DateTime<Utc>> {
    let text = require_input(input, "Date")?.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return check_year(parsed.with_timezone(&Utc), text);
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return check_year(naive.and_utc(), text);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return check_year(midnight.and_utc(), text);
        }
    }

    Err(ToolError::malformed(format!(
        "'{text}' is not RFC 3339 or YYYY-MM-DD[ HH:MM[:SS]]"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        to_unix(s).unwrap()
    }

    #[test]
    fn test_auto_detects_milliseconds() {
        let seconds = from_unix(1_700_000_000, TimestampUnit::Auto).unwrap();
        let millis = from_unix(1_700_000_000_000, TimestampUnit::Auto).unwrap();
        assert_eq!(seconds, millis);
        assert_eq!(
            from_unix(100_000_000_000_000_000, TimestampUnit::Seconds).ok(),
            None
        );
    }

    #[test]
    fn test_year_range_boundaries() {
        // 9999-12-31T23:59:59Z and 0000-01-01T00:00:00Z
        let last = from_unix(253_402_300_799, TimestampUnit::Seconds).unwrap();
        let first = from_unix(-62_167_219_200, TimestampUnit::Seconds).unwrap();
        assert_eq!(TimestampInfo::new(last, last).iso_date, "9999-12-31");
        assert_eq!(TimestampInfo::new(first, first).iso_date, "0000-01-01");

        for value in [253_402_300_800, -62_167_219_201, -62_200_000_000] {
            assert!(matches!(
                from_unix(value, TimestampUnit::Seconds),
                Err(ToolError::Malformed(_))
            ));
        }
        assert!(matches!(
            from_unix(300_000_000_000_000, TimestampUnit::Auto),
            Err(ToolError::Malformed(_))
        ));
    }

    #[test]
    fn test_info_fields() {
        let instant = from_unix(0, TimestampUnit::Seconds).unwrap();
        let info = TimestampInfo::new(instant, at("1970-01-04"));
        assert_eq!(info.rfc3339, "1970-01-01T00:00:00Z");
        assert_eq!(info.rfc2822, "Thu, 1 Jan 1970 00:00:00 +0000");
        assert_eq!(info.iso_date, "1970-01-01");
        assert_eq!(info.weekday, "Thursday");
        assert_eq!(info.relative, "3 days ago");
        assert_eq!(info.unix_milliseconds, 0);
    }

    #[test]
    fn test_to_unix_formats() {
        assert_eq!(at("2024-02-29").timestamp(), 1_709_164_800);
        assert_eq!(at("2024-02-29 12:30").timestamp(), 1_709_209_800);
        assert_eq!(at("2024-02-29 12:30:15").timestamp(), 1_709_209_815);
        assert_eq!(at("2024-02-29T14:30:15+02:00").timestamp(), 1_709_209_815);
        assert!(matches!(to_unix("yesterday"), Err(ToolError::Malformed(_))));
        assert!(matches!(to_unix("2023-02-29"), Err(ToolError::Malformed(_))));
    }

    #[test]
    fn test_relative() {
        let reference = at("2024-01-01 00:00");
        assert_eq!(relative(at("2024-01-01 00:00:30"), reference), "now");
        assert_eq!(relative(at("2024-01-01 02:00"), reference), "in 2 hours");
        assert_eq!(relative(at("2023-12-31 23:59"), reference), "1 minute ago");
        assert_eq!(relative(at("2026-01-01"), reference), "in 2 years");
    }
}
