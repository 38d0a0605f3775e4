//! Timestamp formatting utilities
//!
//! Produces ISO 8601 timestamps in the local timezone with an explicit UTC
//! offset (`2025-01-08T10:30:45.123+02:00`) instead of UTC `Z` timestamps.
//! The date portion drives the daily log file names.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

/// strftime pattern without fractional seconds
const ISO8601_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// strftime pattern with zero-padded milliseconds
const ISO8601_OFFSET_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Current local time as `YYYY-MM-DDTHH:mm:ss[.SSS]±HH:MM`
///
/// # Examples
///
/// ```
/// use rust_routed_logger::core::timestamp;
///
/// let stamp = timestamp::now(true);
/// assert_eq!(&stamp[10..11], "T");
/// assert_eq!(stamp.len(), 29);
/// ```
#[must_use]
pub fn now(with_millis: bool) -> String {
    format(&Local::now(), with_millis)
}

/// Current local date as `YYYY-MM-DD`
#[must_use]
pub fn date_only() -> String {
    date_of(&now(false)).to_string()
}

/// Current local time as `HH:mm:ss±HH:MM`, or `HH:mm:ss` without the offset
#[must_use]
pub fn time_only(with_offset: bool) -> String {
    let stamp = now(false);
    if with_offset {
        stamp[11..].to_string()
    } else {
        stamp[11..19].to_string()
    }
}

/// Format any zoned datetime with its own offset
#[must_use]
pub fn format<Tz>(datetime: &DateTime<Tz>, with_millis: bool) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let pattern = if with_millis {
        ISO8601_OFFSET_MILLIS
    } else {
        ISO8601_OFFSET
    };
    datetime.format(pattern).to_string()
}

/// The `YYYY-MM-DD` prefix of a timestamp produced by [`format`]
///
/// Input without a ten byte prefix on a char boundary is returned whole.
#[must_use]
pub(crate) fn date_of(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at_offset(offset_secs: i32) -> DateTime<FixedOffset> {
        // 2025-01-08 09:05:04.007 in the given offset
        FixedOffset::east_opt(offset_secs)
            .expect("valid offset")
            .with_ymd_and_hms(2025, 1, 8, 9, 5, 4)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(7)
    }

    #[test]
    fn test_positive_offset() {
        let result = format(&at_offset(2 * 3600), false);
        assert_eq!(result, "2025-01-08T09:05:04+02:00");
    }

    #[test]
    fn test_negative_offset_with_minutes() {
        let result = format(&at_offset(-(3 * 3600 + 30 * 60)), false);
        assert_eq!(result, "2025-01-08T09:05:04-03:30");
    }

    #[test]
    fn test_zero_offset_uses_plus_sign() {
        let result = format(&at_offset(0), false);
        assert_eq!(result, "2025-01-08T09:05:04+00:00");
    }

    #[test]
    fn test_millis_are_zero_padded() {
        let result = format(&at_offset(3600), true);
        assert_eq!(result, "2025-01-08T09:05:04.007+01:00");
    }

    #[test]
    fn test_date_of() {
        assert_eq!(date_of("2025-01-08T09:05:04.007+01:00"), "2025-01-08");
    }

    #[test]
    fn test_date_of_short_or_multibyte_input() {
        assert_eq!(date_of("2025-01"), "2025-01");
        assert_eq!(date_of(""), "");
        // byte 10 falls inside 'é'
        assert_eq!(date_of("2025-01-0é"), "2025-01-0é");
    }

    #[test]
    fn test_now_shape() {
        let with_millis = now(true);
        assert_eq!(with_millis.len(), 29);
        assert_eq!(&with_millis[19..20], ".");

        let without = now(false);
        assert_eq!(without.len(), 25);
        let sign = &without[19..20];
        assert!(sign == "+" || sign == "-");
    }

    #[test]
    fn test_date_and_time_only() {
        assert_eq!(date_only().len(), 10);
        assert_eq!(time_only(false).len(), 8);
        assert_eq!(time_only(true).len(), 14);
    }
}
