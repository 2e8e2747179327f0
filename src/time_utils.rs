// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an RFC3339 timestamp without normalizing it to UTC.
///
/// Week and weekday are taken in the offset the workout was logged with, so
/// a late Sunday session in UTC-3 stays on Sunday.
pub fn parse_rfc3339(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    #[test]
    fn test_parse_keeps_offset() {
        let parsed = parse_rfc3339("2024-03-10T23:30:00-03:00").unwrap();
        assert_eq!(parsed.weekday(), Weekday::Sun);
        assert_eq!(parsed.with_timezone(&Utc).weekday(), Weekday::Mon);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_rfc3339("yesterday").is_none());
        assert!(parse_rfc3339("").is_none());
        assert!(parse_rfc3339("2024-13-01T00:00:00Z").is_none());
    }

    #[test]
    fn test_format_utc_rfc3339() {
        let date = DateTime::from_timestamp(1_704_103_200, 0).unwrap();
        assert_eq!(format_utc_rfc3339(date), "2024-01-01T10:00:00Z");
    }
}
