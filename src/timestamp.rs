//! Fixed-width `YYMMDDHHMMSS` timestamps used by the meter API

use chrono::NaiveDateTime;

/// Wire format for range queries and meter readings
pub const API_TIMESTAMP_FORMAT: &str = "%y%m%d%H%M%S";

/// Format a meter timestamp (`YYMMDDHHMMSS`) as `HH:MM:SS`.
///
/// Pieces are taken at fixed character offsets. A short string yields
/// short or empty pieces instead of failing.
pub fn format_timestamp(timestamp: &str) -> String {
    let hour = slice_chars(timestamp, 6, 8);
    let minute = slice_chars(timestamp, 8, 10);
    let second = slice_chars(timestamp, 10, 12);

    format!("{}:{}:{}", hour, minute, second)
}

/// Encode a local wall-clock instant for the range API
pub fn format_api_timestamp(instant: &NaiveDateTime) -> String {
    instant.format(API_TIMESTAMP_FORMAT).to_string()
}

/// Parse a `YYMMDDHHMMSS` timestamp, rejecting impossible dates
pub fn parse_api_timestamp(value: &str) -> Option<NaiveDateTime> {
    if value.len() != 12 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDateTime::parse_from_str(value, API_TIMESTAMP_FORMAT).ok()
}

/// Format an instant as `HH:MM` for tooltips
pub fn format_tooltip_time(instant: &NaiveDateTime) -> String {
    instant.format("%H:%M").to_string()
}

/// Character range `[start, end)` clamped to the string length
fn slice_chars(value: &str, start: usize, end: usize) -> &str {
    let byte_at = |idx: usize| {
        value
            .char_indices()
            .nth(idx)
            .map(|(i, _)| i)
            .unwrap_or(value.len())
    };
    &value[byte_at(start)..byte_at(end)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Timelike};

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("250614153045"), "15:30:45");
        assert_eq!(format_timestamp("991231235959"), "23:59:59");
    }

    #[test]
    fn test_format_timestamp_ignores_trailing_characters() {
        // Offsets are fixed, anything past position 12 is dropped
        assert_eq!(format_timestamp("250614153045S"), "15:30:45");
    }

    #[test]
    fn test_format_timestamp_short_input() {
        assert_eq!(format_timestamp("2506141530"), "15:30:");
        assert_eq!(format_timestamp("2506141"), "1::");
        assert_eq!(format_timestamp(""), "::");
    }

    #[test]
    fn test_format_api_timestamp_zero_pads() {
        let instant = NaiveDate::from_ymd_opt(2005, 3, 7)
            .unwrap()
            .and_hms_opt(4, 5, 6)
            .unwrap();

        assert_eq!(format_api_timestamp(&instant), "050307040506");
    }

    #[test]
    fn test_api_timestamp_round_trip() {
        let samples = [
            (2025, 6, 14, 15, 30, 45),
            (1999, 12, 31, 23, 59, 59),
            (2024, 2, 29, 0, 0, 0),
            (2100, 1, 1, 12, 0, 1),
        ];

        for (y, mo, d, h, mi, s) in samples {
            let instant = NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_opt(h, mi, s)
                .unwrap();
            let encoded = format_api_timestamp(&instant);
            let decoded = parse_api_timestamp(&encoded).unwrap();

            assert_eq!(decoded.year() % 100, y % 100);
            assert_eq!(decoded.month(), mo);
            assert_eq!(decoded.day(), d);
            assert_eq!(decoded.hour(), h);
            assert_eq!(decoded.minute(), mi);
            assert_eq!(decoded.second(), s);
        }
    }

    #[test]
    fn test_parse_api_timestamp_rejects_invalid() {
        assert!(parse_api_timestamp("251314153045").is_none()); // month 13
        assert!(parse_api_timestamp("250230120000").is_none()); // Feb 30
        assert!(parse_api_timestamp("250614246045").is_none()); // hour 24
        assert!(parse_api_timestamp("2506141530").is_none());
        assert!(parse_api_timestamp("25061415304a").is_none());
    }

    #[test]
    fn test_format_tooltip_time() {
        let instant = NaiveDate::from_ymd_opt(2025, 6, 14)
            .unwrap()
            .and_hms_opt(9, 5, 59)
            .unwrap();

        assert_eq!(format_tooltip_time(&instant), "09:05");
    }
}
