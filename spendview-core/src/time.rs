//! Timestamp parsing and display formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// The upload format: "2024-03-05T14:30:00".
const STRICT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Display form: "05 Mar 2024, 02:30 PM".
const DISPLAY_FORMAT: &str = "%d %b %Y, %I:%M %p";

/// Shapes the permissive fallback accepts when the strict parse fails
/// (fractional seconds, space separator, minute precision).
const FALLBACK_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Date-only fallbacks, taken as midnight.
const FALLBACK_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Parse a raw upload timestamp: strict ISO-like form first, then the
/// permissive fallbacks. `None` when nothing accepts it.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, STRICT_FORMAT) {
        return Some(dt);
    }

    // RFC 3339 with an offset: keep the wall-clock time as written.
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    for fmt in FALLBACK_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }

    for fmt in FALLBACK_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Format a raw timestamp for display, e.g.
/// "2024-03-05T14:30:00" → "05 Mar 2024, 02:30 PM".
///
/// `None` means neither the strict nor the permissive parse succeeded;
/// callers must never show the raw string as if it were formatted.
pub fn format_timestamp(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|dt| dt.format(DISPLAY_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_afternoon() {
        assert_eq!(
            format_timestamp("2024-03-05T14:30:00").unwrap(),
            "05 Mar 2024, 02:30 PM"
        );
    }

    #[test]
    fn test_strict_just_after_midnight() {
        assert_eq!(
            format_timestamp("2024-03-05T00:05:00").unwrap(),
            "05 Mar 2024, 12:05 AM"
        );
    }

    #[test]
    fn test_fallback_fractional_seconds() {
        assert_eq!(
            format_timestamp("2024-03-05T14:30:00.123").unwrap(),
            "05 Mar 2024, 02:30 PM"
        );
    }

    #[test]
    fn test_fallback_offset_keeps_wall_clock() {
        assert_eq!(
            format_timestamp("2024-03-05T14:30:00+05:30").unwrap(),
            "05 Mar 2024, 02:30 PM"
        );
    }

    #[test]
    fn test_fallback_space_separator() {
        assert_eq!(
            format_timestamp("2024-03-05 09:15:00").unwrap(),
            "05 Mar 2024, 09:15 AM"
        );
    }

    #[test]
    fn test_fallback_date_only_is_midnight() {
        assert_eq!(
            format_timestamp("2024-03-05").unwrap(),
            "05 Mar 2024, 12:00 AM"
        );
    }

    #[test]
    fn test_unparseable_is_none() {
        assert_eq!(format_timestamp("not a date"), None);
        assert_eq!(format_timestamp(""), None);
    }
}
