//! Close-approach timestamp conversions
//!
//! Source timestamps come in the compact CAD form `1900-Jan-01 00:11`.
//! The canonical output form is `1900-01-01 00:11`.

use chrono::{NaiveDate, NaiveDateTime};

/// Formats accepted for a full timestamp, tried in order
const DATETIME_FORMATS: [&str; 2] = ["%Y-%b-%d %H:%M", "%Y-%m-%d %H:%M"];

/// Formats accepted for a date-only timestamp, tried in order
const DATE_FORMATS: [&str; 2] = ["%Y-%b-%d", "%Y-%m-%d"];

/// Canonical output format
const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses a source timestamp.
///
/// Date-only input is promoted to midnight. Returns `None` when the input
/// matches none of the accepted forms.
pub fn parse_approach_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    for format in DATETIME_FORMATS {
        if let Ok(time) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(time);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Formats a timestamp in canonical `YYYY-MM-DD HH:MM` form
pub fn format_approach_time(time: &NaiveDateTime) -> String {
    time.format(CANONICAL_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_compact_cad_form() {
        let time = parse_approach_time("1900-Jan-01 00:11").unwrap();
        assert_eq!(format_approach_time(&time), "1900-01-01 00:11");
    }

    #[test]
    fn test_parses_numeric_form() {
        let time = parse_approach_time("2020-01-01 00:00").unwrap();
        assert_eq!(time.date(), NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }

    #[test]
    fn test_date_only_promoted_to_midnight() {
        let time = parse_approach_time("2021-Mar-15").unwrap();
        assert_eq!(format_approach_time(&time), "2021-03-15 00:00");

        let time = parse_approach_time("2021-03-15").unwrap();
        assert_eq!(format_approach_time(&time), "2021-03-15 00:00");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_approach_time("").is_none());
        assert!(parse_approach_time("yesterday").is_none());
        assert!(parse_approach_time("2020-13-01 00:00").is_none());
    }
}
