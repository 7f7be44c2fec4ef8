//! Lenient field parsing for ledger payloads.

use jiff::{Timestamp, civil::Date, tz::TimeZone};

/// Brief for any missing or malformed ledger field.
pub(crate) const INVALID_INPUT: &str =
    "Invalid input data, please ensure all fields are correctly formatted.";

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// `YYYY-MM-DD`, or an RFC 3339 timestamp reduced to its UTC date.
pub(crate) fn parse_date(value: &str) -> Option<Date> {
    value.parse::<Date>().ok().or_else(|| {
        value
            .parse::<Timestamp>()
            .ok()
            .map(|timestamp| timestamp.to_zoned(TimeZone::UTC).date())
    })
}

/// A positive count that fits the `INTEGER` columns.
pub(crate) fn parse_quantity(value: Option<i64>) -> Option<u32> {
    value
        .filter(|amount| *amount > 0)
        .and_then(|amount| i32::try_from(amount).ok())
        .and_then(|amount| u32::try_from(amount).ok())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn dates_and_timestamps_parse() {
        assert_eq!(parse_date("2024-06-03"), Some(date(2024, 6, 3)));
        assert_eq!(parse_date("2024-06-03T23:30:00Z"), Some(date(2024, 6, 3)));
        assert_eq!(parse_date("03/06/2024"), None);
    }

    #[test]
    fn quantities_must_be_positive_integers() {
        assert_eq!(parse_quantity(Some(3)), Some(3));
        assert_eq!(parse_quantity(Some(0)), None);
        assert_eq!(parse_quantity(Some(-1)), None);
        assert_eq!(parse_quantity(Some(i64::from(i32::MAX) + 1)), None);
        assert_eq!(parse_quantity(None), None);
    }

    #[test]
    fn blank_strings_are_missing() {
        assert_eq!(non_blank(Some("  Tuna ".to_string())), Some("Tuna".to_string()));
        assert_eq!(non_blank(Some("   ".to_string())), None);
    }
}
