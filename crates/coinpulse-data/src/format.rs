//! Per-source parse configuration.
//!
//! The two tabular inputs use different delimiters and different date
//! representations, so each source carries its own `SourceFormat` rather
//! than sharing a single parser configuration.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse configuration for one delimited input source.
#[derive(Debug, Clone, Copy)]
pub struct SourceFormat {
    /// Short name used in error messages and warnings.
    pub name: &'static str,

    /// Field delimiter byte.
    pub delimiter: u8,

    /// Accepted `chrono` date formats, tried in order.
    pub date_formats: &'static [&'static str],
}

/// Format of the scored sentiment file (comma-separated, date-only cells).
pub const SENTIMENT_FORMAT: SourceFormat = SourceFormat {
    name: "sentiment",
    delimiter: b',',
    date_formats: &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"],
};

/// Format of the price history file (semicolon-separated; timestamps may
/// carry a time-of-day component which is stripped).
pub const PRICE_FORMAT: SourceFormat = SourceFormat {
    name: "price",
    delimiter: b';',
    date_formats: &[
        "%Y-%m-%d",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ],
};

/// Format of a headline file (comma-separated, no date column).
pub const HEADLINE_FORMAT: SourceFormat = SourceFormat {
    name: "headlines",
    delimiter: b',',
    date_formats: &["%Y-%m-%d"],
};

impl SourceFormat {
    /// Parse a date cell, trying each accepted format and finally RFC 3339.
    ///
    /// Any time-of-day or timezone offset is dropped so that downstream
    /// joins compare calendar dates only.
    pub fn parse_date(&self, value: &str) -> Option<NaiveDate> {
        let value = value.trim();
        for fmt in self.date_formats {
            if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
                return Some(dt.date());
            }
            if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
                return Some(date);
            }
        }
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2021-01-05")]
    #[case("2021-01-05 13:45:00")]
    #[case("2021-01-05T13:45:00")]
    #[case("2021-01-05T13:45:00.250")]
    #[case("2021-01-05T13:45:00+02:00")]
    fn test_price_dates_normalize_to_midnight(#[case] raw: &str) {
        let date = PRICE_FORMAT.parse_date(raw).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 1, 5).unwrap());
    }

    #[test]
    fn test_sentiment_slash_format() {
        let date = SENTIMENT_FORMAT.parse_date("01/05/2021").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 1, 5).unwrap());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(SENTIMENT_FORMAT.parse_date("last tuesday").is_none());
        assert!(PRICE_FORMAT.parse_date("").is_none());
    }
}
