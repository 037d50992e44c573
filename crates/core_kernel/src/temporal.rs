//! Database timestamp handling
//!
//! Timestamp columns reach the service as text (`YYYY-MM-DD HH:MM:SS.ffffff`,
//! or with a `T` separator). Parsing is fallible: text that does not match the
//! pattern is kept as `Unparsed` so callers decide how to surface it.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static TIMESTAMP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})[ T](\d{2}):(\d{2}):(\d{2})")
        .expect("timestamp pattern is a valid regex")
});

/// Date and time fields captured from timestamp text
///
/// Fields are kept as written, so a pattern match that names an impossible
/// date (e.g. `2024-02-30`) still renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimestampParts {
    /// Converts to a calendar date and time, if the fields name a real one
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_opt(self.hour, self.minute, self.second)
    }

    fn date_label(&self) -> String {
        format!("{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }

    fn time_label(&self) -> String {
        let period = if self.hour >= 12 { "PM" } else { "AM" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{hour}:{:02} {period}", self.minute)
    }
}

/// A database timestamp that may or may not have matched the expected pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbTimestamp {
    /// Text matched the pattern; fractional seconds are ignored
    Parsed(TimestampParts),
    /// Text did not match; the raw value is preserved
    Unparsed(String),
}

impl DbTimestamp {
    /// Parses timestamp text
    ///
    /// Only the leading `YYYY-MM-DD[ T]HH:MM:SS` is inspected, so trailing
    /// fractional seconds or offsets are accepted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use core_kernel::DbTimestamp;
    ///
    /// assert!(DbTimestamp::parse("2024-03-05 14:07:09.000000").is_parsed());
    /// assert!(!DbTimestamp::parse("yesterday").is_parsed());
    /// ```
    pub fn parse(raw: &str) -> Self {
        match Self::match_pattern(raw) {
            Some(parts) => DbTimestamp::Parsed(parts),
            None => DbTimestamp::Unparsed(raw.to_string()),
        }
    }

    fn match_pattern(raw: &str) -> Option<TimestampParts> {
        let caps = TIMESTAMP_PATTERN.captures(raw)?;
        let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

        Some(TimestampParts {
            year: caps.get(1)?.as_str().parse().ok()?,
            month: field(2)?,
            day: field(3)?,
            hour: field(4)?,
            minute: field(5)?,
            second: field(6)?,
        })
    }

    /// Returns true if the text matched the pattern
    pub fn is_parsed(&self) -> bool {
        matches!(self, DbTimestamp::Parsed(_))
    }

    /// Returns the parsed date and time, if the text names a real one
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        match self {
            DbTimestamp::Parsed(parts) => parts.to_datetime(),
            DbTimestamp::Unparsed(_) => None,
        }
    }

    /// Renders as `DD/MM/YYYY`, or the raw text when unparsed
    pub fn date_label(&self) -> String {
        match self {
            DbTimestamp::Parsed(parts) => parts.date_label(),
            DbTimestamp::Unparsed(raw) => raw.clone(),
        }
    }

    /// Renders as `DD/MM/YYYY, H:MM AM`, or the raw text when unparsed
    pub fn date_time_label(&self) -> String {
        match self {
            DbTimestamp::Parsed(parts) => format!("{}, {}", parts.date_label(), parts.time_label()),
            DbTimestamp::Unparsed(raw) => raw.clone(),
        }
    }
}

impl fmt::Display for DbTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbTimestamp::Parsed(p) => write!(
                f,
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                p.year, p.month, p.day, p.hour, p.minute, p.second
            ),
            DbTimestamp::Unparsed(raw) => f.write_str(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_microseconds() {
        let ts = DbTimestamp::parse("2024-03-05 14:07:09.123456");
        assert_eq!(ts.date_label(), "05/03/2024");
        assert_eq!(ts.date_time_label(), "05/03/2024, 2:07 PM");
    }

    #[test]
    fn test_parse_iso_separator() {
        let ts = DbTimestamp::parse("2023-12-31T00:30:00Z");
        assert_eq!(ts.date_time_label(), "31/12/2023, 12:30 AM");
    }

    #[test]
    fn test_noon_is_pm() {
        let ts = DbTimestamp::parse("2024-01-01 12:05:00");
        assert_eq!(ts.date_time_label(), "01/01/2024, 12:05 PM");
    }

    #[test]
    fn test_mismatch_is_unparsed() {
        let ts = DbTimestamp::parse("05/03/2024");
        assert_eq!(ts, DbTimestamp::Unparsed("05/03/2024".to_string()));
        assert_eq!(ts.date_label(), "05/03/2024");
    }

    #[test]
    fn test_impossible_date_renders_captured_fields() {
        let ts = DbTimestamp::parse("2024-02-30 10:00:00");
        assert!(ts.is_parsed());
        assert_eq!(ts.date_label(), "30/02/2024");
        assert_eq!(ts.date_time_label(), "30/02/2024, 10:00 AM");
        assert_eq!(ts.datetime(), None);
    }
}
