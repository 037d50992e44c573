//! Tests for database timestamp parsing
//!
//! Tests cover the accepted pattern, 12-hour rendering and the
//! unparsed fallback.

use chrono::{NaiveDate, Timelike};
use core_kernel::DbTimestamp;

mod parsing {
    use super::*;

    #[test]
    fn test_postgres_text_format() {
        let ts = DbTimestamp::parse("2024-07-15 09:45:30.000000");
        let dt = ts.datetime().unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
        assert_eq!(dt.hour(), 9);
        assert_eq!(dt.minute(), 45);
    }

    #[test]
    fn test_date_only_text_is_unparsed() {
        assert!(!DbTimestamp::parse("2024-07-15").is_parsed());
    }

    #[test]
    fn test_leading_garbage_is_unparsed() {
        assert!(!DbTimestamp::parse(" 2024-07-15 09:45:30").is_parsed());
    }

    #[test]
    fn test_display_of_unparsed_is_raw() {
        assert_eq!(DbTimestamp::parse("soon").to_string(), "soon");
    }
}

mod rendering {
    use super::*;

    #[test]
    fn test_date_label() {
        assert_eq!(DbTimestamp::parse("2024-07-15 09:45:30").date_label(), "15/07/2024");
    }

    #[test]
    fn test_morning_time() {
        assert_eq!(
            DbTimestamp::parse("2024-07-15 09:05:30").date_time_label(),
            "15/07/2024, 9:05 AM"
        );
    }

    #[test]
    fn test_midnight_renders_as_twelve() {
        assert_eq!(
            DbTimestamp::parse("2024-07-15 00:00:00").date_time_label(),
            "15/07/2024, 12:00 AM"
        );
    }

    #[test]
    fn test_evening_time() {
        assert_eq!(
            DbTimestamp::parse("2024-07-15 23:59:00").date_time_label(),
            "15/07/2024, 11:59 PM"
        );
    }
}
