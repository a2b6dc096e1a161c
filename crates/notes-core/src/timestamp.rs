//! Timestamp Labels
//!
//! Label appended to every note at creation, e.g.
//! `Sunday, 7 Jan 2024, 3.30.007 PM` (12-hour clock, minutes and
//! milliseconds zero-padded, seconds not shown).

use chrono::{Local, NaiveDateTime};

const LABEL_FORMAT: &str = "%A, %-d %b %Y, %-I.%M.%3f %p";

/// Format a wall-clock instant as a note label
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(LABEL_FORMAT).to_string()
}

/// Current local wall-clock time
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 7)
            .unwrap()
            .and_hms_milli_opt(h, m, s, ms)
            .unwrap()
    }

    #[test]
    fn test_afternoon_label() {
        assert_eq!(format_timestamp(&at(15, 30, 45, 7)), "Sunday, 7 Jan 2024, 3.30.007 PM");
    }

    #[test]
    fn test_midnight_and_noon_use_twelve() {
        assert_eq!(format_timestamp(&at(0, 5, 0, 120)), "Sunday, 7 Jan 2024, 12.05.120 AM");
        assert_eq!(format_timestamp(&at(12, 0, 59, 999)), "Sunday, 7 Jan 2024, 12.00.999 PM");
    }

    #[test]
    fn test_deterministic() {
        let instant = at(9, 1, 2, 3);
        assert_eq!(format_timestamp(&instant), format_timestamp(&instant));
        assert_eq!(format_timestamp(&instant), "Sunday, 7 Jan 2024, 9.01.003 AM");
    }
}
