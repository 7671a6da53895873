//! Display formatting for calendar labels.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// 12-hour clock, e.g. "09:15 AM"
pub fn format_time(t: NaiveTime) -> String {
    t.format("%I:%M %p").to_string()
}

/// Short date, e.g. "Sun, Mar 10"
pub fn format_date(d: NaiveDate) -> String {
    d.format("%a, %b %-d").to_string()
}

/// e.g. "March 2024"
pub fn format_month_year(d: NaiveDate) -> String {
    d.format("%B %Y").to_string()
}

/// e.g. "Sunday, March 10, 2024"
pub fn format_long_date(d: NaiveDate) -> String {
    d.format("%A, %B %-d, %Y").to_string()
}

/// "09:00 AM - 10:00 AM", or "All day"
pub fn format_time_range(start: NaiveDateTime, end: NaiveDateTime, all_day: bool) -> String {
    if all_day {
        return "All day".to_string();
    }
    format!("{} - {}", format_time(start.time()), format_time(end.time()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn formats_labels() {
        let t = NaiveTime::from_hms_opt(9, 15, 0).unwrap();
        assert_eq!(format_time(t), "09:15 AM");
        assert_eq!(format_time(NaiveTime::from_hms_opt(13, 0, 0).unwrap()), "01:00 PM");
        assert_eq!(format_date(date()), "Sun, Mar 10");
        assert_eq!(format_month_year(date()), "March 2024");
        assert_eq!(format_long_date(date()), "Sunday, March 10, 2024");
    }

    #[test]
    fn time_range() {
        let start = date().and_hms_opt(9, 0, 0).unwrap();
        let end = date().and_hms_opt(10, 30, 0).unwrap();
        assert_eq!(format_time_range(start, end, false), "09:00 AM - 10:30 AM");
        assert_eq!(format_time_range(start, end, true), "All day");
    }
}
