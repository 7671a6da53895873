//! Calendar math on local wall-clock date-times.
//!
//! Every function takes its argument by value and returns a new value; no
//! timezone handling beyond what `NaiveDateTime` gives us.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::constants::{DAYS_PER_WEEK, WEEK_START};
use crate::error::{CommsCalError, CommsCalResult};

/// Truncate to 00:00:00.000 of the same day.
pub fn start_of_day(d: NaiveDateTime) -> NaiveDateTime {
    d.date().and_time(NaiveTime::MIN)
}

/// Last representable millisecond of the same day (23:59:59.999).
pub fn end_of_day(d: NaiveDateTime) -> NaiveDateTime {
    start_of_day(d) + Duration::days(1) - Duration::milliseconds(1)
}

/// The Sunday at or before `d`, at start of day.
pub fn start_of_week(d: NaiveDateTime) -> NaiveDateTime {
    let offset = (d.weekday().num_days_from_sunday() + DAYS_PER_WEEK as u32
        - WEEK_START.num_days_from_sunday())
        % DAYS_PER_WEEK as u32;
    start_of_day(d - Duration::days(offset as i64))
}

/// The Saturday closing the week of `d`, at end of day.
pub fn end_of_week(d: NaiveDateTime) -> NaiveDateTime {
    end_of_day(start_of_week(d) + Duration::days(DAYS_PER_WEEK - 1))
}

/// First day of `d`'s month, at start of day.
pub fn start_of_month(d: NaiveDateTime) -> NaiveDateTime {
    start_of_day(d - Duration::days(d.day0() as i64))
}

/// Last day of `d`'s month, at end of day.
pub fn end_of_month(d: NaiveDateTime) -> NaiveDateTime {
    // Day 1 + 32 always lands in the following month
    let next_month = start_of_month(start_of_month(d) + Duration::days(32));
    end_of_day(next_month - Duration::days(1))
}

/// Seven consecutive days starting at `week_start`.
pub fn enumerate_week_days(week_start: NaiveDateTime) -> Vec<NaiveDateTime> {
    (0..DAYS_PER_WEEK)
        .map(|i| week_start + Duration::days(i))
        .collect()
}

/// Week starts covering every day of the month containing `month`.
///
/// Runs from the week of the 1st up to and including the week of the last
/// day, so the first and last weeks may spill into neighbouring months.
pub fn enumerate_month_weeks(month: NaiveDateTime) -> Vec<NaiveDateTime> {
    let first_week = start_of_week(start_of_month(month));
    let last_week = start_of_week(end_of_month(month));

    let mut weeks = Vec::new();
    let mut current = first_week;
    while current <= last_week {
        weeks.push(current);
        current += Duration::days(DAYS_PER_WEEK);
    }
    weeks
}

/// Calendar-day equality, ignoring time of day.
pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Same calendar day as `today` (passed in so this stays a pure function).
pub fn is_today(d: NaiveDateTime, today: NaiveDate) -> bool {
    d.date() == today
}

/// Whether `day` belongs to the same year and month as `month`.
pub fn is_in_month(day: NaiveDateTime, month: NaiveDateTime) -> bool {
    day.year() == month.year() && day.month() == month.month()
}

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> CommsCalResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CommsCalError::InvalidDate(s.to_string()))
}
