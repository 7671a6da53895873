//! Grouping events into day, week and month windows.
//!
//! An event belongs to exactly one day: the day it starts on. Multi-day
//! events are not split across the days they cover.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::date_range::{
    end_of_month, end_of_week, enumerate_month_weeks, is_same_day, start_of_month, start_of_week,
};
use crate::event::CalendarEvent;

/// Events starting on one calendar day.
///
/// All-day events come first, then timed events by ascending start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub events: Vec<CalendarEvent>,
}

impl DayBucket {
    pub fn all_day_events(&self) -> impl Iterator<Item = &CalendarEvent> {
        self.events.iter().filter(|e| e.all_day)
    }

    pub fn timed_events(&self) -> impl Iterator<Item = &CalendarEvent> {
        self.events.iter().filter(|e| e.is_timed())
    }
}

/// Seven day buckets, Sunday through Saturday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekBucket {
    pub week_start: NaiveDateTime,
    pub week_end: NaiveDateTime,
    pub days: Vec<DayBucket>,
}

/// Every week that intersects a month. Leading and trailing days from the
/// neighbouring months are included; see [`crate::date_range::is_in_month`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthBucket {
    pub month_start: NaiveDateTime,
    pub month_end: NaiveDateTime,
    pub weeks: Vec<WeekBucket>,
}

impl MonthBucket {
    pub fn days(&self) -> impl Iterator<Item = &DayBucket> {
        self.weeks.iter().flat_map(|w| w.days.iter())
    }
}

/// Bucket events by start day for every day in `[range_start, range_end]`.
///
/// Days without events still get an (empty) bucket. Sorting is stable, so
/// events with identical keys keep their input order.
pub fn group_events_by_day(
    events: &[CalendarEvent],
    range_start: NaiveDateTime,
    range_end: NaiveDateTime,
) -> Vec<DayBucket> {
    let mut by_day: HashMap<NaiveDate, Vec<&CalendarEvent>> = HashMap::new();
    for event in events {
        by_day.entry(event.start.date()).or_default().push(event);
    }

    let mut days = Vec::new();
    let mut next = Some(range_start.date());
    let last = range_end.date();

    while let Some(date) = next.filter(|d| *d <= last) {
        let mut day_events: Vec<CalendarEvent> = by_day
            .get(&date)
            .map(|evs| evs.iter().map(|e| (*e).clone()).collect())
            .unwrap_or_default();

        sort_day_events(&mut day_events);

        days.push(DayBucket {
            date,
            events: day_events,
        });

        next = date.succ_opt();
    }

    tracing::debug!(
        from = %range_start.date(),
        to = %last,
        days = days.len(),
        events = days.iter().map(|d| d.events.len()).sum::<usize>(),
        "grouped events by day"
    );

    days
}

/// All-day first, then by start time. Stable.
pub fn sort_day_events(events: &mut [CalendarEvent]) {
    events.sort_by(|a, b| b.all_day.cmp(&a.all_day).then(a.start.cmp(&b.start)));
}

/// Events starting on `day`, in input order.
pub fn get_events_for_day(events: &[CalendarEvent], day: NaiveDateTime) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter(|e| is_same_day(e.start, day))
        .cloned()
        .collect()
}

/// The week containing `anchor`, bucketed by day.
///
/// `anchor` is normalized to its Sunday so the result always has seven days.
pub fn get_events_for_week(events: &[CalendarEvent], anchor: NaiveDateTime) -> WeekBucket {
    let week_start = start_of_week(anchor);
    let week_end = end_of_week(week_start);

    WeekBucket {
        week_start,
        week_end,
        days: group_events_by_day(events, week_start, week_end),
    }
}

/// The month containing `anchor`, as a grid of full weeks.
pub fn get_events_for_month(events: &[CalendarEvent], anchor: NaiveDateTime) -> MonthBucket {
    let month_start = start_of_month(anchor);
    let month_end = end_of_month(month_start);

    let weeks = enumerate_month_weeks(month_start)
        .into_iter()
        .map(|week_start| get_events_for_week(events, week_start))
        .collect();

    MonthBucket {
        month_start,
        month_end,
        weeks,
    }
}
