//! Day, week and month view assembly.
//!
//! These functions only compose bucketing and layout; they hold no state.
//! Everything is recomputed per call. Callers that want caching can key it on
//! [`CalendarQuery`] plus the version of their entry list.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::bucket::{DayBucket, get_events_for_month, get_events_for_week, group_events_by_day};
use crate::constants::{DAYS_PER_WEEK, MONTH_CELL_VISIBLE_EVENTS, SLOT_HEIGHT_PX};
use crate::date_range::{end_of_day, is_in_month, is_today, start_of_day};
use crate::error::CommsCalError;
use crate::event::CalendarEvent;
use crate::format::{format_long_date, format_month_year};
use crate::layout::{EventPosition, calculate_event_position};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    Day,
    Week,
    #[default]
    Month,
}

impl FromStr for CalendarView {
    type Err = CommsCalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(CalendarView::Day),
            "week" => Ok(CalendarView::Week),
            "month" => Ok(CalendarView::Month),
            other => Err(CommsCalError::InvalidView(other.to_string())),
        }
    }
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CalendarView::Day => "day",
            CalendarView::Week => "week",
            CalendarView::Month => "month",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Everything that determines a computed view. Usable as a cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarQuery {
    /// Version of the caller's entry list
    pub version: u64,
    pub view: CalendarView,
    pub anchor: NaiveDate,
    pub search: String,
}

impl CalendarQuery {
    pub fn new(view: CalendarView, anchor: NaiveDate) -> Self {
        CalendarQuery {
            version: 0,
            view,
            anchor,
            search: String::new(),
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }
}

/// A timed event with its place in the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedEvent {
    pub event: CalendarEvent,
    pub position: EventPosition,
}

/// One day column: an all-day row on top, positioned timed events below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayView {
    pub date: NaiveDate,
    pub is_today: bool,
    pub all_day: Vec<CalendarEvent>,
    pub timed: Vec<PositionedEvent>,
}

impl DayView {
    fn from_bucket(bucket: DayBucket, today: NaiveDate) -> Self {
        let (all_day, timed): (Vec<_>, Vec<_>) =
            bucket.events.into_iter().partition(|e| e.all_day);

        DayView {
            date: bucket.date,
            is_today: bucket.date == today,
            all_day,
            timed: timed
                .into_iter()
                .map(|event| PositionedEvent {
                    position: calculate_event_position(&event, SLOT_HEIGHT_PX),
                    event,
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.all_day.is_empty() && self.timed.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekView {
    pub week_start: NaiveDateTime,
    pub week_end: NaiveDateTime,
    pub days: Vec<DayView>,
}

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    /// At most [`MONTH_CELL_VISIBLE_EVENTS`], in bucket order
    pub events: Vec<CalendarEvent>,
    /// Events left out of `events` ("+N more")
    pub hidden: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthView {
    pub month_start: NaiveDateTime,
    pub month_end: NaiveDateTime,
    pub weeks: Vec<Vec<MonthCell>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewData {
    Day(DayView),
    Week(WeekView),
    Month(MonthView),
}

/// Case-insensitive search over title, category and representatives.
/// A blank query matches everything; otherwise the query is matched as
/// typed, surrounding whitespace included.
pub fn filter_events(events: &[CalendarEvent], query: &str) -> Vec<CalendarEvent> {
    if query.trim().is_empty() {
        return events.to_vec();
    }
    let query = query.to_lowercase();

    events
        .iter()
        .filter(|e| {
            e.title.to_lowercase().contains(&query)
                || e.category.label().contains(&query)
                || e.representatives
                    .iter()
                    .any(|r| r.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

pub fn assemble_day_view(events: &[CalendarEvent], day: NaiveDate, today: NaiveDate) -> DayView {
    let anchor = day.and_time(NaiveTime::MIN);

    let bucket = group_events_by_day(events, start_of_day(anchor), end_of_day(anchor))
        .into_iter()
        .next()
        .unwrap_or(DayBucket {
            date: day,
            events: Vec::new(),
        });

    DayView::from_bucket(bucket, today)
}

pub fn assemble_week_view(events: &[CalendarEvent], anchor: NaiveDate, today: NaiveDate) -> WeekView {
    let week = get_events_for_week(events, anchor.and_time(NaiveTime::MIN));

    WeekView {
        week_start: week.week_start,
        week_end: week.week_end,
        days: week
            .days
            .into_iter()
            .map(|day| DayView::from_bucket(day, today))
            .collect(),
    }
}

pub fn assemble_month_view(events: &[CalendarEvent], anchor: NaiveDate, today: NaiveDate) -> MonthView {
    let month = get_events_for_month(events, anchor.and_time(NaiveTime::MIN));
    let month_start = month.month_start;

    let weeks = month
        .weeks
        .into_iter()
        .map(|week| {
            week.days
                .into_iter()
                .map(|mut day| {
                    let day_start = day.date.and_time(NaiveTime::MIN);
                    let hidden = day.events.len().saturating_sub(MONTH_CELL_VISIBLE_EVENTS);
                    day.events.truncate(MONTH_CELL_VISIBLE_EVENTS);

                    MonthCell {
                        date: day.date,
                        in_month: is_in_month(day_start, month_start),
                        is_today: is_today(day_start, today),
                        events: day.events,
                        hidden,
                    }
                })
                .collect()
        })
        .collect();

    MonthView {
        month_start,
        month_end: month.month_end,
        weeks,
    }
}

/// Filter by the query's search text, then build the requested view.
pub fn assemble(events: &[CalendarEvent], query: &CalendarQuery, today: NaiveDate) -> ViewData {
    let filtered = filter_events(events, &query.search);

    tracing::debug!(
        view = %query.view,
        anchor = %query.anchor,
        matched = filtered.len(),
        total = events.len(),
        "assembling calendar view"
    );

    match query.view {
        CalendarView::Day => ViewData::Day(assemble_day_view(&filtered, query.anchor, today)),
        CalendarView::Week => ViewData::Week(assemble_week_view(&filtered, query.anchor, today)),
        CalendarView::Month => ViewData::Month(assemble_month_view(&filtered, query.anchor, today)),
    }
}

/// Move the anchor one day, week or month. Month steps clamp the day to the
/// length of the target month (Jan 31 -> Feb 29).
pub fn navigate(view: CalendarView, anchor: NaiveDate, direction: Direction) -> NaiveDate {
    let moved = match (view, direction) {
        (CalendarView::Day, Direction::Previous) => anchor.checked_sub_signed(Duration::days(1)),
        (CalendarView::Day, Direction::Next) => anchor.checked_add_signed(Duration::days(1)),
        (CalendarView::Week, Direction::Previous) => {
            anchor.checked_sub_signed(Duration::days(DAYS_PER_WEEK))
        }
        (CalendarView::Week, Direction::Next) => {
            anchor.checked_add_signed(Duration::days(DAYS_PER_WEEK))
        }
        (CalendarView::Month, Direction::Previous) => anchor.checked_sub_months(Months::new(1)),
        (CalendarView::Month, Direction::Next) => anchor.checked_add_months(Months::new(1)),
    };

    moved.unwrap_or(anchor)
}

/// Heading for the view, e.g. "March 2024" or "Sunday, March 10, 2024".
pub fn view_title(view: CalendarView, anchor: NaiveDate) -> String {
    match view {
        CalendarView::Day => format_long_date(anchor),
        CalendarView::Week | CalendarView::Month => format_month_year(anchor),
    }
}
