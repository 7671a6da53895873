//! Calendar events: the normalized projection of a communication entry.
//!
//! Entries are converted once, up front, and every bucketing and layout
//! function downstream works exclusively with [`CalendarEvent`].

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::entry::{Category, CommunicationEntry, ScheduleStatus};
use crate::error::ValidationError;

/// A calendar event (immutable once created)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Id of the source entry
    pub id: String,
    pub title: String,
    /// First category of the source entry, see [`display_category`]
    pub category: Category,
    /// Local wall-clock start
    pub start: NaiveDateTime,
    /// Local wall-clock end. Expected to be >= `start` but not enforced here.
    pub end: NaiveDateTime,
    /// When set, time-of-day of `start`/`end` carries no layout meaning
    pub all_day: bool,
    /// High-priority marker (display only)
    pub issue: bool,
    pub schedule_status: ScheduleStatus,
    /// Flattened "{city}, {province}"
    pub location: Option<String>,
    pub representatives: Vec<String>,
}

impl CalendarEvent {
    /// Whether the event takes a position in the time grid.
    pub fn is_timed(&self) -> bool {
        !self.all_day
    }
}

/// The category shown on the calendar for an entry.
///
/// Entries may carry several categories but the calendar only has room for
/// one, so only the first is kept. Entries without any show as `Other`.
pub fn display_category(categories: &[Category]) -> Category {
    categories.first().copied().unwrap_or(Category::Other)
}

/// Normalize a communication entry into a calendar event.
///
/// Fails only on contract violations: a missing or unparseable timestamp.
pub fn convert_to_calendar_event(
    entry: &CommunicationEntry,
) -> Result<CalendarEvent, ValidationError> {
    if entry.id.is_empty() {
        return Err(ValidationError::MissingField("id"));
    }

    let start = parse_entry_timestamp(entry, "startDate", &entry.start_date)?;
    let end = parse_entry_timestamp(entry, "endDate", &entry.end_date)?;

    if entry.category.len() > 1 {
        tracing::trace!(id = %entry.id, dropped = entry.category.len() - 1, "keeping first category only");
    }

    Ok(CalendarEvent {
        id: entry.id.clone(),
        title: entry.title.clone(),
        category: display_category(&entry.category),
        start,
        end,
        all_day: entry.all_day,
        issue: entry.issue,
        schedule_status: entry.schedule_status,
        location: entry.location.as_ref().map(|l| l.display()),
        representatives: entry.representatives.clone(),
    })
}

/// Convert a whole list, failing at the first invalid entry.
pub fn convert_entries(
    entries: &[CommunicationEntry],
) -> Result<Vec<CalendarEvent>, ValidationError> {
    let events = entries
        .iter()
        .map(convert_to_calendar_event)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = events.len(), "converted entries to calendar events");

    Ok(events)
}

fn parse_entry_timestamp(
    entry: &CommunicationEntry,
    field: &'static str,
    value: &str,
) -> Result<NaiveDateTime, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }

    parse_timestamp(value).ok_or_else(|| ValidationError::InvalidTimestamp {
        id: entry.id.clone(),
        field,
        value: value.to_string(),
    })
}

/// Parse an ISO-8601 timestamp into local wall-clock time.
///
/// - RFC 3339 with an offset (`2024-03-10T09:00:00Z`) is shifted to local time
/// - Naive date-times (`2024-03-10T09:00`, seconds and fractions optional) are
///   taken as local time as-is
/// - Bare dates (`2024-03-10`) become local midnight
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}
