//! Vertical placement of timed events in the day/week time grid.
//!
//! Each hour is one slot of `slot_height` pixels. Events are positioned from
//! their time of day only, so an event ending past midnight gets a negative
//! raw height and is drawn at the minimum height. Overlapping events are not
//! split into columns; they are simply drawn over each other.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::constants::{HOURS_PER_DAY, MIN_EVENT_HEIGHT_PX, SLOT_HEIGHT_PX};
use crate::event::CalendarEvent;

/// Pixel offset and height of an event in the time grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventPosition {
    pub top: f64,
    pub height: f64,
}

/// Hours since midnight, with minutes as a fraction. Seconds are ignored.
pub fn fractional_hour(t: NaiveDateTime) -> f64 {
    t.hour() as f64 + t.minute() as f64 / 60.0
}

/// Position a timed event using the default minimum height.
pub fn calculate_event_position(event: &CalendarEvent, slot_height: f64) -> EventPosition {
    calculate_event_position_with_min(event, slot_height, MIN_EVENT_HEIGHT_PX)
}

pub fn calculate_event_position_with_min(
    event: &CalendarEvent,
    slot_height: f64,
    min_height: f64,
) -> EventPosition {
    let slot_height = slot_height.max(0.0);
    let start_hour = fractional_hour(event.start);
    let end_hour = fractional_hour(event.end);

    let raw_height = (end_hour - start_hour) * slot_height;

    EventPosition {
        top: start_hour * slot_height,
        height: raw_height.max(min_height),
    }
}

/// Position in the default grid, or `None` for all-day events which are
/// rendered in their own row instead.
pub fn position_for(event: &CalendarEvent) -> Option<EventPosition> {
    event
        .is_timed()
        .then(|| calculate_event_position(event, SLOT_HEIGHT_PX))
}

/// Start of each hourly slot, 00:00 through 23:00.
pub fn time_slots() -> Vec<NaiveTime> {
    (0..HOURS_PER_DAY)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .collect()
}

/// Total pixel height of a full day.
pub fn grid_height(slot_height: f64) -> f64 {
    HOURS_PER_DAY as f64 * slot_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Category, ScheduleStatus};

    fn event(start: &str, end: &str, all_day: bool) -> CalendarEvent {
        let parse = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap();
        CalendarEvent {
            id: "e".into(),
            title: "Interview".into(),
            category: Category::Radio,
            start: parse(start),
            end: parse(end),
            all_day,
            issue: false,
            schedule_status: ScheduleStatus::Unknown,
            location: None,
            representatives: vec![],
        }
    }

    #[test]
    fn one_hour_at_nine() {
        let pos = calculate_event_position(&event("2024-03-10T09:00", "2024-03-10T10:00", false), 40.0);
        assert_eq!(pos, EventPosition { top: 360.0, height: 40.0 });
    }

    #[test]
    fn short_event_gets_minimum_height() {
        let pos = calculate_event_position(&event("2024-03-10T09:15", "2024-03-10T09:20", false), 40.0);
        assert_eq!(pos.top, 370.0);
        assert_eq!(pos.height, MIN_EVENT_HEIGHT_PX);
    }

    #[test]
    fn minutes_are_fractional() {
        let pos = calculate_event_position(&event("2024-03-10T13:30", "2024-03-10T15:45", false), 40.0);
        assert_eq!(pos.top, 540.0);
        assert_eq!(pos.height, 90.0);
    }

    #[test]
    fn cross_midnight_degrades_to_minimum() {
        let pos = calculate_event_position(&event("2024-03-10T23:00", "2024-03-11T01:00", false), 40.0);
        assert_eq!(pos.top, 920.0);
        assert_eq!(pos.height, MIN_EVENT_HEIGHT_PX);
    }

    #[test]
    fn custom_minimum_height() {
        let e = event("2024-03-10T09:00", "2024-03-10T09:00", false);
        assert_eq!(calculate_event_position_with_min(&e, 40.0, 60.0).height, 60.0);
    }

    #[test]
    fn never_negative_top_or_below_minimum() {
        for hour in 0..24 {
            for minute in [0, 1, 29, 59] {
                let start = format!("2024-03-10T{hour:02}:{minute:02}");
                let e = event(&start, "2024-03-10T00:00", false);
                let pos = calculate_event_position(&e, SLOT_HEIGHT_PX);
                assert!(pos.top >= 0.0);
                assert!(pos.height >= MIN_EVENT_HEIGHT_PX);
            }
        }
    }

    #[test]
    fn all_day_events_are_not_positioned() {
        assert!(position_for(&event("2024-03-10T00:00", "2024-03-10T23:59", true)).is_none());
        assert!(position_for(&event("2024-03-10T09:00", "2024-03-10T10:00", false)).is_some());
    }

    #[test]
    fn slots_cover_the_day() {
        let slots = time_slots();
        assert_eq!(slots.len(), 24);
        assert_eq!(slots[0], NaiveTime::MIN);
        assert_eq!(slots[23].hour(), 23);
        assert_eq!(grid_height(SLOT_HEIGHT_PX), 960.0);
    }
}
