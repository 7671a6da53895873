use chrono::{NaiveDate, NaiveDateTime};
use commscal_core::bucket::{get_events_for_month, get_events_for_week};
use commscal_core::constants::{MIN_EVENT_HEIGHT_PX, SLOT_HEIGHT_PX};
use commscal_core::entry::{Category, load_entries};
use commscal_core::layout::position_for;
use commscal_core::view::{CalendarQuery, CalendarView, ViewData, assemble};
use commscal_core::{CommsCalError, ValidationError, calculate_event_position, convert_entries};

const ENTRIES: &str = r#"[
  {
    "id": "launch",
    "title": "Clean energy launch",
    "category": ["event", "news release"],
    "issue": true,
    "scheduleStatus": "confirmed",
    "startDate": "2024-03-10T09:00",
    "endDate": "2024-03-10T10:00",
    "allDay": false,
    "representatives": ["Minister of Energy"],
    "location": {"address": "100 Main St", "city": "Regina", "province": "SK", "postalCode": "S4P 0A1", "country": "Canada"}
  },
  {
    "id": "observance",
    "title": "Agriculture week",
    "category": ["observance"],
    "scheduleStatus": "tentative",
    "startDate": "2024-03-10T00:00",
    "endDate": "2024-03-10T23:59",
    "allDay": true,
    "representatives": []
  },
  {
    "id": "standup",
    "title": "Radio hit",
    "category": [],
    "startDate": "2024-03-10T09:15",
    "endDate": "2024-03-10T09:20",
    "allDay": false,
    "representatives": ["Minister of Agriculture"]
  },
  {
    "id": "early-riser",
    "title": "TV panel",
    "category": ["tv"],
    "startDate": "2024-03-10T08:00",
    "endDate": "2024-03-10T08:45",
    "allDay": false
  }
]"#;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn at_midnight(s: &str) -> NaiveDateTime {
    date(s).and_hms_opt(0, 0, 0).unwrap()
}

#[test]
fn entries_to_month_view() {
    let entries = load_entries(ENTRIES).expect("parse entries");
    let events = convert_entries(&entries).expect("convert entries");

    assert_eq!(events[0].category, Category::Event);
    assert_eq!(events[0].location.as_deref(), Some("Regina, SK"));
    assert_eq!(events[2].category, Category::Other);

    let month = get_events_for_month(&events, at_midnight("2024-03-01"));
    assert_eq!(month.weeks.first().unwrap().week_start, at_midnight("2024-02-25"));
    assert!(month.weeks.last().unwrap().week_end >= month.month_end);

    let march_10 = month
        .days()
        .find(|d| d.date == date("2024-03-10"))
        .expect("March 10 in grid");
    let order: Vec<&str> = march_10.events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(order, vec!["observance", "early-riser", "launch", "standup"]);
}

#[test]
fn positions_match_the_hour_grid() {
    let events = convert_entries(&load_entries(ENTRIES).unwrap()).unwrap();

    let launch = calculate_event_position(&events[0], SLOT_HEIGHT_PX);
    assert_eq!((launch.top, launch.height), (360.0, 40.0));

    let radio_hit = calculate_event_position(&events[2], 40.0);
    assert_eq!(radio_hit.height, MIN_EVENT_HEIGHT_PX);

    assert!(position_for(&events[1]).is_none());
}

#[test]
fn week_view_via_query_with_search() {
    let events = convert_entries(&load_entries(ENTRIES).unwrap()).unwrap();
    let query = CalendarQuery::new(CalendarView::Week, date("2024-03-13")).with_search("minister");

    let ViewData::Week(week) = assemble(&events, &query, date("2024-03-13")) else {
        panic!("Expected week view");
    };

    assert_eq!(week.days.len(), 7);
    let sunday = &week.days[0];
    assert_eq!(sunday.date, date("2024-03-10"));
    assert!(sunday.all_day.is_empty());
    let ids: Vec<&str> = sunday.timed.iter().map(|p| p.event.id.as_str()).collect();
    assert_eq!(ids, vec!["launch", "standup"]);
}

#[test]
fn empty_entry_list_still_builds_grids() {
    let events = convert_entries(&load_entries("[]").unwrap()).unwrap();

    let week = get_events_for_week(&events, at_midnight("2024-03-10"));
    assert_eq!(week.days.len(), 7);
    assert!(week.days.iter().all(|d| d.events.is_empty()));

    let month = get_events_for_month(&events, at_midnight("2024-02-01"));
    assert_eq!(month.days().count(), month.weeks.len() * 7);
}

#[test]
fn missing_timestamp_fails_at_the_boundary() {
    let entries = load_entries(r#"[{"id": "x", "title": "No dates"}]"#).unwrap();

    let err: CommsCalError = convert_entries(&entries).unwrap_err().into();
    assert!(matches!(
        err,
        CommsCalError::Validation(ValidationError::MissingField("startDate"))
    ));
}
