//! Calendar event-layout engine for communication entries.
//!
//! Turns a flat list of [`entry::CommunicationEntry`] records into date-bucketed,
//! geometrically positioned calendar data:
//! - `event` normalizes entries into [`CalendarEvent`]s
//! - `date_range` holds the day/week/month calendar math
//! - `bucket` groups events by day, week and month
//! - `layout` positions timed events in the hourly grid
//! - `view` composes the above into day, week and month views
//!
//! Everything except `config` is pure and synchronous.

pub mod bucket;
pub mod config;
pub mod constants;
pub mod date_range;
pub mod entry;
pub mod error;
pub mod event;
pub mod format;
pub mod layout;
pub mod view;

pub use bucket::{DayBucket, MonthBucket, WeekBucket};
pub use error::{CommsCalError, CommsCalResult, ValidationError};
pub use event::{CalendarEvent, convert_entries, convert_to_calendar_event};
pub use layout::{EventPosition, calculate_event_position};
pub use view::{CalendarQuery, CalendarView, ViewData};
