//! Layout constants shared by the day, week and month views.

use chrono::Weekday;

/// Pixel height of one hour in the day/week time grid.
pub const SLOT_HEIGHT_PX: f64 = 40.0;

/// Smallest height a timed event is ever drawn with.
pub const MIN_EVENT_HEIGHT_PX: f64 = 20.0;

/// Weeks always start on Sunday and span seven days.
pub const WEEK_START: Weekday = Weekday::Sun;

pub const DAYS_PER_WEEK: i64 = 7;

pub const HOURS_PER_DAY: u32 = 24;

/// Events listed in a month cell before collapsing into "+N more".
pub const MONTH_CELL_VISIBLE_EVENTS: usize = 3;
