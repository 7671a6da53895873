use chrono::{Datelike, NaiveTime, Timelike};
use commscal_core::constants::SLOT_HEIGHT_PX;
use commscal_core::entry::Category;
use commscal_core::event::CalendarEvent;
use commscal_core::format::{format_date, format_time, format_time_range};
use commscal_core::layout::time_slots;
use commscal_core::view::{
    CalendarQuery, DayView, MonthCell, MonthView, PositionedEvent, ViewData, WeekView, view_title,
};
use owo_colors::{AnsiColors, OwoColorize};

/// Hours always shown in the day grid, widened to fit earlier/later events
const WORKDAY_HOURS: (u32, u32) = (8, 18);

const CELL_WIDTH: usize = 5;

pub fn render_view(query: &CalendarQuery, data: &ViewData) -> String {
    let mut lines = vec![view_title(query.view, query.anchor).bold().to_string()];

    if !query.search.trim().is_empty() {
        lines.push(format!("Matching \"{}\"", query.search.trim()).dimmed().to_string());
    }
    lines.push(String::new());

    match data {
        ViewData::Day(day) => render_day(day, &mut lines),
        ViewData::Week(week) => render_week(week, &mut lines),
        ViewData::Month(month) => render_month(month, &mut lines),
    }

    lines.join("\n")
}

/// Hour grid: each timed event is listed in the slot its `top` falls in.
fn render_day(day: &DayView, lines: &mut Vec<String>) {
    if day.is_empty() {
        lines.push("No events".dimmed().to_string());
        return;
    }

    for event in &day.all_day {
        lines.push(format!("{:>10}  {}", "all-day".dimmed(), render_event(event)));
    }

    let slot_of = |p: &PositionedEvent| (p.position.top / SLOT_HEIGHT_PX).floor() as u32;
    let first = day.timed.iter().map(slot_of).min().unwrap_or(WORKDAY_HOURS.0);
    let last = day.timed.iter().map(slot_of).max().unwrap_or(WORKDAY_HOURS.1);
    let (from, to) = (first.min(WORKDAY_HOURS.0), last.max(WORKDAY_HOURS.1));

    for slot in time_slots().into_iter().filter(|t| (from..=to).contains(&t.hour())) {
        let starting: Vec<&PositionedEvent> =
            day.timed.iter().filter(|p| slot_of(*p) == slot.hour()).collect();

        if starting.is_empty() {
            lines.push(format!("{:>10}  {}", format_time(slot).dimmed(), "·".dimmed()));
            continue;
        }

        for (i, positioned) in starting.iter().enumerate() {
            let label = if i == 0 { format_time(slot) } else { String::new() };
            lines.push(format!(
                "{:>10}  {} {}",
                label,
                render_event(&positioned.event),
                format_time_range(positioned.event.start, positioned.event.end, false).dimmed()
            ));
        }
    }
}

fn render_week(week: &WeekView, lines: &mut Vec<String>) {
    for (i, day) in week.days.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }

        let header = format_date(day.date);
        if day.is_today {
            lines.push(format!("{} {}", header.bold().blue(), "(today)".blue()));
        } else {
            lines.push(header.bold().to_string());
        }

        if day.is_empty() {
            lines.push(format!("  {}", "No events".dimmed()));
            continue;
        }

        for event in &day.all_day {
            lines.push(format!("  {:>8}  {}", "all-day".dimmed(), render_event(event)));
        }
        for positioned in &day.timed {
            let time: NaiveTime = positioned.event.start.time();
            lines.push(format!("  {:>8}  {}", format_time(time), render_event(&positioned.event)));
        }
    }
}

fn render_month(month: &MonthView, lines: &mut Vec<String>) {
    let header: Vec<String> = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        .iter()
        .map(|d| format!("{:>width$}", d, width = CELL_WIDTH))
        .collect();
    lines.push(header.join("").dimmed().to_string());

    for week in &month.weeks {
        lines.push(week.iter().map(render_cell).collect::<Vec<_>>().join(""));
    }

    let busy: Vec<&MonthCell> = month
        .weeks
        .iter()
        .flatten()
        .filter(|c| c.in_month && !c.events.is_empty())
        .collect();

    if busy.is_empty() {
        lines.push(String::new());
        lines.push("No events".dimmed().to_string());
        return;
    }

    for cell in busy {
        lines.push(String::new());
        lines.push(format_date(cell.date).bold().to_string());
        for event in &cell.events {
            let time = if event.all_day {
                "all-day".to_string()
            } else {
                format_time(event.start.time())
            };
            lines.push(format!("  {:>8}  {}", time.dimmed(), render_event(event)));
        }
        if cell.hidden > 0 {
            lines.push(format!("  {}", format!("+{} more", cell.hidden).dimmed()));
        }
    }
}

/// Day number, `*` marking days with events
fn render_cell(cell: &MonthCell) -> String {
    let marker = if cell.events.is_empty() { ' ' } else { '*' };
    let text = format!("{:>width$}{}", cell.date.day(), marker, width = CELL_WIDTH - 1);

    if cell.is_today {
        text.reversed().to_string()
    } else if !cell.in_month {
        text.dimmed().to_string()
    } else {
        text
    }
}

fn render_event(event: &CalendarEvent) -> String {
    let mut out = String::new();

    if event.issue {
        out.push_str(&format!("{} ", "!".red().bold()));
    }
    out.push_str(&event.title);
    out.push_str(&format!(
        " {}",
        format!("[{}]", event.category).color(category_color(event.category))
    ));
    out.push_str(&format!(" {}", format!("({})", event.schedule_status).dimmed()));

    if let Some(location) = &event.location {
        out.push_str(&format!(" {}", format!("@ {}", location).dimmed()));
    }
    if !event.representatives.is_empty() {
        out.push_str(&format!(" {}", event.representatives.join(", ").italic()));
    }

    out
}

fn category_color(category: Category) -> AnsiColors {
    match category {
        Category::Event => AnsiColors::Blue,
        Category::NewsRelease => AnsiColors::Green,
        Category::Tv => AnsiColors::Magenta,
        Category::Radio => AnsiColors::Yellow,
        Category::SocialMedia => AnsiColors::BrightMagenta,
        Category::Observance => AnsiColors::White,
        Category::Conference => AnsiColors::BrightBlue,
        Category::Fyi => AnsiColors::BrightYellow,
        Category::Placeholder => AnsiColors::BrightBlack,
        Category::Other => AnsiColors::Default,
    }
}
