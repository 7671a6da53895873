use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Args;
use commscal_core::config::CommscalConfig;
use commscal_core::date_range::parse_date;
use commscal_core::view::{CalendarQuery, CalendarView, assemble};

use crate::entries::load_events;
use crate::render;

#[derive(Args)]
pub struct ViewArgs {
    /// Date to show (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    date: Option<String>,

    /// Only show events whose title, category or representatives match
    #[arg(short, long)]
    search: Option<String>,
}

pub async fn run(
    view: CalendarView,
    args: ViewArgs,
    config: &CommscalConfig,
    file: Option<PathBuf>,
) -> Result<()> {
    let path = file.unwrap_or_else(|| config.entries_path());
    let events = load_events(&path).await?;

    let today = Local::now().date_naive();
    let anchor = match args.date {
        Some(d) => parse_date(&d)?,
        None => today,
    };

    let query = CalendarQuery::new(view, anchor).with_search(args.search.unwrap_or_default());
    let data = assemble(&events, &query, today);

    println!("{}", render::render_view(&query, &data));

    Ok(())
}
