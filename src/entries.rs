use std::path::Path;

use anyhow::{Context, Result};
use commscal_core::CalendarEvent;
use commscal_core::entry::load_entries;
use commscal_core::event::convert_entries;

/// Read the entries file and normalize it into calendar events.
pub async fn load_events(path: &Path) -> Result<Vec<CalendarEvent>> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Could not read entries file {}", path.display()))?;

    let entries = load_entries(&json)
        .with_context(|| format!("Could not parse entries file {}", path.display()))?;

    let events = convert_entries(&entries)?;

    tracing::info!(path = %path.display(), events = events.len(), "loaded calendar events");

    Ok(events)
}
