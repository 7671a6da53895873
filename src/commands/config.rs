use std::path::PathBuf;

use anyhow::Result;
use commscal_core::config::CommscalConfig;
use commscal_core::view::CalendarView;
use owo_colors::OwoColorize;

pub fn run(
    mut config: CommscalConfig,
    default_view: Option<CalendarView>,
    entries_file: Option<PathBuf>,
) -> Result<()> {
    let config_path = CommscalConfig::config_path()?;

    if default_view.is_some() || entries_file.is_some() {
        if let Some(view) = default_view {
            config.default_view = view;
        }
        if let Some(file) = entries_file {
            config.entries_file = file;
        }
        config.save_to(&config_path)?;
        println!("{}", "  Config saved".green());
    }

    println!("{}", "Paths".bold());
    println!("  Config:   {}", config_path.display());
    println!("  Entries:  {}", config.entries_path().display());
    println!();
    println!("{}", "Settings".bold());
    println!("  Default view:  {}", config.default_view);

    Ok(())
}
