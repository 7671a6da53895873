mod commands;
mod entries;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commscal_core::config::CommscalConfig;
use commscal_core::view::CalendarView;

use commands::view::ViewArgs;

#[derive(Parser)]
#[command(name = "commscal")]
#[command(about = "View communication entries as a day, week or month calendar")]
struct Cli {
    /// Entries JSON file (defaults to entries_file from config)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Less log output (-q warnings off, -qq errors only)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a single day with its hourly grid
    Day(ViewArgs),
    /// Show the Sunday-Saturday week containing the date
    Week(ViewArgs),
    /// Show the month grid containing the date
    Month(ViewArgs),
    /// Show the configured default view
    Show(ViewArgs),
    /// Show or change configuration
    Config {
        /// Set the view used by `show`
        #[arg(long)]
        default_view: Option<CalendarView>,

        /// Set the entries file
        #[arg(long)]
        entries_file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing(cli.verbose, cli.quiet)?;

    let config = CommscalConfig::load()?;

    match cli.command {
        Commands::Day(args) => commands::view::run(CalendarView::Day, args, &config, cli.file).await,
        Commands::Week(args) => commands::view::run(CalendarView::Week, args, &config, cli.file).await,
        Commands::Month(args) => {
            commands::view::run(CalendarView::Month, args, &config, cli.file).await
        }
        Commands::Show(args) => {
            commands::view::run(config.default_view, args, &config, cli.file).await
        }
        Commands::Config {
            default_view,
            entries_file,
        } => commands::config::run(config, default_view, entries_file),
    }
}
