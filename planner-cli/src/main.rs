mod commands;
mod render;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use planner_core::config::PlannerConfig;
use planner_core::{DateKey, Planner, TimeOfDay};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Plan your days: month overview, day timeline, and prioritized events")]
struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid
    Month {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long, value_parser = parse_month)]
        month: Option<(i32, u32)>,

        /// Print the grid as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the timeline of one day
    Day {
        /// Day to show (YYYY-MM-DD), defaults to today
        #[arg(value_parser = parse_date_key)]
        date: Option<DateKey>,

        /// Show empty half-hour rows too
        #[arg(short, long)]
        all: bool,

        /// Print the timeline as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add an event to a day
    Add {
        /// Day of the event (YYYY-MM-DD)
        #[arg(value_parser = parse_date_key)]
        date: DateKey,

        title: String,

        /// Start time on the half-hour grid (e.g. "09:00")
        #[arg(short, long, value_parser = parse_grid_time)]
        start: Option<TimeOfDay>,

        /// End time on the half-hour grid (e.g. "10:30")
        #[arg(short, long, value_parser = parse_grid_time)]
        end: Option<TimeOfDay>,

        #[arg(short, long)]
        urgent: bool,

        #[arg(short, long)]
        important: bool,
    },
    /// Mark an event done, or not done again
    Toggle {
        #[arg(value_parser = parse_date_key)]
        date: DateKey,

        /// Event number as shown by `planner day`
        index: usize,
    },
    /// Delete an event
    Remove {
        #[arg(value_parser = parse_date_key)]
        date: DateKey,

        /// Event number as shown by `planner day`
        index: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// List public holidays
    Holidays,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = PlannerConfig::load().context("Failed to load planner config")?;
    let today = chrono::Local::now().date_naive();
    let mut planner = Planner::new(config.backend(), today);

    match cli.command {
        Commands::Month { month, json } => {
            if let Some((year, month)) = month {
                planner.show_month(year, month);
            }
            commands::month::run(&planner, today, json)
        }
        Commands::Day { date, all, json } => {
            planner.select(date.unwrap_or_else(|| DateKey::new(today)));
            commands::day::run(&planner, all, json)
        }
        Commands::Add {
            date,
            title,
            start,
            end,
            urgent,
            important,
        } => {
            let start = start.unwrap_or(config.default_start);
            let end = end.unwrap_or(config.default_end);
            commands::add::run(&mut planner, date, title, start, end, urgent, important)
        }
        Commands::Toggle { date, index } => commands::toggle::run(&mut planner, date, index),
        Commands::Remove { date, index, yes } => {
            commands::remove::run(&mut planner, date, index, yes)
        }
        Commands::Holidays => commands::holidays::run(&planner),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_date_key(s: &str) -> Result<DateKey, String> {
    s.parse::<DateKey>().map_err(|e| e.to_string())
}

fn parse_month(s: &str) -> Result<(i32, u32), String> {
    use chrono::Datelike;

    let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| format!("Invalid month '{}'. Expected YYYY-MM", s))?;
    Ok((first.year(), first.month()))
}

/// Times must sit on the half-hour grid, like the picker offers them.
fn parse_grid_time(s: &str) -> Result<TimeOfDay, String> {
    let time = s.parse::<TimeOfDay>().map_err(|e| e.to_string())?;
    if !time.is_on_grid() {
        return Err(format!("'{}' is not on the half-hour grid (use :00 or :30)", s));
    }
    Ok(time)
}
