//! The `today`, `add`, and `progress` subcommands.

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use abushakir_arith::{YearProgress, add_days, add_months, add_years, year_progress};
use abushakir_calendar::{Date, Weekday};

use crate::cli::{AddArgs, ProgressArgs, TodayArgs};
use crate::config::AbushakirConfig;
use crate::parse::{self, OutputFormat};

#[derive(Serialize)]
struct DatedOutput {
    date: Date,
    weekday: Weekday,
}

fn print_date(date: Date, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let out = DatedOutput {
                date,
                weekday: date.weekday(),
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => println!("{date} ({:?})", date.weekday()),
    }
    Ok(())
}

/// Run the `today` subcommand.
pub fn today(args: &TodayArgs, format: OutputFormat) -> Result<()> {
    let calendar = parse::parse_calendar(&args.calendar)?;
    print_date(abushakir_arith::today(calendar), format)
}

/// Run the `add` subcommand. Offsets apply as days, then months, then years.
pub fn add(args: &AddArgs, config: &AbushakirConfig, format: OutputFormat) -> Result<()> {
    let calendar = parse::parse_calendar(&args.calendar)?;
    let era = parse::resolve_era(args.era.as_deref(), config)?;
    let mut date = parse::parse_date(&args.date, calendar, era)?;
    info!(input = %date, days = args.days, months = args.months, years = args.years, "shifting");

    date = add_days(date, args.days);
    date = add_months(date, args.months);
    date = add_years(date, args.years)?;
    print_date(date, format)
}

/// Run the `progress` subcommand.
pub fn progress(args: &ProgressArgs, config: &AbushakirConfig, format: OutputFormat) -> Result<()> {
    let calendar = parse::parse_calendar(&args.calendar)?;
    let era = parse::resolve_era(args.era.as_deref(), config)?;
    let date = parse::parse_date(&args.date, calendar, era)?;
    let progress = year_progress(date);

    match format {
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ProgressOutput {
                date: Date,
                #[serde(flatten)]
                progress: YearProgress,
            }
            let out = ProgressOutput { date, progress };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => {
            println!("date:       {date}");
            println!("days left:  {}", progress.days_left);
            println!("year total: {} days", progress.total_days_in_year);
            println!("completed:  {:.2}%", progress.percent_completed);
        }
    }
    Ok(())
}
