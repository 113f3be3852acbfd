//! The `highlights` subcommand family.

use anyhow::Result;
use tracing::info;

use abushakir_highlights::{Catalog, DatedHighlight, Highlight, ResolvedHighlight};

use crate::cli::{HighlightsArgs, HighlightsCommand};
use crate::config::AbushakirConfig;
use crate::parse::{self, OutputFormat};

/// Run a `highlights` query.
pub fn run(args: &HighlightsArgs, config: &AbushakirConfig, format: OutputFormat) -> Result<()> {
    let catalog = Catalog::DEFAULT;
    match &args.query {
        HighlightsCommand::Day { date, calendar, era } => {
            let calendar = parse::parse_calendar(calendar)?;
            let era = parse::resolve_era(era.as_deref(), config)?;
            let date = parse::parse_date(date, calendar, era)?;
            print_plain(&catalog.for_day(date), format)
        }
        HighlightsCommand::Week {
            start,
            calendar,
            era,
            include_weekends,
        } => {
            let calendar = parse::parse_calendar(calendar)?;
            let era = parse::resolve_era(era.as_deref(), config)?;
            let start = parse::parse_date(start, calendar, era)?;
            let include_weekends = include_weekends.unwrap_or(config.output.include_weekends);
            print_dated(&catalog.for_week(start, include_weekends), format)
        }
        HighlightsCommand::Month { year, month, calendar } => {
            let calendar = parse::parse_calendar(calendar)?;
            print_plain(&catalog.for_month(*year, *month, calendar), format)
        }
        HighlightsCommand::Year { year, calendar } => {
            let calendar = parse::parse_calendar(calendar)?;
            print_plain(&catalog.for_year(*year, calendar), format)
        }
        HighlightsCommand::Range {
            start,
            end,
            calendar,
            era,
        } => {
            let calendar = parse::parse_calendar(calendar)?;
            let era = parse::resolve_era(era.as_deref(), config)?;
            let start = parse::parse_date(start, calendar, era)?;
            let end = parse::parse_date(end, calendar, era)?;
            print_dated(&catalog.in_range(start, end), format)
        }
        HighlightsCommand::Search { query } => {
            let hits = catalog.search(query);
            info!(query = %query, hits = hits.len(), "search finished");
            print_plain(&hits, format)
        }
        HighlightsCommand::Category { category } => {
            let category = parse::parse_category(category)?;
            print_plain(&catalog.by_category(category), format)
        }
        HighlightsCommand::List { year, calendar } => {
            let calendar = parse::parse_calendar(calendar)?;
            print_resolved(&catalog.list_all(*year, calendar), format)
        }
        HighlightsCommand::Today => print_dated(&catalog.todays_highlights(), format),
    }
}

fn print_plain(hits: &[Highlight], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(hits)?),
        OutputFormat::Text => {
            for h in hits {
                println!(
                    "{:>2}/{:<2} {} {}  {} ({})",
                    h.month, h.day, h.calendar, h.id, h.name, h.amharic_name
                );
            }
        }
    }
    Ok(())
}

fn print_dated(hits: &[DatedHighlight], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(hits)?),
        OutputFormat::Text => {
            for h in hits {
                println!(
                    "{}  {}  {} ({})",
                    h.gregorian, h.highlight.id, h.highlight.name, h.highlight.amharic_name
                );
            }
        }
    }
    Ok(())
}

fn print_resolved(hits: &[ResolvedHighlight], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(hits)?),
        OutputFormat::Text => {
            for h in hits {
                println!(
                    "{}  {}  {}  {} ({})",
                    h.gregorian, h.ethiopic, h.id, h.name, h.amharic_name
                );
            }
        }
    }
    Ok(())
}
