use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Abushakir Ethiopic/Gregorian calendar tool.
#[derive(Parser)]
#[command(
    name = "abushakir",
    version,
    about = "Ethiopic / Gregorian calendar converter and highlight catalog"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file with output defaults.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: text or json (overrides config).
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a date between the calendars.
    Convert(ConvertArgs),
    /// Print today's date (UTC).
    Today(TodayArgs),
    /// Apply day/month/year offsets to a date.
    Add(AddArgs),
    /// Show how far a date sits within its year.
    Progress(ProgressArgs),
    /// Query the highlight catalog.
    Highlights(HighlightsArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Date as YEAR-MONTH-DAY.
    pub date: String,

    /// Calendar the input date is expressed in.
    #[arg(long, default_value = "gregorian")]
    pub from: String,

    /// Era for Ethiopic input: AM or AA (overrides config).
    #[arg(long)]
    pub era: Option<String>,
}

/// Arguments for the `today` subcommand.
#[derive(clap::Args)]
pub struct TodayArgs {
    /// Calendar to express today's date in.
    #[arg(long, default_value = "gregorian")]
    pub calendar: String,
}

/// Arguments for the `add` subcommand.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Date as YEAR-MONTH-DAY.
    pub date: String,

    /// Calendar the date is expressed in.
    #[arg(long, default_value = "gregorian")]
    pub calendar: String,

    /// Era for Ethiopic input: AM or AA (overrides config).
    #[arg(long)]
    pub era: Option<String>,

    /// Days to add (negative to subtract).
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub days: i64,

    /// Months to add, applied after days.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub months: i32,

    /// Years to add, applied after months.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub years: i32,
}

/// Arguments for the `progress` subcommand.
#[derive(clap::Args)]
pub struct ProgressArgs {
    /// Date as YEAR-MONTH-DAY.
    pub date: String,

    /// Calendar the date is expressed in.
    #[arg(long, default_value = "gregorian")]
    pub calendar: String,

    /// Era for Ethiopic input: AM or AA (overrides config).
    #[arg(long)]
    pub era: Option<String>,
}

/// Arguments for the `highlights` subcommand family.
#[derive(clap::Args)]
pub struct HighlightsArgs {
    #[command(subcommand)]
    pub query: HighlightsCommand,
}

/// Highlight catalog queries.
#[derive(Subcommand)]
pub enum HighlightsCommand {
    /// Highlights on one day.
    Day {
        /// Date as YEAR-MONTH-DAY.
        date: String,
        /// Calendar the date is expressed in.
        #[arg(long, default_value = "gregorian")]
        calendar: String,
        /// Era for Ethiopic input: AM or AA (overrides config).
        #[arg(long)]
        era: Option<String>,
    },
    /// Highlights across the 7 days starting at a date.
    Week {
        /// Start date as YEAR-MONTH-DAY.
        start: String,
        /// Calendar the date is expressed in.
        #[arg(long, default_value = "gregorian")]
        calendar: String,
        /// Era for Ethiopic input: AM or AA (overrides config).
        #[arg(long)]
        era: Option<String>,
        /// Include Saturdays and Sundays (overrides config).
        #[arg(long)]
        include_weekends: Option<bool>,
    },
    /// Highlights within a month.
    Month {
        /// Year in the requested calendar.
        year: i32,
        /// Month number (1..=12 Gregorian, 1..=13 Ethiopic).
        month: u8,
        /// Calendar the year/month belong to.
        #[arg(long, default_value = "gregorian")]
        calendar: String,
    },
    /// Highlights within a year.
    Year {
        /// Year in the requested calendar.
        year: i32,
        /// Calendar the year belongs to.
        #[arg(long, default_value = "gregorian")]
        calendar: String,
    },
    /// Highlights between two dates, inclusive.
    Range {
        /// Start date as YEAR-MONTH-DAY.
        start: String,
        /// End date as YEAR-MONTH-DAY.
        end: String,
        /// Calendar both dates are expressed in.
        #[arg(long, default_value = "gregorian")]
        calendar: String,
        /// Era for Ethiopic input: AM or AA (overrides config).
        #[arg(long)]
        era: Option<String>,
    },
    /// Free-text search over English and Amharic names.
    Search {
        /// Query string.
        query: String,
    },
    /// Highlights of one category (religious, national, observance).
    Category {
        /// Category name.
        category: String,
    },
    /// Cross-resolved annual listing, deduplicated and sorted.
    List {
        /// Year in the requested calendar.
        year: i32,
        /// Calendar the year belongs to.
        #[arg(long, default_value = "gregorian")]
        calendar: String,
    },
    /// Today's highlights (UTC).
    Today,
}
