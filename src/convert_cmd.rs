//! The `convert` subcommand.

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use abushakir_calendar::{EthiopicDate, GregorianDate, Weekday};

use crate::cli::ConvertArgs;
use crate::config::AbushakirConfig;
use crate::parse::{self, OutputFormat};

/// Both views of one physical day.
#[derive(Serialize)]
struct Conversion {
    gregorian: GregorianDate,
    ethiopic: EthiopicDate,
    weekday: Weekday,
}

/// Run the `convert` subcommand.
pub fn run(args: &ConvertArgs, config: &AbushakirConfig, format: OutputFormat) -> Result<()> {
    let from = parse::parse_calendar(&args.from)?;
    let era = parse::resolve_era(args.era.as_deref(), config)?;
    let date = parse::parse_date(&args.date, from, era)?;
    info!(input = %date, calendar = %from, "converting");

    let conversion = Conversion {
        gregorian: date.to_gregorian(),
        ethiopic: date.to_ethiopic(),
        weekday: date.weekday(),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&conversion)?),
        OutputFormat::Text => {
            println!("gregorian: {}", conversion.gregorian);
            println!("ethiopic:  {}", conversion.ethiopic);
            println!("weekday:   {:?}", conversion.weekday);
        }
    }
    Ok(())
}
