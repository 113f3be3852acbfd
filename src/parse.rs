//! Pure parsing functions: CLI strings -> crate API types.

use anyhow::{Context, Result, bail};

use abushakir_calendar::{Calendar, Date, Era, EthiopicDate, GregorianDate};
use abushakir_highlights::HighlightCategory;

use crate::config::AbushakirConfig;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parses an output format name.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?} (expected text or json)"),
    }
}

/// Parses a calendar name.
pub fn parse_calendar(s: &str) -> Result<Calendar> {
    match s.to_lowercase().as_str() {
        "gregorian" | "greg" | "g" => Ok(Calendar::Gregorian),
        "ethiopic" | "ethiopian" | "eth" | "e" => Ok(Calendar::Ethiopic),
        other => bail!("unknown calendar: {other:?} (expected gregorian or ethiopic)"),
    }
}

/// Parses an era label.
pub fn parse_era(s: &str) -> Result<Era> {
    match s.to_uppercase().as_str() {
        "AM" => Ok(Era::AmeteMihret),
        "AA" => Ok(Era::AmeteAlem),
        other => bail!("unknown era: {other:?} (expected AM or AA)"),
    }
}

/// Resolves the effective era: the CLI flag when present, the config
/// default otherwise.
pub fn resolve_era(flag: Option<&str>, config: &AbushakirConfig) -> Result<Era> {
    parse_era(flag.unwrap_or(&config.output.era))
}

/// Parses a `YEAR-MONTH-DAY` string into its numeric parts.
pub fn parse_ymd(s: &str) -> Result<(i32, u8, u8)> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        bail!("invalid date: {s:?} (expected YEAR-MONTH-DAY)");
    }
    let year = parts[0]
        .parse::<i32>()
        .with_context(|| format!("invalid year in date {s:?}"))?;
    let month = parts[1]
        .parse::<u8>()
        .with_context(|| format!("invalid month in date {s:?}"))?;
    let day = parts[2]
        .parse::<u8>()
        .with_context(|| format!("invalid day in date {s:?}"))?;
    Ok((year, month, day))
}

/// Parses a date string into the requested calendar.
pub fn parse_date(s: &str, calendar: Calendar, era: Era) -> Result<Date> {
    let (year, month, day) = parse_ymd(s)?;
    Ok(match calendar {
        Calendar::Gregorian => Date::Gregorian(GregorianDate::new(year, month, day)),
        Calendar::Ethiopic => Date::Ethiopic(EthiopicDate::new(year, month, day).with_era(era)),
    })
}

/// Parses a highlight category name.
pub fn parse_category(s: &str) -> Result<HighlightCategory> {
    match s.to_lowercase().as_str() {
        "religious" => Ok(HighlightCategory::Religious),
        "national" => Ok(HighlightCategory::National),
        "observance" => Ok(HighlightCategory::Observance),
        other => bail!("unknown category: {other:?} (expected religious, national, or observance)"),
    }
}
