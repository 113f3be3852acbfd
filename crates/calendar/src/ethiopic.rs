//! Ethiopic calendar rules and conversions (Amete Mihret / Amete Alem).
//!
//! Twelve 30-day months followed by the epagomenal month Pagume (5 days,
//! 6 in a leap year). Conversions are closed-form integer arithmetic over
//! the 1461-day four-year cycle, not iterative. The two eras differ only
//! in year numbering (`AA = AM + 5500`); every computation normalizes to
//! Amete Mihret first.

use std::fmt;

use serde::Serialize;

use crate::error::CalendarError;
use crate::gregorian::GregorianDate;
use crate::jdn::{Jdn, Weekday};

/// Anchor JDN for the closed-form Ethiopic year arithmetic.
///
/// Meskerem 1 of 1 AM lands at `ETHIOPIC_EPOCH + 365` = JDN 1724221
/// (29 August 8 CE in the Julian calendar).
pub const ETHIOPIC_EPOCH: Jdn = 1_723_856;

/// Year-numbering offset between the eras: AA 5501 = AM 1.
pub const AMETE_ALEM_DELTA: i32 = 5500;

/// Ethiopic year-numbering era.
///
/// Not a distinct calendar: Amete Alem ("year of the world") counts from
/// 5500 years before Amete Mihret ("year of mercy").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Era {
    /// Amete Mihret (the default civil numbering).
    #[default]
    #[serde(rename = "AM")]
    AmeteMihret,
    /// Amete Alem.
    #[serde(rename = "AA")]
    AmeteAlem,
}

impl Era {
    /// Normalizes a year in this era to Amete Mihret numbering.
    pub fn normalize_am(self, year: i32) -> i32 {
        match self {
            Self::AmeteMihret => year,
            Self::AmeteAlem => year - AMETE_ALEM_DELTA,
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmeteMihret => f.write_str("AM"),
            Self::AmeteAlem => f.write_str("AA"),
        }
    }
}

/// A date in the Ethiopic calendar.
///
/// Like [`GregorianDate`], fields are plain values with no inherent
/// validation; the JDN conversions normalize out-of-range days (Pagume 7
/// in a non-leap year rolls into Meskerem of the next year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EthiopicDate {
    /// Year in the numbering of `era`.
    pub year: i32,
    /// Month of the year (1..=13; 13 = Pagume).
    pub month: u8,
    /// Day of the month (1..=30; 1..=5 or 1..=6 in Pagume).
    pub day: u8,
    /// Year-numbering era, Amete Mihret by default.
    pub era: Era,
}

impl EthiopicDate {
    /// Creates a new `EthiopicDate` in Amete Mihret numbering.
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            era: Era::AmeteMihret,
        }
    }

    /// Re-tags this date with another era, adjusting nothing else.
    pub fn with_era(self, era: Era) -> Self {
        Self { era, ..self }
    }

    /// Returns the year normalized to Amete Mihret numbering.
    pub fn am_year(self) -> i32 {
        self.era.normalize_am(self.year)
    }

    /// Converts to a JDN.
    pub fn to_jdn(self) -> Jdn {
        ethiopic_to_jdn(self.year, self.month, self.day, self.era)
    }

    /// Converts a JDN into an Ethiopic date in Amete Mihret numbering.
    pub fn from_jdn(jdn: Jdn) -> Self {
        jdn_to_ethiopic(jdn)
    }

    /// Converts to the proleptic Gregorian calendar.
    pub fn to_gregorian(self) -> GregorianDate {
        GregorianDate::from_jdn(self.to_jdn())
    }

    /// Returns the weekday this date falls on.
    pub fn weekday(self) -> Weekday {
        Weekday::from_jdn(self.to_jdn())
    }
}

impl PartialOrd for EthiopicDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EthiopicDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Compare in AM numbering so mixed-era dates order chronologically.
        (self.am_year(), self.month, self.day).cmp(&(other.am_year(), other.month, other.day))
    }
}

impl fmt::Display for EthiopicDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {}",
            self.year, self.month, self.day, self.era
        )
    }
}

/// Ethiopic leap year: `am_year % 4 == 3` (e.g. 2011, 2015, 2019 AM).
///
/// Uses the truncating remainder so the predicate stays consistent with
/// the truncating division inside [`ethiopic_to_jdn`] for proleptic
/// negative years.
pub fn is_ethiopic_leap_year(year: i32, era: Era) -> bool {
    era.normalize_am(year) % 4 == 3
}

/// Number of days in an Ethiopic month: 30 for months 1..=12, 6 or 5 for
/// Pagume depending on the leap cycle.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=13.
pub fn ethiopic_days_in_month(year: i32, month: u8, era: Era) -> Result<u8, CalendarError> {
    match month {
        1..=12 => Ok(30),
        13 => Ok(if is_ethiopic_leap_year(year, era) { 6 } else { 5 }),
        _ => Err(CalendarError::InvalidMonth { month, max: 13 }),
    }
}

/// Ethiopic date → JDN, closed form.
pub fn ethiopic_to_jdn(year: i32, month: u8, day: u8, era: Era) -> Jdn {
    let am_year = i64::from(era.normalize_am(year));
    ETHIOPIC_EPOCH + 365 * am_year + am_year / 4 + 30 * i64::from(month) + i64::from(day) - 31
}

/// JDN → Ethiopic date, closed form over the 1461-day cycle.
///
/// Always returns Amete Mihret numbering; re-tagging into Amete Alem is
/// the caller's responsibility.
pub fn jdn_to_ethiopic(jdn: Jdn) -> EthiopicDate {
    let off = jdn - ETHIOPIC_EPOCH;
    let r = off % 1461;
    let n = r % 365 + 365 * (r / 1460);
    let year = 4 * (off / 1461) + r / 365 - r / 1460;
    EthiopicDate::new(year as i32, (n / 30 + 1) as u8, (n % 30 + 1) as u8)
}
