//! Proleptic Gregorian calendar rules and conversions.

use std::fmt;

use serde::Serialize;

use crate::error::CalendarError;
use crate::ethiopic::EthiopicDate;
use crate::jdn::{self, Jdn, Weekday};

/// Number of days in each Gregorian month of a non-leap year
/// (index 0 unused, index 1 = January, ..., index 12 = December).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A date in the proleptic Gregorian calendar.
///
/// Fields are plain values and no validity is enforced at construction:
/// the JDN-based conversions accept semantically invalid combinations
/// (e.g. February 30) and silently normalize them into the following
/// month. Callers needing strict validation check
/// `day <= gregorian_days_in_month(year, month)?` before converting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GregorianDate {
    /// Year, proleptic (zero and negative years allowed).
    pub year: i32,
    /// Month of the year (1..=12).
    pub month: u8,
    /// Day of the month (1..=31).
    pub day: u8,
}

impl GregorianDate {
    /// Creates a new `GregorianDate` without validation.
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Converts to a JDN.
    pub fn to_jdn(self) -> Jdn {
        jdn::gregorian_to_jdn(self.year, self.month, self.day)
    }

    /// Converts a JDN back into a Gregorian date.
    pub fn from_jdn(jdn: Jdn) -> Self {
        jdn::jdn_to_gregorian(jdn)
    }

    /// Converts to the Ethiopic calendar (Amete Mihret numbering).
    pub fn to_ethiopic(self) -> EthiopicDate {
        EthiopicDate::from_jdn(self.to_jdn())
    }

    /// Returns the weekday this date falls on.
    pub fn weekday(self) -> Weekday {
        Weekday::from_jdn(self.to_jdn())
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Gregorian leap year: divisible by 4 and not by 100, unless by 400.
pub fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn gregorian_days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month, max: 12 });
    }
    if month == 2 && is_gregorian_leap_year(year) {
        return Ok(29);
    }
    Ok(DAYS_PER_MONTH[month as usize])
}
