//! Calendar tag and the two-calendar date sum type.
//!
//! Calendar-polymorphic operations take a [`Date`] rather than a calendar
//! string plus an untyped record: the variant *is* the calendar tag, and
//! every consumer dispatches with an exhaustive match.

use std::fmt;

use serde::Serialize;

use crate::ethiopic::EthiopicDate;
use crate::gregorian::GregorianDate;
use crate::jdn::{Jdn, Weekday};

/// Which calendar a date value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    Gregorian,
    Ethiopic,
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gregorian => f.write_str("gregorian"),
            Self::Ethiopic => f.write_str("ethiopic"),
        }
    }
}

/// A date in either supported calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Date {
    Gregorian(GregorianDate),
    Ethiopic(EthiopicDate),
}

impl Date {
    /// Returns the calendar this date belongs to.
    pub fn calendar(self) -> Calendar {
        match self {
            Self::Gregorian(_) => Calendar::Gregorian,
            Self::Ethiopic(_) => Calendar::Ethiopic,
        }
    }

    /// Converts to a JDN.
    pub fn to_jdn(self) -> Jdn {
        match self {
            Self::Gregorian(d) => d.to_jdn(),
            Self::Ethiopic(d) => d.to_jdn(),
        }
    }

    /// Converts a JDN into a date of the requested calendar.
    ///
    /// Ethiopic results carry Amete Mihret numbering.
    pub fn from_jdn(jdn: Jdn, calendar: Calendar) -> Self {
        match calendar {
            Calendar::Gregorian => Self::Gregorian(GregorianDate::from_jdn(jdn)),
            Calendar::Ethiopic => Self::Ethiopic(EthiopicDate::from_jdn(jdn)),
        }
    }

    /// Resolves this date in the Gregorian calendar.
    pub fn to_gregorian(self) -> GregorianDate {
        match self {
            Self::Gregorian(d) => d,
            Self::Ethiopic(d) => d.to_gregorian(),
        }
    }

    /// Resolves this date in the Ethiopic calendar (Amete Mihret).
    pub fn to_ethiopic(self) -> EthiopicDate {
        match self {
            Self::Gregorian(d) => d.to_ethiopic(),
            Self::Ethiopic(d) => EthiopicDate::from_jdn(d.to_jdn()),
        }
    }

    /// Returns the weekday this date falls on.
    pub fn weekday(self) -> Weekday {
        Weekday::from_jdn(self.to_jdn())
    }
}

impl From<GregorianDate> for Date {
    fn from(date: GregorianDate) -> Self {
        Self::Gregorian(date)
    }
}

impl From<EthiopicDate> for Date {
    fn from(date: EthiopicDate) -> Self {
        Self::Ethiopic(date)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gregorian(d) => fmt::Display::fmt(d, f),
            Self::Ethiopic(d) => fmt::Display::fmt(d, f),
        }
    }
}
