//! # abushakir-calendar
//!
//! JDN engine and calendar rules for the proleptic Gregorian and Ethiopic
//! calendars.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["GregorianDate"] -->|".to_jdn()"| J["Jdn (i64)"]
//!     E["EthiopicDate (AM/AA)"] -->|".to_jdn()"| J
//!     J -->|"jdn_to_gregorian()"| A
//!     J -->|"jdn_to_ethiopic()"| E
//!     J -->|"Weekday::from_jdn()"| W["Weekday"]
//!     JU["julian_to_jdn()"] --> J
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use abushakir_calendar::{EthiopicDate, GregorianDate};
//!
//! // Ethiopian New Year 2017 AM falls on 2024-09-11.
//! let enkutatash = EthiopicDate::new(2017, 1, 1);
//! assert_eq!(enkutatash.to_gregorian(), GregorianDate::new(2024, 9, 11));
//!
//! // Genna (Ethiopian Christmas) 2025 is Tahsas 29, 2017 AM.
//! let genna = GregorianDate::new(2025, 1, 7);
//! assert_eq!(genna.to_ethiopic(), EthiopicDate::new(2017, 4, 29));
//! ```
//!
//! All conversions route through the integer Julian Day Number, so
//! cross-calendar results always denote the same physical day. Conversion
//! functions are deliberately permissive: structurally invalid inputs
//! (February 30, Pagume 7 in a non-leap year) are normalized through the
//! day count rather than rejected. Strict callers validate against
//! [`gregorian_days_in_month`] / [`ethiopic_days_in_month`] first; those
//! are the only fallible entry points ([`CalendarError::InvalidMonth`]).
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `jdn` | Julian Day Number engine and weekday derivation |
//! | `gregorian` | Gregorian leap/month rules and date type |
//! | `ethiopic` | Ethiopic rules, eras, closed-form conversions |
//! | `date` | `Calendar` tag and two-calendar `Date` sum type |
//! | `error` | Error types |

mod date;
mod error;
mod ethiopic;
mod gregorian;
mod jdn;

pub use date::{Calendar, Date};
pub use error::CalendarError;
pub use ethiopic::{
    AMETE_ALEM_DELTA, ETHIOPIC_EPOCH, Era, EthiopicDate, ethiopic_days_in_month, ethiopic_to_jdn,
    is_ethiopic_leap_year, jdn_to_ethiopic,
};
pub use gregorian::{GregorianDate, gregorian_days_in_month, is_gregorian_leap_year};
pub use jdn::{
    Jdn, Weekday, gregorian_to_jdn, jdn_to_gregorian, julian_to_jdn, weekday_from_jdn,
};
