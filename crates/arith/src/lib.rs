//! # abushakir-arith
//!
//! Calendar-aware date arithmetic on top of the JDN engine.
//!
//! Day offsets go through the JDN and are exact across every boundary;
//! month and year offsets re-derive the target month Euclidean-style and
//! clamp the day to the destination month's length (Jan 31 + 1 month is
//! Feb 28/29, Pagume 6 + 1 year is Pagume 5 in a non-leap target).
//!
//! ## Quick Start
//!
//! ```
//! use abushakir_arith::{add_days, next_month, year_progress};
//! use abushakir_calendar::{Date, EthiopicDate, GregorianDate};
//!
//! let nye: Date = GregorianDate::new(2025, 12, 31).into();
//! assert_eq!(add_days(nye, 1), GregorianDate::new(2026, 1, 1).into());
//!
//! // Pagume wraps into Meskerem of the next Ethiopic year.
//! let pagume: Date = EthiopicDate::new(2017, 13, 5).into();
//! assert_eq!(next_month(pagume), EthiopicDate::new(2018, 1, 5).into());
//!
//! let p = year_progress(GregorianDate::new(2025, 1, 1).into());
//! assert_eq!(p.days_left, 365);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `ops` | Day/month/year offsets and fixed-offset wrappers |
//! | `progress` | Year progress (days left, percent completed) |
//! | `clock` | `today()`, the sole wall-clock read |

mod clock;
mod ops;
mod progress;

pub use clock::{current_gregorian_year, today};
pub use ops::{
    add_days, add_months, add_years, last_century, last_month, last_week, last_year, next_century,
    next_day, next_month, next_week, next_year, previous_day,
};
pub use progress::{YearProgress, year_progress};
