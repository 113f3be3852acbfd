//! Position of a date within its calendar year.

use abushakir_calendar::{Date, ethiopic_to_jdn, gregorian_to_jdn};
use serde::Serialize;

/// How far through its calendar year a date sits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearProgress {
    /// Days until the next year's first day (≥ 0 for in-range dates).
    pub days_left: i64,
    /// Length of the year in days: 365, or 366 in a leap year.
    pub total_days_in_year: u16,
    /// Share of the year completed, 0..=100, rounded to 2 decimals.
    pub percent_completed: f64,
}

/// Computes [`YearProgress`] for a date in either calendar.
///
/// Works off three JDNs (the date, this year's day 1, and next year's
/// day 1), so leap days and the epagomenal month need no special casing.
pub fn year_progress(date: Date) -> YearProgress {
    let (start, next_start, jdn) = match date {
        Date::Gregorian(d) => (
            gregorian_to_jdn(d.year, 1, 1),
            gregorian_to_jdn(d.year + 1, 1, 1),
            d.to_jdn(),
        ),
        Date::Ethiopic(d) => (
            ethiopic_to_jdn(d.year, 1, 1, d.era),
            ethiopic_to_jdn(d.year + 1, 1, 1, d.era),
            d.to_jdn(),
        ),
    };

    let total = next_start - start;
    let percent = ((jdn - start) as f64 / total as f64 * 100.0).clamp(0.0, 100.0);
    YearProgress {
        days_left: next_start - jdn,
        total_days_in_year: total as u16,
        percent_completed: (percent * 100.0).round() / 100.0,
    }
}
