//! Wall-clock access, isolated to a single entry point.

use abushakir_calendar::{Calendar, Date, GregorianDate};
use chrono::{Datelike, Utc};

/// Today's date in UTC, expressed in the requested calendar.
///
/// The one non-pure operation in the workspace: everything else is a
/// plain mapping from inputs to outputs. No timezone handling; the UTC
/// calendar date is taken as-is.
pub fn today(calendar: Calendar) -> Date {
    let now = Utc::now().date_naive();
    let gregorian = GregorianDate::new(now.year(), now.month() as u8, now.day() as u8);
    match calendar {
        Calendar::Gregorian => Date::Gregorian(gregorian),
        Calendar::Ethiopic => Date::Ethiopic(gregorian.to_ethiopic()),
    }
}

/// The current UTC Gregorian year.
///
/// Used by the highlight search, which evaluates dynamic rules "as of now".
pub fn current_gregorian_year() -> i32 {
    Utc::now().date_naive().year()
}
