//! Day, month, and year offsets over either calendar.

use abushakir_calendar::{
    CalendarError, Date, EthiopicDate, GregorianDate, ethiopic_days_in_month,
    gregorian_days_in_month, is_gregorian_leap_year,
};

/// Adds `days` (negative to subtract) by shifting the JDN.
///
/// This is the only correct way to move by days: the JDN is
/// calendar-agnostic, so month, year, and epagomenal boundaries are exact
/// by construction. Ethiopic results come back in Amete Mihret numbering
/// (the JDN inverse always yields AM).
pub fn add_days(date: Date, days: i64) -> Date {
    Date::from_jdn(date.to_jdn() + days, date.calendar())
}

/// Adds `months` (negative to subtract), clamping the day to the
/// destination month's length.
///
/// Each calendar's months are linearized into a zero-based index (12 or 13
/// months per year), shifted, and re-derived with Euclidean division so
/// negative offsets cross year boundaries correctly. A Pagume day moving
/// into Meskerem survives unchanged (1..=6 is valid in every month), which
/// makes `add_months(+1)` then `add_months(-1)` an identity for every
/// Pagume day, including the leap 6th.
pub fn add_months(date: Date, months: i32) -> Date {
    match date {
        Date::Gregorian(d) => Date::Gregorian(add_months_gregorian(d, months)),
        Date::Ethiopic(d) => Date::Ethiopic(add_months_ethiopic(d, months)),
    }
}

fn add_months_gregorian(date: GregorianDate, months: i32) -> GregorianDate {
    let index = i64::from(date.year) * 12 + i64::from(date.month) - 1 + i64::from(months);
    let year = index.div_euclid(12) as i32;
    let month = (index.rem_euclid(12) + 1) as u8;
    let max = gregorian_days_in_month(year, month).expect("re-derived month is always 1..=12");
    GregorianDate::new(year, month, date.day.min(max))
}

fn add_months_ethiopic(date: EthiopicDate, months: i32) -> EthiopicDate {
    let index = (i64::from(date.year) - 1) * 13 + i64::from(date.month) - 1 + i64::from(months);
    let year = (index.div_euclid(13) + 1) as i32;
    let month = (index.rem_euclid(13) + 1) as u8;
    let max =
        ethiopic_days_in_month(year, month, date.era).expect("re-derived month is always 1..=13");
    EthiopicDate::new(year, month, date.day.min(max)).with_era(date.era)
}

/// Adds `years` (negative to subtract), keeping the month and clamping the
/// day only where the target year is shorter: Gregorian Feb 29 in a
/// non-leap target, and Ethiopic Pagume in a non-leap target.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] when an Ethiopic input carries a
/// month outside 1..=13: the Pagume clamp needs that month's length. The
/// Gregorian arm needs no table (only February varies by year) and never
/// fails.
pub fn add_years(date: Date, years: i32) -> Result<Date, CalendarError> {
    match date {
        Date::Gregorian(d) => {
            let year = d.year + years;
            let day = if d.month == 2 && d.day == 29 && !is_gregorian_leap_year(year) {
                28
            } else {
                d.day
            };
            Ok(Date::Gregorian(GregorianDate::new(year, d.month, day)))
        }
        Date::Ethiopic(d) => {
            let year = d.year + years;
            let max = ethiopic_days_in_month(year, d.month, d.era)?;
            Ok(Date::Ethiopic(
                EthiopicDate::new(year, d.month, d.day.min(max)).with_era(d.era),
            ))
        }
    }
}

/// The previous day.
pub fn previous_day(date: Date) -> Date {
    add_days(date, -1)
}

/// The next day.
pub fn next_day(date: Date) -> Date {
    add_days(date, 1)
}

/// Seven days earlier.
pub fn last_week(date: Date) -> Date {
    add_days(date, -7)
}

/// Seven days later.
pub fn next_week(date: Date) -> Date {
    add_days(date, 7)
}

/// One month earlier.
pub fn last_month(date: Date) -> Date {
    add_months(date, -1)
}

/// One month later.
pub fn next_month(date: Date) -> Date {
    add_months(date, 1)
}

/// One year earlier.
pub fn last_year(date: Date) -> Result<Date, CalendarError> {
    add_years(date, -1)
}

/// One year later.
pub fn next_year(date: Date) -> Result<Date, CalendarError> {
    add_years(date, 1)
}

/// One hundred years earlier.
pub fn last_century(date: Date) -> Result<Date, CalendarError> {
    add_years(date, -100)
}

/// One hundred years later.
pub fn next_century(date: Date) -> Result<Date, CalendarError> {
    add_years(date, 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use abushakir_calendar::Era;

    fn greg(year: i32, month: u8, day: u8) -> Date {
        GregorianDate::new(year, month, day).into()
    }

    fn eth(year: i32, month: u8, day: u8) -> Date {
        EthiopicDate::new(year, month, day).into()
    }

    #[test]
    fn add_days_across_year() {
        assert_eq!(add_days(greg(2025, 12, 31), 1), greg(2026, 1, 1));
        assert_eq!(add_days(greg(2026, 1, 1), -1), greg(2025, 12, 31));
    }

    #[test]
    fn add_days_across_pagume() {
        // 2015 AM is leap: Pagume 6 exists and the year has 366 days.
        assert_eq!(add_days(eth(2015, 13, 6), 1), eth(2016, 1, 1));
        assert_eq!(add_days(eth(2015, 12, 30), 1), eth(2015, 13, 1));
        assert_eq!(add_days(eth(2016, 1, 1), -1), eth(2015, 13, 6));
    }

    #[test]
    fn add_days_retags_amete_alem_to_am() {
        let aa: Date = EthiopicDate::new(7517, 1, 1).with_era(Era::AmeteAlem).into();
        assert_eq!(add_days(aa, 1), eth(2017, 1, 2));
    }

    #[test]
    fn add_months_clamps_day() {
        assert_eq!(add_months(greg(2023, 1, 31), 1), greg(2023, 2, 28));
        assert_eq!(add_months(greg(2024, 1, 31), 1), greg(2024, 2, 29));
        assert_eq!(add_months(greg(2024, 2, 29), 1), greg(2024, 3, 29));
    }

    #[test]
    fn add_months_negative_crosses_year() {
        assert_eq!(add_months(greg(2025, 1, 15), -1), greg(2024, 12, 15));
        assert_eq!(add_months(greg(2025, 2, 10), -14), greg(2023, 12, 10));
    }

    #[test]
    fn add_months_large_offsets() {
        assert_eq!(add_months(greg(2020, 6, 15), 25), greg(2022, 7, 15));
        assert_eq!(add_months(eth(2015, 6, 10), 13), eth(2016, 6, 10));
    }

    #[test]
    fn next_month_from_pagume() {
        assert_eq!(next_month(eth(2017, 13, 5)), eth(2018, 1, 5));
    }

    #[test]
    fn last_month_into_pagume_clamps() {
        // Meskerem 30 backs into Pagume, which tops out at 5 (or 6) days.
        assert_eq!(last_month(eth(2018, 1, 30)), eth(2017, 13, 5));
        assert_eq!(last_month(eth(2016, 1, 30)), eth(2015, 13, 6));
    }

    #[test]
    fn pagume_month_roundtrip_every_day() {
        for (year, len) in [(2017, 5u8), (2015, 6u8)] {
            for day in 1..=len {
                let date = eth(year, 13, day);
                assert_eq!(
                    last_month(next_month(date)),
                    date,
                    "Pagume roundtrip failed for {year}-13-{day}"
                );
            }
        }
    }

    #[test]
    fn add_months_preserves_era() {
        let aa: Date = EthiopicDate::new(7517, 13, 5).with_era(Era::AmeteAlem).into();
        let moved = add_months(aa, 1);
        assert_eq!(
            moved,
            EthiopicDate::new(7518, 1, 5).with_era(Era::AmeteAlem).into()
        );
    }

    #[test]
    fn add_years_clamps_feb_29() {
        assert_eq!(add_years(greg(2024, 2, 29), 1).unwrap(), greg(2025, 2, 28));
        assert_eq!(add_years(greg(2024, 2, 29), 4).unwrap(), greg(2028, 2, 29));
    }

    #[test]
    fn add_years_clamps_pagume() {
        assert_eq!(add_years(eth(2015, 13, 6), 1).unwrap(), eth(2016, 13, 5));
        assert_eq!(add_years(eth(2015, 13, 6), 4).unwrap(), eth(2019, 13, 6));
    }

    #[test]
    fn add_years_rejects_invalid_ethiopic_month() {
        let bad: Date = EthiopicDate::new(2017, 14, 1).into();
        assert_eq!(
            add_years(bad, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 14, max: 13 }
        );
    }

    #[test]
    fn wrappers_compose_fixed_offsets() {
        let d = greg(2025, 6, 15);
        assert_eq!(previous_day(d), greg(2025, 6, 14));
        assert_eq!(next_day(d), greg(2025, 6, 16));
        assert_eq!(last_week(d), greg(2025, 6, 8));
        assert_eq!(next_week(d), greg(2025, 6, 22));
        assert_eq!(last_year(d).unwrap(), greg(2024, 6, 15));
        assert_eq!(next_year(d).unwrap(), greg(2026, 6, 15));
        assert_eq!(last_century(d).unwrap(), greg(1925, 6, 15));
        assert_eq!(next_century(d).unwrap(), greg(2125, 6, 15));
    }
}
