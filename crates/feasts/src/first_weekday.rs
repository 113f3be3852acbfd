//! First occurrence of a weekday within a month.
//!
//! Weekday-anchored observances (the Irreechaa celebrations, held on the
//! first Saturday and Sunday of October) resolve through this helper:
//! take the JDN of the month's day 1, read its weekday, and step forward
//! 0–6 days to the first match.

use abushakir_calendar::{
    Era, EthiopicDate, GregorianDate, Weekday, ethiopic_to_jdn, gregorian_to_jdn,
    jdn_to_ethiopic, jdn_to_gregorian,
};

fn forward_offset(from: Weekday, to: Weekday) -> i64 {
    (i64::from(to.index()) - i64::from(from.index())).rem_euclid(7)
}

/// First `weekday` of a Gregorian month.
pub fn first_weekday_of_gregorian_month(year: i32, month: u8, weekday: Weekday) -> GregorianDate {
    let first = gregorian_to_jdn(year, month, 1);
    jdn_to_gregorian(first + forward_offset(Weekday::from_jdn(first), weekday))
}

/// First `weekday` of an Ethiopic month (result in Amete Mihret numbering).
pub fn first_weekday_of_ethiopic_month(
    year: i32,
    month: u8,
    era: Era,
    weekday: Weekday,
) -> EthiopicDate {
    let first = ethiopic_to_jdn(year, month, 1, era);
    jdn_to_ethiopic(first + forward_offset(Weekday::from_jdn(first), weekday))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_saturday_october_2025() {
        assert_eq!(
            first_weekday_of_gregorian_month(2025, 10, Weekday::Saturday),
            GregorianDate::new(2025, 10, 4)
        );
    }

    #[test]
    fn first_sunday_october_2025() {
        assert_eq!(
            first_weekday_of_gregorian_month(2025, 10, Weekday::Sunday),
            GregorianDate::new(2025, 10, 5)
        );
    }

    #[test]
    fn day_one_already_matching_is_kept() {
        // 2023-10-01 was a Sunday.
        assert_eq!(
            first_weekday_of_gregorian_month(2023, 10, Weekday::Sunday),
            GregorianDate::new(2023, 10, 1)
        );
    }

    #[test]
    fn result_always_in_first_seven_days() {
        for year in 2020..=2030 {
            for month in 1..=12 {
                let d = first_weekday_of_gregorian_month(year, month, Weekday::Friday);
                assert_eq!(d.weekday(), Weekday::Friday);
                assert!(d.day <= 7, "day {} out of first week for {year}-{month}", d.day);
            }
        }
    }

    #[test]
    fn ethiopic_first_sunday_of_meskerem() {
        // Meskerem 1, 2018 AM = Thu 2025-09-11; the first Sunday is Meskerem 4.
        let d = first_weekday_of_ethiopic_month(2018, 1, Era::AmeteMihret, Weekday::Sunday);
        assert_eq!(d, EthiopicDate::new(2018, 1, 4));
        assert_eq!(d.weekday(), Weekday::Sunday);
    }

    #[test]
    fn ethiopic_pagume_anchor_can_leave_the_month() {
        // Pagume has only 5–6 days; a late anchor may fall past it. The
        // helper reports the raw JDN walk, callers bound it if needed.
        let d = first_weekday_of_ethiopic_month(2017, 13, Era::AmeteMihret, Weekday::Friday);
        assert_eq!(d.weekday(), Weekday::Friday);
    }
}
