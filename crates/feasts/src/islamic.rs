//! Tabular (arithmetic) Islamic calendar.
//!
//! Adequate for approximating lunar observances: months alternate 30/29
//! days starting with Muharram, and 11 leap days are spread over each
//! 30-year cycle. Actual observance dates depend on moon sighting and can
//! differ by a day or two.

use abushakir_calendar::{GregorianDate, Jdn, jdn_to_gregorian};
use tracing::debug;

/// Tabular Islamic epoch: Friday, 16 July 622 (Julian).
pub const ISLAMIC_EPOCH: Jdn = 1_948_439;

/// Tabular Islamic date → JDN.
///
/// `(59k + 1) / 2` is the integer form of `ceil(29.5 * k)` for the `k`
/// months already elapsed. Years are expected to be positive (the epoch
/// year is 1 AH).
pub fn islamic_to_jdn(year: i64, month: u8, day: u8) -> Jdn {
    let k = i64::from(month) - 1;
    ISLAMIC_EPOCH + (year - 1) * 354 + (3 + 11 * year) / 30 + (59 * k + 1) / 2 + i64::from(day) - 1
}

/// Estimated Islamic year overlapping a Gregorian year.
///
/// The lunar year runs ~11 days short of the solar year, giving the 33/32
/// drift ratio. This is only a seed for the windowed search below.
pub fn approx_islamic_year(gregorian_year: i32) -> i64 {
    ((i64::from(gregorian_year) - 622) * 33).div_euclid(32)
}

/// All occurrences of a fixed tabular-Islamic `(month, day)` within a
/// Gregorian year.
///
/// There is no year-for-year bijection between the calendars, so a small
/// window of candidate Islamic years (the estimate, one before, two
/// after) is converted and filtered to the requested Gregorian year.
/// Drift legitimately yields zero, one, or (rarely) two hits.
pub fn islamic_occurrences(gregorian_year: i32, month: u8, day: u8) -> Vec<GregorianDate> {
    let estimate = approx_islamic_year(gregorian_year);
    let hits: Vec<GregorianDate> = (estimate - 1..=estimate + 2)
        .map(|iy| jdn_to_gregorian(islamic_to_jdn(iy, month, day)))
        .filter(|g| g.year == gregorian_year)
        .collect();
    if hits.is_empty() {
        debug!(gregorian_year, month, day, "no tabular Islamic occurrence in window");
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_start_of_year_one() {
        assert_eq!(islamic_to_jdn(1, 1, 1), ISLAMIC_EPOCH);
    }

    #[test]
    fn month_lengths_alternate() {
        // Muharram has 30 days, Safar 29.
        assert_eq!(islamic_to_jdn(1446, 2, 1) - islamic_to_jdn(1446, 1, 1), 30);
        assert_eq!(islamic_to_jdn(1446, 3, 1) - islamic_to_jdn(1446, 2, 1), 29);
    }

    #[test]
    fn year_estimate() {
        assert_eq!(approx_islamic_year(2025), 1446);
        assert_eq!(approx_islamic_year(622), 0);
    }

    #[test]
    fn eid_al_fitr_2025() {
        // 1 Shawwal 1446 AH falls on 2025-03-30 in the tabular calendar.
        let hits = islamic_occurrences(2025, 10, 1);
        assert_eq!(hits, vec![GregorianDate::new(2025, 3, 30)]);
    }

    #[test]
    fn eid_al_adha_2025() {
        // 10 Dhu al-Hijjah 1446 AH falls on 2025-06-06.
        let hits = islamic_occurrences(2025, 12, 10);
        assert_eq!(hits, vec![GregorianDate::new(2025, 6, 6)]);
    }

    #[test]
    fn mawlid_2025() {
        // 12 Rabi' al-awwal 1447 AH falls on 2025-09-04.
        let hits = islamic_occurrences(2025, 3, 12);
        assert_eq!(hits, vec![GregorianDate::new(2025, 9, 4)]);
    }

    #[test]
    fn occurrence_counts_stay_bounded() {
        for year in 2000..=2100 {
            for &(m, d) in &[(10, 1), (12, 10), (3, 12)] {
                let n = islamic_occurrences(year, m, d).len();
                assert!(n <= 2, "{n} occurrences for {m}/{d} in {year}");
            }
        }
    }

    #[test]
    fn muharram_1_doubles_up_eventually() {
        // The ~354-day year drifts through the solar year; some Gregorian
        // year in any 35-year span sees two Islamic new years.
        let doubled = (2000..=2035)
            .any(|year| islamic_occurrences(year, 1, 1).len() == 2);
        assert!(doubled, "expected a double Islamic new year in 2000..=2035");
    }
}
