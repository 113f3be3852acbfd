//! Julian Day Number engine (integer math).
//!
//! The JDN is the calendar-agnostic interchange value: every conversion and
//! every piece of date arithmetic in the workspace goes through it. Both
//! directions use the Fliegel–Van Flandern algorithm with division that
//! truncates toward zero; Rust's native integer `/` and `%` have exactly
//! those semantics, so the formulas are transcribed without adjustment and
//! stay valid for negative and zero years.

use serde::Serialize;

use crate::gregorian::GregorianDate;

/// Continuous integer day count, the universal interchange value.
pub type Jdn = i64;

/// Day of the week (0 = Sunday .. 6 = Saturday, USNO convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Derives the weekday from a JDN. Total over all integers.
    pub fn from_jdn(jdn: Jdn) -> Self {
        match (jdn + 1).rem_euclid(7) {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Returns the 0-based index (0 = Sunday .. 6 = Saturday).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, Self::Sunday | Self::Saturday)
    }
}

/// Proleptic Gregorian date → JDN.
///
/// Valid for any year, including zero and negative years. The day value is
/// not range-checked: out-of-range days roll into the following month.
pub fn gregorian_to_jdn(year: i32, month: u8, day: u8) -> Jdn {
    let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
    let a = (14 - m) / 12;
    let y = y + 4800 - a;
    let m = m + 12 * a - 3;
    d + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// JDN → proleptic Gregorian date.
pub fn jdn_to_gregorian(jdn: Jdn) -> GregorianDate {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146097;
    let c = a - 146097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;

    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;

    GregorianDate {
        year: year as i32,
        month: month as u8,
        day: day as u8,
    }
}

/// Proleptic Julian-calendar date → JDN.
///
/// The Julian calendar has its own epoch offset (`-32083`); computing it
/// directly keeps Julian→Gregorian carries exact in every century, without
/// per-century day-offset tables. Needed by the Orthodox Easter computus.
pub fn julian_to_jdn(year: i32, month: u8, day: u8) -> Jdn {
    let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
    let a = (14 - m) / 12;
    let y = y + 4800 - a;
    let m = m + 12 * a - 3;
    d + (153 * m + 2) / 5 + 365 * y + y / 4 - 32083
}

/// Derives the weekday from a JDN as a raw 0..=6 index (0 = Sunday).
pub fn weekday_from_jdn(jdn: Jdn) -> u8 {
    Weekday::from_jdn(jdn).index()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_jdn_anchor() {
        // 2024-09-11 (Ethiopian New Year 2017 AM) is JDN 2460565.
        assert_eq!(gregorian_to_jdn(2024, 9, 11), 2460565);
        assert_eq!(jdn_to_gregorian(2460565), GregorianDate::new(2024, 9, 11));
    }

    #[test]
    fn jdn_zero_is_monday() {
        // JDN 0 (1 January 4713 BC, Julian) fell on a Monday.
        assert_eq!(Weekday::from_jdn(0), Weekday::Monday);
    }

    #[test]
    fn weekday_total_for_negative_jdn() {
        assert_eq!(Weekday::from_jdn(-1), Weekday::Sunday);
        assert_eq!(Weekday::from_jdn(-8), Weekday::Sunday);
        assert_eq!(Weekday::from_jdn(-2), Weekday::Saturday);
    }

    #[test]
    fn weekday_known_dates() {
        // 2024-09-11 was a Wednesday, 2025-01-13 a Monday.
        assert_eq!(Weekday::from_jdn(gregorian_to_jdn(2024, 9, 11)), Weekday::Wednesday);
        assert_eq!(Weekday::from_jdn(gregorian_to_jdn(2025, 1, 13)), Weekday::Monday);
    }

    #[test]
    fn weekday_index_and_weekend() {
        assert_eq!(Weekday::Sunday.index(), 0);
        assert_eq!(Weekday::Saturday.index(), 6);
        assert!(Weekday::Sunday.is_weekend());
        assert!(Weekday::Saturday.is_weekend());
        assert!(!Weekday::Wednesday.is_weekend());
    }

    #[test]
    fn consecutive_days_consecutive_jdn() {
        let a = gregorian_to_jdn(2025, 12, 31);
        let b = gregorian_to_jdn(2026, 1, 1);
        assert_eq!(b, a + 1);
    }

    #[test]
    fn negative_year_roundtrip() {
        for &(y, m, d) in &[(-4712, 1, 1), (0, 2, 29), (-1, 12, 31), (-100, 6, 15)] {
            let jdn = gregorian_to_jdn(y, m, d);
            assert_eq!(
                jdn_to_gregorian(jdn),
                GregorianDate::new(y, m, d),
                "roundtrip failed for {y}-{m}-{d} (jdn {jdn})"
            );
        }
    }

    #[test]
    fn julian_gregorian_offset_modern() {
        // In the 21st century the Julian calendar runs 13 days behind.
        assert_eq!(julian_to_jdn(2024, 4, 22), gregorian_to_jdn(2024, 5, 5));
    }

    #[test]
    fn out_of_range_day_rolls_over() {
        // Feb 30 is tolerated and normalizes into March.
        let jdn = gregorian_to_jdn(2023, 2, 30);
        assert_eq!(jdn_to_gregorian(jdn), GregorianDate::new(2023, 3, 2));
    }
}
