//! Orthodox Easter and the feasts anchored to it.

use abushakir_calendar::{GregorianDate, Jdn, jdn_to_gregorian, julian_to_jdn};

/// JDN of Orthodox Easter Sunday for a Gregorian year.
///
/// Meeus' Julian-calendar computus yields a date expressed in the Julian
/// calendar; that date is carried to a JDN with the Julian calendar's own
/// epoch formula. Going through the JDN (instead of a per-century
/// Julian/Gregorian day-offset table) keeps the result exact in every
/// century.
pub fn orthodox_easter_jdn(year: i32) -> Jdn {
    let y = i64::from(year);
    let a = y.rem_euclid(4);
    let b = y.rem_euclid(7);
    let c = y.rem_euclid(19);
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let f = d + e + 114;
    // f / 31 is 3 (March) or 4 (April) in the Julian calendar.
    julian_to_jdn(year, (f / 31) as u8, (f % 31 + 1) as u8)
}

/// Orthodox Easter Sunday as a Gregorian date.
pub fn orthodox_easter(year: i32) -> GregorianDate {
    jdn_to_gregorian(orthodox_easter_jdn(year))
}

/// Good Friday: two days before Easter.
pub fn good_friday(year: i32) -> GregorianDate {
    jdn_to_gregorian(orthodox_easter_jdn(year) - 2)
}

/// Hosanna (Palm Sunday): one week before Easter.
pub fn hosanna(year: i32) -> GregorianDate {
    jdn_to_gregorian(orthodox_easter_jdn(year) - 7)
}
