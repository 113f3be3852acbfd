use abushakir_calendar::{
    Era, EthiopicDate, GregorianDate, ethiopic_days_in_month, gregorian_days_in_month,
    is_ethiopic_leap_year,
};

#[test]
fn new_year_2017_to_gregorian() {
    let e = EthiopicDate::new(2017, 1, 1);
    assert_eq!(e.to_gregorian(), GregorianDate::new(2024, 9, 11));
}

#[test]
fn genna_2025_to_ethiopic() {
    let g = GregorianDate::new(2025, 1, 7);
    assert_eq!(g.to_ethiopic(), EthiopicDate::new(2017, 4, 29));
    assert_eq!(g.to_ethiopic().era, Era::AmeteMihret);
}

#[test]
fn gregorian_roundtrip_two_centuries() {
    for year in 1900..=2100 {
        for month in 1..=12u8 {
            let max = gregorian_days_in_month(year, month).unwrap();
            for day in 1..=max {
                let date = GregorianDate::new(year, month, day);
                let back = date.to_ethiopic().to_gregorian();
                assert_eq!(back, date, "roundtrip failed for {date}");
            }
        }
    }
}

#[test]
fn ethiopic_roundtrip_four_decades() {
    for year in 1990..=2030 {
        for month in 1..=13u8 {
            let max = ethiopic_days_in_month(year, month, Era::AmeteMihret).unwrap();
            for day in 1..=max {
                let date = EthiopicDate::new(year, month, day);
                let back = date.to_gregorian().to_ethiopic();
                assert_eq!(back, date, "roundtrip failed for {date}");
            }
        }
    }
}

#[test]
fn jdn_roundtrip_wide_sweep() {
    // ~1100 Gregorian years of consecutive days through both inverses.
    let start = GregorianDate::new(1500, 1, 1).to_jdn();
    let end = GregorianDate::new(2600, 1, 1).to_jdn();
    for jdn in start..end {
        assert_eq!(GregorianDate::from_jdn(jdn).to_jdn(), jdn);
        assert_eq!(EthiopicDate::from_jdn(jdn).to_jdn(), jdn);
    }
}

#[test]
fn amete_alem_matches_amete_mihret() {
    let am = EthiopicDate::new(2017, 4, 29);
    let aa = EthiopicDate::new(7517, 4, 29).with_era(Era::AmeteAlem);
    assert_eq!(am.to_gregorian(), aa.to_gregorian());
}

#[test]
fn epoch_boundary() {
    // Conversions stay consistent right at the start of the era.
    let g = GregorianDate::new(8, 8, 29);
    let e = g.to_ethiopic();
    assert_eq!(e.year, 1);
    assert_eq!(e.era, Era::AmeteMihret);
    assert_eq!(e.to_gregorian(), g);
}

#[test]
fn leap_spot_checks() {
    // Ethiopic leap years put the Gregorian new-year crossing one day later.
    assert!(is_ethiopic_leap_year(2015, Era::AmeteMihret));
    assert_eq!(
        EthiopicDate::new(2016, 1, 1).to_gregorian(),
        GregorianDate::new(2023, 9, 12)
    );
    assert_eq!(
        EthiopicDate::new(2017, 1, 1).to_gregorian(),
        GregorianDate::new(2024, 9, 11)
    );
}

#[test]
fn permissive_invalid_days_normalize() {
    // Feb 30 and Pagume 7 (non-leap) are tolerated, not rejected.
    let feb30 = GregorianDate::new(2023, 2, 30).to_ethiopic();
    assert_eq!(feb30.to_gregorian(), GregorianDate::new(2023, 3, 2));

    let pagume7 = EthiopicDate::new(2015, 13, 7).to_gregorian();
    assert_eq!(pagume7.to_ethiopic(), EthiopicDate::new(2016, 1, 1));
}

#[test]
fn far_years_roundtrip() {
    for &(y, m, d) in &[(100, 1, 1), (1000, 7, 15), (3000, 1, 1), (9999, 12, 31)] {
        let g = GregorianDate::new(y, m, d);
        assert_eq!(g.to_ethiopic().to_gregorian(), g, "failed for {g}");
    }
}
