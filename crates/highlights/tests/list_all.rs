use abushakir_calendar::{Calendar, GregorianDate};
use abushakir_highlights::list_all_highlights;

#[test]
fn canonical_dedup_gregorian_2025() {
    let all = list_all_highlights(2025, Calendar::Gregorian);
    let ids: Vec<&str> = all.iter().map(|h| h.id).collect();

    assert!(ids.contains(&"genna"));
    assert!(ids.contains(&"meskel"));
    assert!(!ids.contains(&"genna_g"));
    assert!(!ids.contains(&"meskel_g"));

    let genna = all.iter().find(|h| h.id == "genna").unwrap();
    assert_eq!(genna.gregorian.month, 1);
    assert_eq!(genna.gregorian.day, 7);
}

#[test]
fn sorted_by_gregorian_date() {
    let all = list_all_highlights(2025, Calendar::Gregorian);
    for pair in all.windows(2) {
        assert!(
            pair[0].gregorian.to_jdn() <= pair[1].gregorian.to_jdn(),
            "{} sorts after {}",
            pair[0].gregorian,
            pair[1].gregorian
        );
    }
}

#[test]
fn no_canonical_and_synonym_for_same_date() {
    let synonyms = [
        ("meskel_g", "meskel"),
        ("genna_g", "genna"),
        ("adwa_e", "adwa"),
        ("patriots_e", "patriots"),
        ("derg_e", "derg"),
    ];
    for calendar in [Calendar::Gregorian, Calendar::Ethiopic] {
        let all = list_all_highlights(2024, calendar);
        for h in &all {
            for (alias, _) in synonyms {
                assert_ne!(h.id, alias, "synonym id {alias} leaked into listing");
            }
        }
    }
}

#[test]
fn entries_resolve_both_calendars() {
    let all = list_all_highlights(2024, Calendar::Gregorian);
    assert!(!all.is_empty());
    for h in &all {
        assert_eq!(h.gregorian.year, 2024);
        assert_eq!(
            h.gregorian.to_jdn(),
            h.ethiopic.to_jdn(),
            "{} dates disagree",
            h.id
        );
        assert!(!h.name.is_empty());
        assert!(!h.amharic_name.is_empty());
    }
}

#[test]
fn ethiopic_listing_stays_in_year() {
    let all = list_all_highlights(2017, Calendar::Ethiopic);
    assert!(!all.is_empty());
    for h in &all {
        assert_eq!(h.ethiopic.year, 2017, "{} outside Ethiopic 2017", h.id);
    }
    // The year spans 2024-09-11 .. 2025-09-10.
    let first = all.first().unwrap();
    let last = all.last().unwrap();
    assert!(first.gregorian >= GregorianDate::new(2024, 9, 11));
    assert!(last.gregorian <= GregorianDate::new(2025, 9, 10));
}

#[test]
fn movable_feasts_present_in_listing() {
    let all = list_all_highlights(2025, Calendar::Gregorian);
    let ids: Vec<&str> = all.iter().map(|h| h.id).collect();
    for id in ["fasika", "good_friday", "hosanna", "eid_al_fitr", "eid_al_adha", "mawlid"] {
        assert!(ids.contains(&id), "missing {id}");
    }
    let fasika = all.iter().find(|h| h.id == "fasika").unwrap();
    assert_eq!(fasika.gregorian, GregorianDate::new(2025, 4, 20));
}
