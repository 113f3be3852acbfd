//! Fixed-date highlight tables and the canonical-id synonym map.
//!
//! Plain reference data: `(calendar, month, day)` records with English and
//! Amharic labels. Events observed in both calendars appear in both tables
//! under distinct ids; the synonym map collapses them during resolution.

use abushakir_calendar::Calendar;

use crate::highlight::{Highlight, HighlightCategory};

/// Fixed Ethiopic dates (Amete Mihret numbering).
#[rustfmt::skip]
pub const ETHIOPIC_HIGHLIGHTS: [Highlight; 10] = [
    Highlight { id: "enkutatash", name: "Ethiopian New Year (Enkutatash)", amharic_name: "እንቁጣጣሽ (ኢትዮጵያ አዲስ ዓመት)", calendar: Calendar::Ethiopic, month: 1, day: 1,  category: Some(HighlightCategory::National),  tags: &["ethiopia", "new-year", "public-holiday"] },
    Highlight { id: "demera",     name: "Demera (Meskel Eve)", amharic_name: "ደመራ (መስቀል ዋዜማ)", calendar: Calendar::Ethiopic, month: 1, day: 16, category: Some(HighlightCategory::Religious), tags: &["christian", "orthodox"] },
    Highlight { id: "meskel",     name: "Meskel (Finding of the True Cross)", amharic_name: "መስቀል (የእውነተኛው መስቀል ማግኘት)", calendar: Calendar::Ethiopic, month: 1, day: 17, category: Some(HighlightCategory::Religious), tags: &["christian", "orthodox", "ethiopia", "public-holiday"] },
    Highlight { id: "nnpd_e",     name: "Nations, Nationalities and Peoples' Day", amharic_name: "የብሄር ብሄረሰቦች ቀን", calendar: Calendar::Ethiopic, month: 3, day: 29, category: Some(HighlightCategory::National),  tags: &["ethiopia", "unity", "public-holiday"] },
    Highlight { id: "genna",      name: "Genna (Ethiopian Christmas)", amharic_name: "ገና (ኢትዮጵያ የገና በዓል)", calendar: Calendar::Ethiopic, month: 4, day: 29, category: Some(HighlightCategory::Religious), tags: &["christian", "orthodox", "ethiopia", "public-holiday"] },
    Highlight { id: "ketera",     name: "Ketera (Timkat Eve)", amharic_name: "ቀጤራ (የጥምቀት ዋዜማ)", calendar: Calendar::Ethiopic, month: 5, day: 10, category: Some(HighlightCategory::Religious), tags: &["christian", "orthodox"] },
    Highlight { id: "timkat",     name: "Timkat (Epiphany)", amharic_name: "ጥምቀት (ብርሃነ ጥምቀት)", calendar: Calendar::Ethiopic, month: 5, day: 11, category: Some(HighlightCategory::Religious), tags: &["christian", "orthodox", "public-holiday"] },
    Highlight { id: "adwa_e",     name: "Adwa Victory Day", amharic_name: "የአድዋ ድል ቀን", calendar: Calendar::Ethiopic, month: 6, day: 23, category: Some(HighlightCategory::National),  tags: &["ethiopia", "history", "public-holiday"] },
    Highlight { id: "patriots_e", name: "Patriots' Victory Day", amharic_name: "የአርበኞች ድል ቀን", calendar: Calendar::Ethiopic, month: 8, day: 27, category: Some(HighlightCategory::National),  tags: &["ethiopia", "history", "public-holiday"] },
    Highlight { id: "derg_e",     name: "Derg Downfall Day (National Day)", amharic_name: "የደርግ ውድቀት ቀን", calendar: Calendar::Ethiopic, month: 9, day: 20, category: Some(HighlightCategory::National),  tags: &["ethiopia", "history", "national-day", "public-holiday"] },
];

/// Fixed Gregorian dates.
#[rustfmt::skip]
pub const GREGORIAN_HIGHLIGHTS: [Highlight; 11] = [
    Highlight { id: "g_new_year",   name: "New Year's Day", amharic_name: "አዲስ ዓመት ቀን", calendar: Calendar::Gregorian, month: 1,  day: 1,  category: Some(HighlightCategory::Observance), tags: &["international"] },
    Highlight { id: "genna_g",      name: "Ethiopian Christmas (Genna)", amharic_name: "ገና (ኢትዮጵያ)", calendar: Calendar::Gregorian, month: 1,  day: 7,  category: Some(HighlightCategory::Religious),  tags: &["christian", "orthodox", "ethiopia", "public-holiday"] },
    Highlight { id: "timkat_g",     name: "Ethiopian Epiphany (Timkat)", amharic_name: "ጥምቀት (ቲምቃት)", calendar: Calendar::Gregorian, month: 1,  day: 19, category: Some(HighlightCategory::Religious),  tags: &["christian", "orthodox", "ethiopia", "public-holiday"] },
    Highlight { id: "adwa",         name: "Adwa Victory Day (ET)", amharic_name: "የአድዋ ድል ቀን", calendar: Calendar::Gregorian, month: 3,  day: 2,  category: Some(HighlightCategory::National),   tags: &["ethiopia", "history", "public-holiday"] },
    Highlight { id: "labour",       name: "International Labor Day", amharic_name: "ዓለም አቀፍ የሠራተኞች ቀን", calendar: Calendar::Gregorian, month: 5,  day: 1,  category: Some(HighlightCategory::Observance), tags: &["international", "labor", "public-holiday"] },
    Highlight { id: "patriots",     name: "Patriots' Victory Day (ET)", amharic_name: "የአርበኞች ድል ቀን", calendar: Calendar::Gregorian, month: 5,  day: 5,  category: Some(HighlightCategory::National),   tags: &["ethiopia", "history", "public-holiday"] },
    Highlight { id: "derg",         name: "Derg Downfall Day (ET)", amharic_name: "የደርግ ውድቀት ቀን", calendar: Calendar::Gregorian, month: 5,  day: 28, category: Some(HighlightCategory::National),   tags: &["ethiopia", "history", "national-day", "public-holiday"] },
    Highlight { id: "enkutatash_g", name: "Ethiopian New Year (Enkutatash)", amharic_name: "እንቁጣጣሽ (ኢትዮጵያ አዲስ ዓመት)", calendar: Calendar::Gregorian, month: 9,  day: 11, category: Some(HighlightCategory::National),   tags: &["ethiopia", "new-year", "public-holiday"] },
    Highlight { id: "meskel_g",     name: "Meskel (ET) - Gregorian observance", amharic_name: "መስቀል (ኢትዮጵያ) - ግሪጎሪያን አከባበር", calendar: Calendar::Gregorian, month: 9,  day: 27, category: Some(HighlightCategory::Religious),  tags: &["christian", "orthodox", "ethiopia", "public-holiday"] },
    Highlight { id: "nnpd",         name: "Nations, Nationalities and Peoples' Day (ET)", amharic_name: "የሕዝቦች ብሔሮችና ብሄራዊ ቀን", calendar: Calendar::Gregorian, month: 12, day: 8,  category: Some(HighlightCategory::National),   tags: &["ethiopia", "unity", "public-holiday"] },
    Highlight { id: "christmas",    name: "Christmas Day", amharic_name: "የገና ቀን", calendar: Calendar::Gregorian, month: 12, day: 25, category: Some(HighlightCategory::Religious),  tags: &["christian"] },
];

/// Synonym map: ids that name the same event in the other calendar's table,
/// collapsed to one canonical id during resolution.
pub const CANONICAL_IDS: [(&str, &str); 5] = [
    ("meskel_g", "meskel"),
    ("genna_g", "genna"),
    ("adwa_e", "adwa"),
    ("patriots_e", "patriots"),
    ("derg_e", "derg"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_carry_core_events() {
        let ids: Vec<&str> = ETHIOPIC_HIGHLIGHTS.iter().map(|h| h.id).collect();
        assert!(ids.contains(&"enkutatash"));
        assert!(ids.contains(&"meskel"));
        assert!(ids.contains(&"timkat"));
        assert!(ids.contains(&"genna"));
    }

    #[test]
    fn meskel_gregorian_observance_date() {
        let meskel_g = GREGORIAN_HIGHLIGHTS
            .iter()
            .copied()
            .find(|h| h.id == "meskel_g")
            .unwrap();
        assert_eq!((meskel_g.month, meskel_g.day), (9, 27));
    }

    #[test]
    fn every_entry_has_amharic_name() {
        for h in ETHIOPIC_HIGHLIGHTS.iter().chain(GREGORIAN_HIGHLIGHTS.iter()) {
            assert!(!h.amharic_name.is_empty(), "{} missing Amharic name", h.id);
        }
    }

    #[test]
    fn table_entries_match_their_calendar() {
        for h in &ETHIOPIC_HIGHLIGHTS {
            assert_eq!(h.calendar, Calendar::Ethiopic);
            assert!((1..=13).contains(&h.month), "{}", h.id);
        }
        for h in &GREGORIAN_HIGHLIGHTS {
            assert_eq!(h.calendar, Calendar::Gregorian);
            assert!((1..=12).contains(&h.month), "{}", h.id);
        }
    }

    #[test]
    fn synonyms_point_at_real_ids() {
        for (alias, canonical) in CANONICAL_IDS {
            let in_tables = |id| {
                ETHIOPIC_HIGHLIGHTS.iter().chain(GREGORIAN_HIGHLIGHTS.iter()).any(|h| h.id == id)
            };
            assert!(in_tables(alias), "alias {alias} not in tables");
            assert!(in_tables(canonical), "canonical {canonical} not in tables");
        }
    }

    #[test]
    fn ids_are_unique_within_tables() {
        let mut all: Vec<&str> = ETHIOPIC_HIGHLIGHTS
            .iter()
            .chain(GREGORIAN_HIGHLIGHTS.iter())
            .map(|h| h.id)
            .collect();
        all.sort_unstable();
        let before = all.len();
        all.dedup();
        assert_eq!(all.len(), before);
    }
}
