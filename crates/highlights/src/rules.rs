//! Movable-date highlight rules.
//!
//! Each rule is data plus a tagged computation kind; dispatch happens in
//! [`DynamicRule::occurrences`] with an exhaustive match. Keeping the kind
//! as a variant (rather than a closure embedded in the record) keeps the
//! rule set serializable and the dispatch visible in one place.

use abushakir_calendar::{Calendar, GregorianDate, Weekday, jdn_to_gregorian};
use abushakir_feasts::{
    first_weekday_of_gregorian_month, islamic_occurrences, orthodox_easter, orthodox_easter_jdn,
};

use crate::highlight::{Highlight, HighlightCategory};

/// How a rule computes its Gregorian occurrences for a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Orthodox Easter Sunday itself.
    OrthodoxEaster,
    /// A fixed JDN offset from Orthodox Easter (negative = before).
    EasterOffset { days: i64 },
    /// A fixed day of the tabular Islamic calendar.
    TabularIslamic { month: u8, day: u8 },
    /// The first given weekday of a Gregorian month.
    FirstWeekday { month: u8, weekday: Weekday },
}

/// A movable-date highlight: metadata plus its computation kind.
#[derive(Debug, Clone, Copy)]
pub struct DynamicRule {
    pub id: &'static str,
    pub name: &'static str,
    pub amharic_name: &'static str,
    pub category: Option<HighlightCategory>,
    pub tags: &'static [&'static str],
    pub kind: RuleKind,
}

impl DynamicRule {
    /// All Gregorian occurrences of this rule within `year`.
    ///
    /// Easter-derived and first-weekday rules yield exactly one date; the
    /// tabular Islamic rules yield zero, one, or two (lunar drift).
    pub fn occurrences(&self, year: i32) -> Vec<GregorianDate> {
        match self.kind {
            RuleKind::OrthodoxEaster => vec![orthodox_easter(year)],
            RuleKind::EasterOffset { days } => {
                vec![jdn_to_gregorian(orthodox_easter_jdn(year) + days)]
            }
            RuleKind::TabularIslamic { month, day } => islamic_occurrences(year, month, day),
            RuleKind::FirstWeekday { month, weekday } => {
                vec![first_weekday_of_gregorian_month(year, month, weekday)]
            }
        }
    }

    /// Materializes this rule as a [`Highlight`] at a resolved position.
    pub(crate) fn as_highlight(&self, calendar: Calendar, month: u8, day: u8) -> Highlight {
        Highlight {
            id: self.id,
            name: self.name,
            amharic_name: self.amharic_name,
            calendar,
            month,
            day,
            category: self.category,
            tags: self.tags,
        }
    }
}

/// The movable-date rules shipped with the catalog.
#[rustfmt::skip]
pub const DYNAMIC_RULES: [DynamicRule; 8] = [
    DynamicRule { id: "fasika",             name: "Ethiopian Easter (Fasika)", amharic_name: "ፋሲካ", category: Some(HighlightCategory::Religious), tags: &["christian", "orthodox", "ethiopia", "public-holiday"], kind: RuleKind::OrthodoxEaster },
    DynamicRule { id: "good_friday",        name: "Good Friday (Orthodox/Ethiopian)", amharic_name: "ስቅለት ዓርብ", category: Some(HighlightCategory::Religious), tags: &["christian", "orthodox", "public-holiday"], kind: RuleKind::EasterOffset { days: -2 } },
    DynamicRule { id: "hosanna",            name: "Hosanna (Palm Sunday)", amharic_name: "ሆሳና", category: Some(HighlightCategory::Religious), tags: &["christian", "orthodox"], kind: RuleKind::EasterOffset { days: -7 } },
    DynamicRule { id: "eid_al_fitr",        name: "Eid al-Fitr", amharic_name: "ኢድ አል-ፊትር", category: Some(HighlightCategory::Religious), tags: &["muslim", "islamic", "public-holiday"], kind: RuleKind::TabularIslamic { month: 10, day: 1 } },
    DynamicRule { id: "eid_al_adha",        name: "Eid al-Adha", amharic_name: "ኢድ አል-አድሐ", category: Some(HighlightCategory::Religious), tags: &["muslim", "islamic", "public-holiday"], kind: RuleKind::TabularIslamic { month: 12, day: 10 } },
    DynamicRule { id: "mawlid",             name: "Mawlid (Prophet's Birthday)", amharic_name: "መውሊድ", category: Some(HighlightCategory::Religious), tags: &["muslim", "islamic", "public-holiday"], kind: RuleKind::TabularIslamic { month: 3, day: 12 } },
    DynamicRule { id: "irreechaa_finfinne", name: "Irreechaa (Hora Finfinne)", amharic_name: "ኢሬቻ (ሆራ ፊንፊኔ)", category: Some(HighlightCategory::Observance), tags: &["oromo", "ethiopia", "thanksgiving"], kind: RuleKind::FirstWeekday { month: 10, weekday: Weekday::Saturday } },
    DynamicRule { id: "irreechaa_bishoftu", name: "Irreechaa (Hora Arsadi, Bishoftu)", amharic_name: "ኢሬቻ (ሆራ አርሰዲ)", category: Some(HighlightCategory::Observance), tags: &["oromo", "ethiopia", "thanksgiving"], kind: RuleKind::FirstWeekday { month: 10, weekday: Weekday::Sunday } },
];
