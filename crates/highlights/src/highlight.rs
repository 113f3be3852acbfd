//! Highlight record types.

use abushakir_calendar::{Calendar, EthiopicDate, GregorianDate};
use serde::Serialize;

/// Coarse classification of a highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightCategory {
    Religious,
    National,
    Observance,
}

/// A calendar-linked holiday or observance.
///
/// Static table entries carry the `(calendar, month, day)` the event is
/// defined on; entries produced from dynamic rules carry the occurrence
/// computed for a particular year. All string data is `'static` reference
/// data: the tables are loaded once and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub id: &'static str,
    /// English name.
    pub name: &'static str,
    /// Amharic name.
    pub amharic_name: &'static str,
    /// The calendar this occurrence is expressed in.
    pub calendar: Calendar,
    pub month: u8,
    pub day: u8,
    pub category: Option<HighlightCategory>,
    /// Further descriptors: "orthodox", "muslim", "public-holiday", ...
    pub tags: &'static [&'static str],
}

/// A highlight pinned to the concrete day it was found on.
///
/// Week and range queries return these, since the same record can match
/// several days of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatedHighlight {
    #[serde(flatten)]
    pub highlight: Highlight,
    /// Gregorian date of the matched day.
    pub gregorian: GregorianDate,
}

/// A fully cross-resolved highlight: one physical occurrence expressed in
/// both calendars, deduplicated under its canonical id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedHighlight {
    /// Canonical id (synonym ids collapse into this).
    pub id: &'static str,
    pub name: &'static str,
    pub amharic_name: &'static str,
    pub category: Option<HighlightCategory>,
    /// Union of the tag sets of every collapsed entry.
    pub tags: Vec<&'static str>,
    /// The occurrence in the Gregorian calendar.
    pub gregorian: GregorianDate,
    /// The same physical day in the Ethiopic calendar (Amete Mihret).
    pub ethiopic: EthiopicDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<Highlight>();
        assert_copy::<DatedHighlight>();
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&HighlightCategory::Religious).unwrap();
        assert_eq!(json, "\"religious\"");
    }
}
