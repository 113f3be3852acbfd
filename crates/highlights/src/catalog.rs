//! The highlight catalog: immutable reference data plus point queries.

use abushakir_calendar::{Calendar, Date, EthiopicDate, GregorianDate};
use tracing::debug;

use crate::highlight::Highlight;
use crate::rules::{DYNAMIC_RULES, DynamicRule};
use crate::tables::{CANONICAL_IDS, ETHIOPIC_HIGHLIGHTS, GREGORIAN_HIGHLIGHTS};

/// Immutable highlight reference data, injected into every query.
///
/// A catalog owns nothing: it borrows `'static` tables, so it is `Copy`
/// and safe to share across threads. [`Catalog::DEFAULT`] bundles the
/// shipped tables; tests and embedders can assemble their own.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    fixed_ethiopic: &'static [Highlight],
    fixed_gregorian: &'static [Highlight],
    rules: &'static [DynamicRule],
    synonyms: &'static [(&'static str, &'static str)],
}

impl Catalog {
    /// The catalog shipped with this crate.
    pub const DEFAULT: Catalog = Catalog::new(
        &ETHIOPIC_HIGHLIGHTS,
        &GREGORIAN_HIGHLIGHTS,
        &DYNAMIC_RULES,
        &CANONICAL_IDS,
    );

    /// Assembles a catalog from caller-provided reference data.
    pub const fn new(
        fixed_ethiopic: &'static [Highlight],
        fixed_gregorian: &'static [Highlight],
        rules: &'static [DynamicRule],
        synonyms: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            fixed_ethiopic,
            fixed_gregorian,
            rules,
            synonyms,
        }
    }

    /// The fixed Ethiopic-calendar records.
    pub fn fixed_ethiopic(&self) -> &'static [Highlight] {
        self.fixed_ethiopic
    }

    /// The fixed Gregorian-calendar records.
    pub fn fixed_gregorian(&self) -> &'static [Highlight] {
        self.fixed_gregorian
    }

    /// The movable-date rules.
    pub fn rules(&self) -> &'static [DynamicRule] {
        self.rules
    }

    /// Collapses a synonym id to its canonical id.
    pub fn canonical_id(&self, id: &'static str) -> &'static str {
        self.synonyms
            .iter()
            .find(|(alias, _)| *alias == id)
            .map(|(_, canonical)| *canonical)
            .unwrap_or(id)
    }

    /// Highlights falling on a specific day in either calendar.
    pub fn for_day(&self, date: Date) -> Vec<Highlight> {
        match date {
            Date::Gregorian(d) => self.for_gregorian_day(d),
            Date::Ethiopic(d) => self.for_ethiopic_day(d),
        }
    }

    /// Highlights falling on a specific Gregorian date.
    pub fn for_gregorian_day(&self, date: GregorianDate) -> Vec<Highlight> {
        let mut out: Vec<Highlight> = self
            .fixed_gregorian
            .iter()
            .filter(|h| h.month == date.month && h.day == date.day)
            .copied()
            .collect();

        for rule in self.rules {
            for occurrence in rule.occurrences(date.year) {
                if occurrence.month == date.month && occurrence.day == date.day {
                    out.push(rule.as_highlight(Calendar::Gregorian, occurrence.month, occurrence.day));
                }
            }
        }
        out
    }

    /// Highlights falling on a specific Ethiopic date.
    ///
    /// Movable rules compute in the Gregorian calendar, and an Ethiopic
    /// year straddles two Gregorian years, so each rule is evaluated over
    /// a ±1 window of Gregorian candidate years and kept only when the
    /// converted occurrence matches this exact day.
    pub fn for_ethiopic_day(&self, date: EthiopicDate) -> Vec<Highlight> {
        let mut out: Vec<Highlight> = self
            .fixed_ethiopic
            .iter()
            .filter(|h| h.month == date.month && h.day == date.day)
            .copied()
            .collect();

        let am = EthiopicDate::new(date.am_year(), date.month, date.day);
        let anchor = am.to_gregorian().year;
        for gregorian_year in anchor - 1..=anchor + 1 {
            for rule in self.rules {
                for occurrence in rule.occurrences(gregorian_year) {
                    if occurrence.to_ethiopic() == am {
                        out.push(rule.as_highlight(Calendar::Ethiopic, am.month, am.day));
                    }
                }
            }
        }
        out
    }

    /// Highlights falling within a month of the requested calendar.
    pub fn for_month(&self, year: i32, month: u8, calendar: Calendar) -> Vec<Highlight> {
        match calendar {
            Calendar::Gregorian => {
                let mut out: Vec<Highlight> = self
                    .fixed_gregorian
                    .iter()
                    .filter(|h| h.month == month)
                    .copied()
                    .collect();
                for rule in self.rules {
                    for occurrence in rule.occurrences(year) {
                        if occurrence.month == month {
                            out.push(rule.as_highlight(
                                Calendar::Gregorian,
                                occurrence.month,
                                occurrence.day,
                            ));
                        }
                    }
                }
                out
            }
            Calendar::Ethiopic => {
                let mut out: Vec<Highlight> = self
                    .fixed_ethiopic
                    .iter()
                    .filter(|h| h.month == month)
                    .copied()
                    .collect();
                let anchor = EthiopicDate::new(year, month, 1).to_gregorian().year;
                for gregorian_year in anchor - 1..=anchor + 1 {
                    for rule in self.rules {
                        for occurrence in rule.occurrences(gregorian_year) {
                            let e = occurrence.to_ethiopic();
                            if e.year == year && e.month == month {
                                out.push(rule.as_highlight(Calendar::Ethiopic, e.month, e.day));
                            }
                        }
                    }
                }
                out
            }
        }
    }

    /// Highlights falling within a year of the requested calendar.
    pub fn for_year(&self, year: i32, calendar: Calendar) -> Vec<Highlight> {
        match calendar {
            Calendar::Gregorian => {
                let mut out: Vec<Highlight> = self.fixed_gregorian.to_vec();
                for rule in self.rules {
                    for occurrence in rule.occurrences(year) {
                        out.push(rule.as_highlight(
                            Calendar::Gregorian,
                            occurrence.month,
                            occurrence.day,
                        ));
                    }
                }
                out
            }
            Calendar::Ethiopic => {
                let mut out: Vec<Highlight> = self.fixed_ethiopic.to_vec();
                let anchor = EthiopicDate::new(year, 1, 1).to_gregorian().year;
                let mut matched = 0usize;
                for gregorian_year in anchor - 1..=anchor + 1 {
                    for rule in self.rules {
                        for occurrence in rule.occurrences(gregorian_year) {
                            let e = occurrence.to_ethiopic();
                            if e.year == year {
                                matched += 1;
                                out.push(rule.as_highlight(Calendar::Ethiopic, e.month, e.day));
                            }
                        }
                    }
                }
                if matched == 0 {
                    debug!(year, "no movable occurrences landed in Ethiopic year window");
                }
                out
            }
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::DEFAULT
    }
}
