//! Span queries, search, and the cross-calendar annual listing.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use abushakir_arith::{add_days, current_gregorian_year, today};
use abushakir_calendar::{Calendar, Date, EthiopicDate, GregorianDate, Jdn};

use crate::catalog::Catalog;
use crate::highlight::{DatedHighlight, Highlight, HighlightCategory, ResolvedHighlight};

impl Catalog {
    /// Highlights across the 7 days starting at `start`.
    ///
    /// With `include_weekends` false, Saturdays and Sundays (by Gregorian
    /// weekday) are skipped entirely.
    pub fn for_week(&self, start: Date, include_weekends: bool) -> Vec<DatedHighlight> {
        let mut out = Vec::new();
        for offset in 0..7 {
            let current = add_days(start, offset);
            let gregorian = current.to_gregorian();
            if !include_weekends && gregorian.weekday().is_weekend() {
                continue;
            }
            out.extend(
                self.for_day(current)
                    .into_iter()
                    .map(|highlight| DatedHighlight { highlight, gregorian }),
            );
        }
        out
    }

    /// Highlights across an inclusive date range.
    ///
    /// Walks the span day by day in the calendar of `start`, so fixed
    /// records of that calendar and converted movable occurrences both
    /// surface. `end` before `start` yields an empty result.
    pub fn in_range(&self, start: Date, end: Date) -> Vec<DatedHighlight> {
        let calendar = start.calendar();
        let mut out = Vec::new();
        for jdn in start.to_jdn()..=end.to_jdn() {
            let date = Date::from_jdn(jdn, calendar);
            let gregorian = date.to_gregorian();
            out.extend(
                self.for_day(date)
                    .into_iter()
                    .map(|highlight| DatedHighlight { highlight, gregorian }),
            );
        }
        out
    }

    /// Today's highlights (UTC), dated.
    pub fn todays_highlights(&self) -> Vec<DatedHighlight> {
        let gregorian = today(Calendar::Gregorian).to_gregorian();
        self.for_gregorian_day(gregorian)
            .into_iter()
            .map(|highlight| DatedHighlight { highlight, gregorian })
            .collect()
    }

    /// Free-text search over English and Amharic names.
    ///
    /// English matching is case-insensitive substring; Amharic matching is
    /// exact substring. Movable rules are included at their occurrences
    /// for the current UTC Gregorian year.
    pub fn search(&self, query: &str) -> Vec<Highlight> {
        let needle = query.to_lowercase();
        self.assemble_current_year()
            .into_iter()
            .filter(|h| h.name.to_lowercase().contains(&needle) || h.amharic_name.contains(query))
            .collect()
    }

    /// Highlights of one category, movable rules included for the current
    /// UTC Gregorian year.
    pub fn by_category(&self, category: HighlightCategory) -> Vec<Highlight> {
        self.assemble_current_year()
            .into_iter()
            .filter(|h| h.category == Some(category))
            .collect()
    }

    /// Both fixed tables plus every rule's current-year occurrences.
    fn assemble_current_year(&self) -> Vec<Highlight> {
        let year = current_gregorian_year();
        let mut all: Vec<Highlight> = self
            .fixed_ethiopic()
            .iter()
            .chain(self.fixed_gregorian().iter())
            .copied()
            .collect();
        for rule in self.rules() {
            for occurrence in rule.occurrences(year) {
                all.push(rule.as_highlight(Calendar::Gregorian, occurrence.month, occurrence.day));
            }
        }
        all
    }

    /// Every highlight of a year, fully cross-resolved.
    ///
    /// `calendar` picks the year boundary. Records defined in the other
    /// calendar are evaluated over a ±1 window of its candidate years and
    /// kept when the converted occurrence lands inside the requested year.
    /// Entries collapsing to the same `(canonical id, Gregorian date)` are
    /// merged (tag sets union, category from whichever entry had one) and
    /// the result is sorted by Gregorian JDN.
    pub fn list_all(&self, year: i32, calendar: Calendar) -> Vec<ResolvedHighlight> {
        let mut resolved: Vec<ResolvedHighlight> = Vec::new();
        let mut index: BTreeMap<(&'static str, Jdn), usize> = BTreeMap::new();

        let mut push = |id: &'static str,
                        name: &'static str,
                        amharic_name: &'static str,
                        category: Option<HighlightCategory>,
                        tags: &'static [&'static str],
                        gregorian: GregorianDate| {
            let id = self.canonical_id(id);
            match index.entry((id, gregorian.to_jdn())) {
                Entry::Vacant(slot) => {
                    slot.insert(resolved.len());
                    resolved.push(ResolvedHighlight {
                        id,
                        name,
                        amharic_name,
                        category,
                        tags: tags.to_vec(),
                        gregorian,
                        ethiopic: gregorian.to_ethiopic(),
                    });
                }
                Entry::Occupied(slot) => {
                    let entry = &mut resolved[*slot.get()];
                    for &tag in tags {
                        if !entry.tags.contains(&tag) {
                            entry.tags.push(tag);
                        }
                    }
                    if entry.category.is_none() {
                        entry.category = category;
                    }
                }
            }
        };

        match calendar {
            Calendar::Gregorian => {
                for h in self.fixed_gregorian() {
                    let g = GregorianDate::new(year, h.month, h.day);
                    push(h.id, h.name, h.amharic_name, h.category, h.tags, g);
                }
                for rule in self.rules() {
                    for g in rule.occurrences(year) {
                        push(rule.id, rule.name, rule.amharic_name, rule.category, rule.tags, g);
                    }
                }
                // Ethiopic-defined records that land inside this Gregorian year.
                let anchor = GregorianDate::new(year, 1, 1).to_ethiopic().year;
                for ethiopic_year in anchor - 1..=anchor + 1 {
                    for h in self.fixed_ethiopic() {
                        let g = EthiopicDate::new(ethiopic_year, h.month, h.day).to_gregorian();
                        if g.year == year {
                            push(h.id, h.name, h.amharic_name, h.category, h.tags, g);
                        }
                    }
                }
            }
            Calendar::Ethiopic => {
                for h in self.fixed_ethiopic() {
                    let g = EthiopicDate::new(year, h.month, h.day).to_gregorian();
                    push(h.id, h.name, h.amharic_name, h.category, h.tags, g);
                }
                let anchor = EthiopicDate::new(year, 1, 1).to_gregorian().year;
                for gregorian_year in anchor - 1..=anchor + 1 {
                    // Gregorian-defined records that land inside this Ethiopic year.
                    for h in self.fixed_gregorian() {
                        let g = GregorianDate::new(gregorian_year, h.month, h.day);
                        if g.to_ethiopic().year == year {
                            push(h.id, h.name, h.amharic_name, h.category, h.tags, g);
                        }
                    }
                    for rule in self.rules() {
                        for g in rule.occurrences(gregorian_year) {
                            if g.to_ethiopic().year == year {
                                push(
                                    rule.id,
                                    rule.name,
                                    rule.amharic_name,
                                    rule.category,
                                    rule.tags,
                                    g,
                                );
                            }
                        }
                    }
                }
            }
        }

        resolved.sort_by_key(|r| r.gregorian.to_jdn());
        resolved
    }
}
