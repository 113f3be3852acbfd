//! # abushakir-highlights
//!
//! Calendar-linked holidays and observances, resolved against the
//! conversion engine.
//!
//! ## Architecture
//!
//! ```text
//! Catalog::for_day() / for_month() / for_year()
//!   ├─ fixed tables            (tables.rs, exact (calendar, month, day) match)
//!   └─ movable rules           (rules.rs, per-Gregorian-year occurrences,
//!                               ±1-year window when querying Ethiopic dates)
//! Catalog::for_week() / in_range()   7-day / JDN-walk span queries
//! Catalog::search() / by_category()  name and category filters
//! Catalog::list_all()                cross-resolved, deduplicated, sorted
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use abushakir_calendar::EthiopicDate;
//! use abushakir_highlights::highlights_for_day;
//!
//! let hits = highlights_for_day(EthiopicDate::new(2017, 1, 1).into());
//! assert_eq!(hits[0].id, "enkutatash");
//! ```
//!
//! All queries run against an explicit [`Catalog`] of immutable reference
//! data; the free functions below use [`Catalog::DEFAULT`], the tables
//! shipped with this crate.

mod catalog;
mod highlight;
mod resolve;
mod rules;
mod tables;

use abushakir_calendar::{Calendar, Date};

pub use catalog::Catalog;
pub use highlight::{DatedHighlight, Highlight, HighlightCategory, ResolvedHighlight};
pub use rules::{DYNAMIC_RULES, DynamicRule, RuleKind};
pub use tables::{CANONICAL_IDS, ETHIOPIC_HIGHLIGHTS, GREGORIAN_HIGHLIGHTS};

/// Highlights on a specific day. See [`Catalog::for_day`].
pub fn highlights_for_day(date: Date) -> Vec<Highlight> {
    Catalog::DEFAULT.for_day(date)
}

/// Highlights across the week starting at `start`. See [`Catalog::for_week`].
pub fn highlights_for_week(start: Date, include_weekends: bool) -> Vec<DatedHighlight> {
    Catalog::DEFAULT.for_week(start, include_weekends)
}

/// Highlights within a month. See [`Catalog::for_month`].
pub fn highlights_for_month(year: i32, month: u8, calendar: Calendar) -> Vec<Highlight> {
    Catalog::DEFAULT.for_month(year, month, calendar)
}

/// Highlights within a year. See [`Catalog::for_year`].
pub fn highlights_for_year(year: i32, calendar: Calendar) -> Vec<Highlight> {
    Catalog::DEFAULT.for_year(year, calendar)
}

/// Highlights within an inclusive range. See [`Catalog::in_range`].
pub fn highlights_in_range(start: Date, end: Date) -> Vec<DatedHighlight> {
    Catalog::DEFAULT.in_range(start, end)
}

/// Free-text search over names. See [`Catalog::search`].
pub fn search_highlights(query: &str) -> Vec<Highlight> {
    Catalog::DEFAULT.search(query)
}

/// Category filter. See [`Catalog::by_category`].
pub fn highlights_by_category(category: HighlightCategory) -> Vec<Highlight> {
    Catalog::DEFAULT.by_category(category)
}

/// Today's highlights (UTC). See [`Catalog::todays_highlights`].
pub fn todays_highlights() -> Vec<DatedHighlight> {
    Catalog::DEFAULT.todays_highlights()
}

/// Cross-resolved annual listing. See [`Catalog::list_all`].
pub fn list_all_highlights(year: i32, calendar: Calendar) -> Vec<ResolvedHighlight> {
    Catalog::DEFAULT.list_all(year, calendar)
}
