//! Filter and sort criteria for the results list.
//!
//! DESIGN
//! ======
//! `apply` is a pure function from the current list to a new list. The
//! widget hands its output back to the page, which treats it as the new
//! filtered set. Sorting is stable so equal keys keep their input order.
//!
//! The widget is handed the filtered set, which is its own previous output
//! once a filter is active. `FilterSession` keeps the unfiltered baseline,
//! captured from the incoming list whenever the criteria are back at
//! identity, so successive edits never narrow an already-narrowed list.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::cmp::Ordering;

use crate::net::types::{Card, Category};
use crate::util::date::parse_card_date;

/// Sort order offered by the filter widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Keep source order.
    #[default]
    None,
    ScoreDesc,
    ScoreAsc,
    DateNewest,
    DateOldest,
}

impl SortKey {
    pub const ALL: [Self; 5] = [Self::None, Self::ScoreDesc, Self::ScoreAsc, Self::DateNewest, Self::DateOldest];

    /// Stable value used in the `<select>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ScoreDesc => "score_desc",
            Self::ScoreAsc => "score_asc",
            Self::DateNewest => "date_newest",
            Self::DateOldest => "date_oldest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "Default order",
            Self::ScoreDesc => "Score: high to low",
            Self::ScoreAsc => "Score: low to high",
            Self::DateNewest => "Newest first",
            Self::DateOldest => "Oldest first",
        }
    }

    pub fn parse(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == raw)
            .unwrap_or_default()
    }
}

/// Criteria edited by the filter/sort widget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Keep only this category.
    pub category: Option<Category>,
    /// Case-insensitive match against overview and description.
    pub search: String,
    pub sort: SortKey,
}

impl FilterCriteria {
    /// True when applying would return the input unchanged.
    pub fn is_identity(&self) -> bool {
        self.category.is_none() && self.search.trim().is_empty() && self.sort == SortKey::None
    }
}

/// Criteria plus the baseline list they are applied to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterSession {
    pub criteria: FilterCriteria,
    base: Vec<Card>,
}

impl FilterSession {
    /// Edit the criteria and return the list to hand back to the page.
    ///
    /// `items` is the list the widget currently sees. While no filter is
    /// active it is the unfiltered set and becomes the new baseline.
    pub fn edit(&mut self, items: &[Card], change: impl FnOnce(&mut FilterCriteria)) -> Vec<Card> {
        if self.criteria.is_identity() {
            self.base = items.to_vec();
        }
        change(&mut self.criteria);
        apply(&self.base, &self.criteria)
    }

    /// Drop the criteria; the next edit rebases on whatever list it is given.
    pub fn reset(&mut self) {
        self.criteria = FilterCriteria::default();
        self.base.clear();
    }
}

/// Apply `criteria` to `items`, returning a new list.
pub fn apply(items: &[Card], criteria: &FilterCriteria) -> Vec<Card> {
    if criteria.is_identity() {
        return items.to_vec();
    }
    let needle = criteria.search.trim().to_lowercase();
    let mut out: Vec<Card> = items
        .iter()
        .filter(|card| criteria.category.map_or(true, |category| card.category == category))
        .filter(|card| needle.is_empty() || matches_search(card, &needle))
        .cloned()
        .collect();

    match criteria.sort {
        SortKey::None => {}
        SortKey::ScoreDesc => out.sort_by(|a, b| b.severity_score.cmp(&a.severity_score)),
        SortKey::ScoreAsc => out.sort_by_key(|card| card.severity_score),
        SortKey::DateNewest => out.sort_by(|a, b| compare_dates(a, b, true)),
        SortKey::DateOldest => out.sort_by(|a, b| compare_dates(a, b, false)),
    }
    out
}

fn matches_search(card: &Card, needle: &str) -> bool {
    card.overview.to_lowercase().contains(needle) || card.description.to_lowercase().contains(needle)
}

/// Unparseable dates sort after every valid date in both directions.
fn compare_dates(a: &Card, b: &Card, newest_first: bool) -> Ordering {
    match (parse_card_date(&a.date), parse_card_date(&b.date)) {
        (Some(da), Some(db)) => {
            let by_date = if newest_first { db.cmp(&da) } else { da.cmp(&db) };
            by_date.then_with(|| compare_times(a, b, newest_first))
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_times(a: &Card, b: &Card, newest_first: bool) -> Ordering {
    let ta = a.time.as_deref().unwrap_or_default();
    let tb = b.time.as_deref().unwrap_or_default();
    if newest_first { tb.cmp(ta) } else { ta.cmp(tb) }
}
