//! Card-set state for the main page: source data, filtered view, page.
//!
//! DESIGN
//! ======
//! Source changes flow through one pure reducer, `with_source`, called where
//! fetched data arrives. The filtered set is replaced wholesale with the new
//! source (sync, not merge). The requested page survives the swap; what is
//! shown is clamped by `PageState` on every read.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use crate::net::types::Card;
use crate::state::pagination::PageState;

/// Shared card state provided via context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardsState {
    /// Everything the data source returned, in source order.
    pub source: Vec<Card>,
    /// Current output of the filter/sort widget.
    pub filtered: Vec<Card>,
    pub page: PageState,
    pub loading: bool,
    pub error: Option<String>,
}

impl CardsState {
    /// Reduce a new source result into the next state.
    pub fn with_source(prev: &Self, source: Vec<Card>) -> Self {
        Self {
            filtered: source.clone(),
            source,
            page: prev.page,
            loading: false,
            error: None,
        }
    }

    /// Reduce a failed fetch. Keeps whatever was shown before.
    pub fn with_error(prev: &Self, error: String) -> Self {
        Self { loading: false, error: Some(error), ..prev.clone() }
    }

    /// Accept the filter/sort widget's output as the new filtered set.
    pub fn set_filtered(&mut self, filtered: Vec<Card>) {
        self.filtered = filtered;
    }

    /// Page-change handler. No bounds checks; see `PageState::set_page`.
    pub fn set_page(&mut self, page: usize) {
        self.page.set_page(page);
    }

    /// Cards on the page currently shown.
    pub fn visible(&self) -> &[Card] {
        self.page.visible(&self.filtered)
    }

    pub fn effective_page(&self) -> usize {
        self.page.effective_page(self.filtered.len())
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages(self.filtered.len())
    }
}
