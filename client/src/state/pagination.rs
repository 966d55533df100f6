//! Page-window math for the card list.
//!
//! DESIGN
//! ======
//! The requested page is kept as-is when the underlying list changes; the
//! page actually shown is derived by clamping on every read. Raw windowing
//! never fails: pages past the end simply yield an empty slice.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Fixed number of cards shown per page.
pub const ITEMS_PER_PAGE: usize = 5;

/// Number of pages needed for `total_items`. Zero for an empty list.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

/// Contiguous slice for the 1-based `current_page`, clipped to `records`.
///
/// Page `0`, pages beyond the end and a zero page size all yield `&[]`.
pub fn window<T>(records: &[T], current_page: usize, items_per_page: usize) -> &[T] {
    if current_page == 0 || items_per_page == 0 {
        return &[];
    }
    let Some(start) = (current_page - 1).checked_mul(items_per_page) else {
        return &[];
    };
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(items_per_page).min(records.len());
    &records[start..end]
}

/// Clamp `page` into `[1, total_pages]`, or `1` when there are no pages.
pub fn clamp_page(page: usize, total_items: usize, items_per_page: usize) -> usize {
    page.clamp(1, total_pages(total_items, items_per_page).max(1))
}

/// Requested page plus page size for one list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    /// Last page the user asked for. Not validated.
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self { current_page: 1, items_per_page: ITEMS_PER_PAGE }
    }
}

impl PageState {
    /// Record a page-change request without bounds checks.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Page actually shown for a list of `total_items`.
    pub fn effective_page(&self, total_items: usize) -> usize {
        clamp_page(self.current_page, total_items, self.items_per_page)
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_pages(total_items, self.items_per_page)
    }

    /// Cards visible on the effective page.
    pub fn visible<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        window(records, self.effective_page(records.len()), self.items_per_page)
    }
}
