//! Page navigation control for the results list.
//!
//! The control only reports which page was asked for. It never validates
//! the target; the owner decides what to do with out-of-range requests.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

use crate::state::pagination::total_pages;

/// Page numbers to render as buttons, `1..=total_pages`.
pub fn page_numbers(total_items: usize, items_per_page: usize) -> Vec<usize> {
    (1..=total_pages(total_items, items_per_page)).collect()
}

/// Status text next to the buttons.
pub fn page_summary(current_page: usize, total_items: usize, items_per_page: usize) -> String {
    match total_pages(total_items, items_per_page) {
        0 => "No pages".to_owned(),
        pages => format!("Page {current_page} of {pages}"),
    }
}

/// Previous / numbered / next buttons. Each click runs `on_page_change`
/// with the target page number.
#[component]
pub fn Pagination(
    #[prop(into)] total_items: Signal<usize>,
    items_per_page: usize,
    #[prop(into)] current_page: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let pages = move || total_pages(total_items.get(), items_per_page);

    view! {
        <nav class="pagination" aria-label="Pagination">
            <button
                class="btn pagination__prev"
                disabled=move || current_page.get() <= 1
                on:click=move |_| on_page_change.run(current_page.get_untracked().saturating_sub(1))
            >
                "Previous"
            </button>
            {move || {
                page_numbers(total_items.get(), items_per_page)
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="btn pagination__page"
                                class:pagination__page--active=move || current_page.get() == page
                                aria-current=move || (current_page.get() == page).then_some("page")
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <button
                class="btn pagination__next"
                disabled=move || current_page.get() >= pages()
                on:click=move |_| on_page_change.run(current_page.get_untracked() + 1)
            >
                "Next"
            </button>
            <span class="pagination__summary">
                {move || page_summary(current_page.get(), total_items.get(), items_per_page)}
            </span>
        </nav>
    }
}
