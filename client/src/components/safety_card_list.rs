//! Paginated list of safety cards linking to the detail view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Receives the already filtered/sorted cards from the main page and shows
//! the current page of them. Order is never changed here. The pagination
//! control renders even when the list is empty.

#[cfg(test)]
#[path = "safety_card_list_test.rs"]
mod safety_card_list_test;

use leptos::prelude::*;

use crate::components::card_item::{CardItem, CardVariant};
use crate::components::pagination::Pagination;
use crate::net::types::Card;
use crate::state::pagination::PageState;
use crate::util::card_link::card_href;

/// Per-card fade-in stagger.
const FADE_STEP_MS: usize = 100;

/// Inline style staggering the fade-in of the `index`th visible card.
pub fn fade_in_style(index: usize) -> String {
    format!("animation-delay: {}ms", index * FADE_STEP_MS)
}

/// Cards for the shown page paired with their detail links.
pub fn visible_entries(cards: &[Card], page: &PageState) -> Vec<(String, Card)> {
    page.visible(cards).iter().map(|card| (card_href(card), card.clone())).collect()
}

/// Results list: one linked `CardItem` per visible card plus pagination.
#[component]
pub fn SafetyCardList(
    #[prop(into)] cards: Signal<Vec<Card>>,
    #[prop(into)] page: Signal<PageState>,
    on_page_change: Callback<usize>,
    #[prop(optional)] variant: CardVariant,
) -> impl IntoView {
    let total_items = Signal::derive(move || cards.with(Vec::len));
    let items_per_page = page.get_untracked().items_per_page;
    let current_page = Signal::derive(move || {
        let total = cards.with(Vec::len);
        page.get().effective_page(total)
    });

    view! {
        <div class="card-list">
            {move || {
                let page = page.get();
                cards.with(|cards| visible_entries(cards, &page))
                    .into_iter()
                    .enumerate()
                    .map(|(index, (href, card))| {
                        view! {
                            <a class="card-list__link fade-in" style=fade_in_style(index) href=href>
                                <CardItem card=card variant=variant/>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <Pagination
                total_items=total_items
                items_per_page=items_per_page
                current_page=current_page
                on_page_change=on_page_change
            />
        </div>
    }
}
