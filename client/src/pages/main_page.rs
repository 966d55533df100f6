//! Main page: statistics beside the filterable, paginated results list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It fetches the card set once after hydration
//! and folds the result into `CardsState` through `CardsState::with_source`,
//! which is the only place the filtered set is re-seeded from the source.

use leptos::prelude::*;

use crate::components::filter_sort::FilterSort;
use crate::components::graph_stats::GraphStats;
use crate::components::safety_card_list::SafetyCardList;
use crate::net::types::Card;
use crate::state::cards::CardsState;

/// Landing page with statistics and results columns.
#[component]
pub fn MainPage() -> impl IntoView {
    let cards = expect_context::<RwSignal<CardsState>>();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_cards().await {
            Ok(source) => {
                log::info!("loaded {} safety cards", source.len());
                cards.update(|s| *s = CardsState::with_source(s, source));
            }
            Err(e) => {
                log::warn!("card fetch failed: {e}");
                cards.update(|s| *s = CardsState::with_error(s, e));
            }
        }
    });

    let source = Memo::new(move |_| cards.with(|s| s.source.clone()));
    let filtered = Memo::new(move |_| cards.with(|s| s.filtered.clone()));
    let page = Memo::new(move |_| cards.with(|s| s.page));

    let on_filter_sort = Callback::new(move |items: Vec<Card>| cards.update(|s| s.set_filtered(items)));
    let on_page_change = Callback::new(move |target: usize| cards.update(|s| s.set_page(target)));

    view! {
        <div class="main-page">
            <header class="main-page__header toolbar">
                <span class="toolbar__title">"StaySafe"</span>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <span class="toolbar__subtitle">"Safety observations"</span>
            </header>
            <div class="main-page__grid">
                <section class="main-page__column main-page__column--stats">
                    <h2 class="main-page__heading">"Statistics"</h2>
                    <GraphStats cards=source/>
                </section>
                <section class="main-page__column main-page__column--results">
                    <h2 class="main-page__heading">"Results"</h2>
                    <Show when=move || cards.with(|s| s.error.is_some())>
                        <p class="main-page__error">
                            {move || cards.with(|s| s.error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <FilterSort items=filtered reset_on=source on_filter_sort=on_filter_sort/>
                    <Show
                        when=move || !cards.with(|s| s.loading)
                        fallback=move || view! { <p class="main-page__loading">"Loading reports..."</p> }
                    >
                        <SafetyCardList cards=filtered page=page on_page_change=on_page_change/>
                    </Show>
                </section>
            </div>
        </div>
    }
}
