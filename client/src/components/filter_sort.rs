//! Filter and sort controls for the results list.
//!
//! DESIGN
//! ======
//! The widget is handed the page's filtered set and returns a new one through
//! `on_filter_sort`. A `FilterSession` holds the unfiltered baseline so
//! loosening a filter brings cards back. `reset_on` is the upstream source:
//! when it changes the owner re-seeds the list, so the controls reset too.

use leptos::prelude::*;

use crate::net::types::{Card, Category};
use crate::state::filter::{FilterCriteria, FilterSession, SortKey};

/// Category `<select>` value meaning "all categories".
const ALL_CATEGORIES: &str = "";

/// Category select, free-text search and sort select.
#[component]
pub fn FilterSort(
    #[prop(into)] items: Signal<Vec<Card>>,
    #[prop(into)] reset_on: Signal<Vec<Card>>,
    on_filter_sort: Callback<Vec<Card>>,
) -> impl IntoView {
    let session = RwSignal::new(FilterSession::default());
    let criteria = move || session.with(|s| s.criteria.clone());

    // Source replaced upstream: the list was re-seeded unfiltered.
    Effect::new(move || {
        reset_on.track();
        session.update(FilterSession::reset);
    });

    let update = move |edit: &dyn Fn(&mut FilterCriteria)| {
        let mut next = Vec::new();
        items.with_untracked(|items| session.update(|s| next = s.edit(items, edit)));
        on_filter_sort.run(next);
    };

    view! {
        <div class="filter-sort">
            <label class="filter-sort__field">
                "Category"
                <select
                    class="filter-sort__select"
                    prop:value=move || criteria().category.map_or(ALL_CATEGORIES, Category::as_str)
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        update(&|c| c.category = Category::parse(&value));
                    }
                >
                    <option value=ALL_CATEGORIES>"All"</option>
                    {Category::ALL
                        .into_iter()
                        .map(|category| view! { <option value=category.as_str()>{category.as_str()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="filter-sort__field">
                "Search"
                <input
                    class="filter-sort__input"
                    type="search"
                    placeholder="Overview or description"
                    prop:value=move || criteria().search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        update(&|c| c.search.clone_from(&value));
                    }
                />
            </label>
            <label class="filter-sort__field">
                "Sort"
                <select
                    class="filter-sort__select"
                    prop:value=move || criteria().sort.as_str()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        update(&|c| c.sort = SortKey::parse(&value));
                    }
                >
                    {SortKey::ALL
                        .into_iter()
                        .map(|key| view! { <option value=key.as_str()>{key.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
        </div>
    }
}
