//! Detail view for one safety card.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the results list with every field in the query string, or
//! from the statistics panel with just an id. In the id-only case the card
//! is fetched from the API after hydration.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::card_item::{BadgeStyle, category_badge_class, score_label};
use crate::net::types::Card;
use crate::util::card_link::{DetailView, LookupResult, detail_source, detail_view};
use crate::util::date::format_badge_date;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn CardDetailPage() -> impl IntoView {
    let query = use_query_map();
    let source = Memo::new(move |_| query.with(|q| detail_source(|key| q.get(key))));
    let fetched = RwSignal::new(None::<LookupResult>);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        fetched.set(None);
        if let crate::util::card_link::DetailSource::Lookup(id) = source.get() {
            leptos::task::spawn_local(async move {
                let card = crate::net::api::fetch_card(&id).await;
                if card.is_none() {
                    log::warn!("card {id} not found");
                }
                fetched.set(Some((id, card)));
            });
        }
    });

    let content = move || source.with(|s| fetched.with(|f| detail_view(s, f.as_ref())));

    view! {
        <div class="card-detail">
            <header class="card-detail__header toolbar">
                <a class="btn toolbar__back" href="/">"← Back to results"</a>
            </header>
            {move || match content() {
                DetailView::Card(card) => view! { <CardDetailBody card=card/> }.into_any(),
                DetailView::Status(text) => view! { <p class="card-detail__status">{text}</p> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn CardDetailBody(card: Card) -> impl IntoView {
    let when = match card.time.as_deref() {
        Some(time) if !time.trim().is_empty() => format!("{} {}", format_badge_date(&card.date), time.trim()),
        _ => format_badge_date(&card.date),
    };
    let category_class = category_badge_class(card.category, BadgeStyle::Tiered);
    let has_hazards = !card.hazards.is_empty();
    let hazards = card.hazards;
    let sections = [
        ("Solution", render_markdown_html(&card.solution)),
        ("Prevention", render_markdown_html(&card.prevention)),
        ("Lesson", render_markdown_html(&card.lesson)),
    ];

    view! {
        <article class="card-detail__body">
            <h1 class="card-detail__title">{card.overview}</h1>
            <div class="card-detail__badges">
                <span class="badge badge--outline">{when}</span>
                <span class=category_class>{card.category.as_str()}</span>
                <span class="badge">{score_label(card.severity_score)}</span>
                <span class="card-detail__id">{format!("#{}", card.id)}</span>
            </div>
            <Show when=move || has_hazards>
                <ul class="card-detail__hazards">
                    {hazards
                        .iter()
                        .map(|hazard| view! { <li class="badge badge--hazard">{hazard.label()}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
            <section class="card-detail__section">
                <h2>"Description"</h2>
                <p>{card.description}</p>
            </section>
            {sections
                .into_iter()
                .filter(|(_, html)| !html.is_empty())
                .map(|(title, html)| {
                    view! {
                        <section class="card-detail__section">
                            <h2>{title}</h2>
                            <div class="card-detail__markdown" inner_html=html></div>
                        </section>
                    }
                })
                .collect::<Vec<_>>()}
        </article>
    }
}
