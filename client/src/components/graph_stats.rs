//! Statistics panel: category bars, average score, top hazards.

use leptos::prelude::*;

use crate::components::card_item::{BadgeStyle, category_badge_class};
use crate::net::types::Card;
use crate::state::stats::{CardStats, bar_percent};
use crate::util::card_link::card_id_href;

/// Hazard rows shown before the list is cut off.
const TOP_HAZARDS: usize = 5;

#[component]
pub fn GraphStats(#[prop(into)] cards: Signal<Vec<Card>>) -> impl IntoView {
    let stats = Memo::new(move |_| cards.with(|cards| CardStats::compute(cards)));

    view! {
        <section class="graph-stats">
            <div class="graph-stats__bars">
                {move || {
                    let stats = stats.get();
                    let max = stats.max_category_count();
                    stats
                        .by_category
                        .into_iter()
                        .map(|(category, count)| {
                            let width = format!("width: {}%", bar_percent(count, max));
                            view! {
                                <div class="graph-stats__row">
                                    <span class=category_badge_class(category, BadgeStyle::Tiered)>
                                        {category.as_str()}
                                    </span>
                                    <span class="graph-stats__bar" style=width></span>
                                    <span class="graph-stats__count">{count}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <dl class="graph-stats__summary">
                <dt>"Total reports"</dt>
                <dd>{move || stats.get().total}</dd>
                <dt>"Average score"</dt>
                <dd>
                    {move || stats.get().average_score.map_or_else(|| "n/a".to_owned(), |avg| format!("{avg:.1}"))}
                </dd>
                <dt>"Most severe"</dt>
                <dd>
                    {move || {
                        stats
                            .get()
                            .most_severe
                            .map(|(id, overview)| view! { <a href=card_id_href(&id)>{overview}</a> })
                    }}
                </dd>
            </dl>
            <Show when=move || !stats.get().hazards.is_empty()>
                <ul class="graph-stats__hazards">
                    {move || {
                        stats
                            .get()
                            .hazards
                            .into_iter()
                            .take(TOP_HAZARDS)
                            .map(|(hazard, count)| view! { <li>{format!("{} ({count})", hazard.label())}</li> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </section>
    }
}
