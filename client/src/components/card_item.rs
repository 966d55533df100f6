//! Presentational card for one safety record.
//!
//! DESIGN
//! ======
//! One component covers both list styles: which narrative field fills the
//! body and how the category badge is styled are explicit `CardVariant`
//! choices rather than separate copies of the component.

#[cfg(test)]
#[path = "card_item_test.rs"]
mod card_item_test;

use leptos::prelude::*;

use crate::net::types::{Card, Category};
use crate::util::date::format_badge_date;

/// Which narrative field fills the card body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardBody {
    #[default]
    Description,
    Solution,
}

impl CardBody {
    pub fn text(self, card: &Card) -> &str {
        match self {
            Self::Description => &card.description,
            Self::Solution => &card.solution,
        }
    }
}

/// How the category badge is styled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeStyle {
    /// One style per severity level.
    #[default]
    Tiered,
    /// Same style for every level.
    Fixed,
}

/// Rendering mode for `CardItem`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardVariant {
    pub body: CardBody,
    pub badges: BadgeStyle,
}

/// Text of the severity badge.
pub fn score_label(score: i64) -> String {
    format!("Score: {score}")
}

/// CSS classes for the category badge.
pub fn category_badge_class(category: Category, style: BadgeStyle) -> &'static str {
    match (style, category) {
        (BadgeStyle::Fixed, _) => "badge",
        (BadgeStyle::Tiered, Category::Low) => "badge badge--low",
        (BadgeStyle::Tiered, Category::Medium) => "badge badge--medium",
        (BadgeStyle::Tiered, Category::High) => "badge badge--high",
    }
}

/// A single safety card: overview title, narrative body, date/category/score badges.
#[component]
pub fn CardItem(card: Card, #[prop(optional)] variant: CardVariant) -> impl IntoView {
    let date = format_badge_date(&card.date);
    let body = variant.body.text(&card).to_owned();
    let category_class = category_badge_class(card.category, variant.badges);
    let score = score_label(card.severity_score);

    view! {
        <article class="safety-card">
            <header class="safety-card__header">
                <h3 class="safety-card__title">{card.overview}</h3>
            </header>
            <p class="safety-card__body">{body}</p>
            <footer class="safety-card__footer">
                <span class="badge badge--outline safety-card__date">{date}</span>
                <span class="safety-card__badges">
                    <span class=category_class>{card.category.as_str()}</span>
                    <span class="badge safety-card__score">{score}</span>
                </span>
            </footer>
        </article>
    }
}
