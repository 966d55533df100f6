//! Detail-view links that carry a card through the query string.
//!
//! Every value is percent-encoded, so free text containing `&`, `#` or `?`
//! survives the trip to `/card`. The detail page can also be reached with an
//! id alone, in which case it looks the card up over the API.

#[cfg(test)]
#[path = "card_link_test.rs"]
mod card_link_test;

use crate::net::types::{Card, Category, Hazard};

/// Route path of the detail view.
pub const DETAIL_PATH: &str = "/card";

/// Query parameter names, in the order they are written.
pub mod param {
    pub const ID: &str = "id";
    pub const OVERVIEW: &str = "overview";
    pub const DESCRIPTION: &str = "description";
    pub const SOLUTION: &str = "solution";
    pub const SEVERITY_SCORE: &str = "severityScore";
    pub const DATETIME: &str = "datetime";
    pub const LESSON: &str = "lesson";
    pub const PREVENTION: &str = "prevention";
    pub const CATEGORY: &str = "category";
    /// Comma-separated hazard wire names.
    pub const HAZARDS: &str = "hazards";
}

/// Build `/card?id=..&overview=..` with every field percent-encoded.
pub fn card_href(card: &Card) -> String {
    let score = card.severity_score.to_string();
    let datetime = card.datetime();
    let hazards = card.hazards.iter().map(|hazard| hazard.as_str()).collect::<Vec<_>>().join(",");
    let pairs: [(&str, &str); 10] = [
        (param::ID, card.id.as_str()),
        (param::OVERVIEW, card.overview.as_str()),
        (param::DESCRIPTION, card.description.as_str()),
        (param::SOLUTION, card.solution.as_str()),
        (param::SEVERITY_SCORE, score.as_str()),
        (param::DATETIME, datetime.as_str()),
        (param::LESSON, card.lesson.as_str()),
        (param::PREVENTION, card.prevention.as_str()),
        (param::CATEGORY, card.category.as_str()),
        (param::HAZARDS, hazards.as_str()),
    ];
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{DETAIL_PATH}?{query}")
}

/// Build the id-only link variant.
pub fn card_id_href(card_id: &str) -> String {
    format!("{DETAIL_PATH}?{}={}", param::ID, urlencoding::encode(card_id))
}

/// Where the detail page gets its card from.
#[derive(Clone, Debug, PartialEq)]
pub enum DetailSource {
    /// All fields were present in the query.
    Inline(Card),
    /// Only the id was given; fetch the rest.
    Lookup(String),
    /// No usable id.
    Missing,
}

/// An id lookup answer, tagged with the id it answers.
pub type LookupResult = (String, Option<Card>);

/// What the detail page shows.
#[derive(Clone, Debug, PartialEq)]
pub enum DetailView {
    Card(Card),
    Status(&'static str),
}

pub const NO_CARD_SELECTED: &str = "No card selected.";
pub const CARD_NOT_FOUND: &str = "Card not found.";
pub const LOADING_CARD: &str = "Loading card...";

/// Resolve the page content. A lookup answer for a different id is ignored.
pub fn detail_view(source: &DetailSource, lookup: Option<&LookupResult>) -> DetailView {
    match source {
        DetailSource::Inline(card) => DetailView::Card(card.clone()),
        DetailSource::Missing => DetailView::Status(NO_CARD_SELECTED),
        DetailSource::Lookup(id) => match lookup.filter(|(answered, _)| answered == id) {
            Some((_, Some(card))) => DetailView::Card(card.clone()),
            Some((_, None)) => DetailView::Status(CARD_NOT_FOUND),
            None => DetailView::Status(LOADING_CARD),
        },
    }
}

/// Rebuild a card from already-decoded query values.
///
/// `lookup` returns the decoded value for a parameter name. A link counts as
/// inline when it carries an overview; otherwise only the id is used.
pub fn detail_source(lookup: impl Fn(&str) -> Option<String>) -> DetailSource {
    let Some(id) = lookup(param::ID).map(|id| id.trim().to_owned()).filter(|id| !id.is_empty()) else {
        return DetailSource::Missing;
    };
    let Some(overview) = lookup(param::OVERVIEW) else {
        return DetailSource::Lookup(id);
    };

    let (date, time) = split_datetime(&lookup(param::DATETIME).unwrap_or_default());
    let field = |name: &str| lookup(name).unwrap_or_default();
    DetailSource::Inline(Card {
        id,
        severity_score: lookup(param::SEVERITY_SCORE)
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or_default(),
        category: lookup(param::CATEGORY)
            .and_then(|raw| Category::parse(&raw))
            .unwrap_or_default(),
        overview,
        description: field(param::DESCRIPTION),
        solution: field(param::SOLUTION),
        lesson: field(param::LESSON),
        prevention: field(param::PREVENTION),
        date,
        time,
        hazards: lookup(param::HAZARDS).map(|raw| parse_hazards(&raw)).unwrap_or_default(),
    })
}

/// Unknown names are skipped.
fn parse_hazards(raw: &str) -> Vec<Hazard> {
    raw.split(',').filter_map(Hazard::parse).collect()
}

/// Split `"<date> <time>"` at the first space.
fn split_datetime(raw: &str) -> (String, Option<String>) {
    let trimmed = raw.trim();
    match trimmed.split_once(' ') {
        Some((date, time)) if !time.trim().is_empty() => (date.to_owned(), Some(time.trim().to_owned())),
        Some((date, _)) => (date.to_owned(), None),
        None => (trimmed.to_owned(), None),
    }
}
