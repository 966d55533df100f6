use super::*;
use crate::net::types::Category;

fn cards(prefix: &str, n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| Card {
            id: format!("{prefix}-{i}"),
            severity_score: i64::try_from(i).unwrap(),
            category: Category::Medium,
            ..Card::default()
        })
        .collect()
}

fn ids(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.id.clone()).collect()
}

#[test]
fn default_state_is_empty_on_page_one() {
    let state = CardsState::default();
    assert!(state.visible().is_empty());
    assert_eq!(state.total_pages(), 0);
    assert_eq!(state.page.current_page, 1);
}

#[test]
fn with_source_seeds_filtered_set() {
    let state = CardsState::with_source(&CardsState::default(), cards("a", 12));
    assert_eq!(state.filtered, state.source);
    assert_eq!(state.total_pages(), 3);
    assert_eq!(ids(state.visible()), vec!["a-0", "a-1", "a-2", "a-3", "a-4"]);
}

#[test]
fn with_source_replaces_filtered_set_instead_of_merging() {
    let mut state = CardsState::with_source(&CardsState::default(), cards("a", 12));
    state.set_filtered(cards("a", 12)[..2].to_vec());
    let next = CardsState::with_source(&state, cards("b", 3));
    assert_eq!(ids(&next.filtered), vec!["b-0", "b-1", "b-2"]);
}

#[test]
fn with_source_keeps_requested_page_but_clamps_what_is_shown() {
    let mut state = CardsState::with_source(&CardsState::default(), cards("a", 12));
    state.set_page(3);
    assert_eq!(ids(state.visible()), vec!["a-10", "a-11"]);

    let next = CardsState::with_source(&state, cards("b", 7));
    // The requested page is not reset when the data set changes.
    assert_eq!(next.page.current_page, 3);
    // The shown page is clamped to the last page of the new set.
    assert_eq!(next.effective_page(), 2);
    assert_eq!(ids(next.visible()), vec!["b-5", "b-6"]);
}

#[test]
fn with_source_clears_loading_and_error() {
    let prev = CardsState { loading: true, error: Some("boom".to_owned()), ..CardsState::default() };
    let next = CardsState::with_source(&prev, cards("a", 1));
    assert!(!next.loading);
    assert!(next.error.is_none());
}

#[test]
fn with_error_keeps_previous_cards() {
    let prev = CardsState::with_source(&CardsState::default(), cards("a", 2));
    let next = CardsState::with_error(&prev, "cards request failed: 500".to_owned());
    assert_eq!(next.error.as_deref(), Some("cards request failed: 500"));
    assert_eq!(next.source, prev.source);
}

#[test]
fn set_filtered_preserves_given_order() {
    let mut state = CardsState::with_source(&CardsState::default(), cards("a", 4));
    let mut reversed = state.source.clone();
    reversed.reverse();
    state.set_filtered(reversed);
    assert_eq!(ids(state.visible()), vec!["a-3", "a-2", "a-1", "a-0"]);
    assert_eq!(state.source[0].id, "a-0");
}

#[test]
fn setting_same_page_twice_is_idempotent() {
    let mut state = CardsState::with_source(&CardsState::default(), cards("a", 12));
    state.set_page(2);
    let once = state.clone();
    state.set_page(2);
    assert_eq!(state, once);
}
