use super::*;

fn cards(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| Card {
            id: format!("c-{i}"),
            overview: format!("Overview {i}"),
            date: "2024-03-05".to_owned(),
            ..Card::default()
        })
        .collect()
}

#[test]
fn empty_list_has_no_entries() {
    assert!(visible_entries(&[], &PageState::default()).is_empty());
}

#[test]
fn entries_follow_input_order_for_current_page() {
    let mut page = PageState::default();
    page.set_page(2);
    let entries = visible_entries(&cards(12), &page);
    let ids: Vec<&str> = entries.iter().map(|(_, c)| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c-5", "c-6", "c-7", "c-8", "c-9"]);
}

#[test]
fn entries_link_to_detail_view_with_card_id() {
    let entries = visible_entries(&cards(1), &PageState::default());
    let (href, card) = &entries[0];
    assert!(href.starts_with("/card?id=c-0&overview=Overview%200"));
    assert_eq!(card.id, "c-0");
}

#[test]
fn entries_for_out_of_range_page_show_last_page() {
    let mut page = PageState::default();
    page.set_page(9);
    assert_eq!(visible_entries(&cards(6), &page).len(), 1);
}

#[test]
fn fade_in_staggers_by_index() {
    assert_eq!(fade_in_style(0), "animation-delay: 0ms");
    assert_eq!(fade_in_style(3), "animation-delay: 300ms");
}
