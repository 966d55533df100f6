use super::*;

#[test]
fn page_numbers_cover_every_page() {
    assert_eq!(page_numbers(12, 5), vec![1, 2, 3]);
    assert_eq!(page_numbers(5, 5), vec![1]);
}

#[test]
fn page_numbers_empty_for_no_items() {
    assert!(page_numbers(0, 5).is_empty());
}

#[test]
fn page_summary_reports_position() {
    assert_eq!(page_summary(2, 12, 5), "Page 2 of 3");
    assert_eq!(page_summary(1, 0, 5), "No pages");
}
