use super::*;

fn card(id: &str, category: Category, score: i64, hazards: Vec<Hazard>) -> Card {
    Card {
        id: id.to_owned(),
        severity_score: score,
        category,
        overview: format!("Overview {id}"),
        hazards,
        ..Card::default()
    }
}

#[test]
fn empty_set_has_zero_counts_and_no_average() {
    let stats = CardStats::compute(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(
        stats.by_category,
        vec![(Category::Low, 0), (Category::Medium, 0), (Category::High, 0)]
    );
    assert_eq!(stats.average_score, None);
    assert_eq!(stats.most_severe, None);
    assert!(stats.hazards.is_empty());
    assert_eq!(stats.max_category_count(), 0);
}

#[test]
fn counts_categories_and_averages_scores() {
    let cards = vec![
        card("a", Category::Low, 10, vec![]),
        card("b", Category::High, 80, vec![]),
        card("c", Category::High, 90, vec![]),
    ];
    let stats = CardStats::compute(&cards);
    assert_eq!(stats.total, 3);
    assert_eq!(
        stats.by_category,
        vec![(Category::Low, 1), (Category::Medium, 0), (Category::High, 2)]
    );
    assert_eq!(stats.average_score, Some(60.0));
    assert_eq!(stats.max_category_count(), 2);
}

#[test]
fn most_severe_prefers_first_on_ties() {
    let cards = vec![
        card("a", Category::High, 95, vec![]),
        card("b", Category::High, 95, vec![]),
        card("c", Category::Low, 3, vec![]),
    ];
    let stats = CardStats::compute(&cards);
    assert_eq!(stats.most_severe, Some(("a".to_owned(), "Overview a".to_owned())));
}

#[test]
fn hazards_sorted_by_frequency() {
    let cards = vec![
        card("a", Category::High, 70, vec![Hazard::HighVoltage, Hazard::ArcFlash]),
        card("b", Category::High, 80, vec![Hazard::HighVoltage]),
        card("c", Category::Medium, 50, vec![Hazard::SteamExposure]),
    ];
    let stats = CardStats::compute(&cards);
    assert_eq!(stats.hazards[0], (Hazard::HighVoltage, 2));
    assert_eq!(stats.hazards.len(), 3);
}

#[test]
fn bar_percent_scales_to_max() {
    assert_eq!(bar_percent(0, 0), 0);
    assert_eq!(bar_percent(2, 2), 100);
    assert_eq!(bar_percent(1, 2), 50);
    assert_eq!(bar_percent(1, 3), 34);
    assert_eq!(bar_percent(5, 2), 100);
}
