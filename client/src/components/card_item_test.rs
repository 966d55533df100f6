use super::*;

fn high_card() -> Card {
    Card {
        id: "c-1".to_owned(),
        severity_score: 9,
        category: Category::High,
        overview: "Ladder slip".to_owned(),
        description: "Ladder footing slid on wet tile.".to_owned(),
        solution: "Use a ladder with rubber feet.".to_owned(),
        date: "2024-03-05".to_owned(),
        ..Card::default()
    }
}

#[test]
fn badges_show_category_and_score_text() {
    let card = high_card();
    assert_eq!(card.category.as_str(), "HIGH");
    assert_eq!(score_label(card.severity_score), "Score: 9");
}

#[test]
fn default_variant_shows_description_with_tiered_badges() {
    let variant = CardVariant::default();
    assert_eq!(variant.body, CardBody::Description);
    assert_eq!(variant.badges, BadgeStyle::Tiered);
    assert_eq!(variant.body.text(&high_card()), "Ladder footing slid on wet tile.");
}

#[test]
fn solution_variant_shows_solution_text() {
    assert_eq!(CardBody::Solution.text(&high_card()), "Use a ladder with rubber feet.");
}

#[test]
fn tiered_badges_differ_per_category() {
    assert_eq!(category_badge_class(Category::Low, BadgeStyle::Tiered), "badge badge--low");
    assert_eq!(category_badge_class(Category::Medium, BadgeStyle::Tiered), "badge badge--medium");
    assert_eq!(category_badge_class(Category::High, BadgeStyle::Tiered), "badge badge--high");
}

#[test]
fn fixed_badges_ignore_category() {
    for category in Category::ALL {
        assert_eq!(category_badge_class(category, BadgeStyle::Fixed), "badge");
    }
}

#[test]
fn negative_scores_render_verbatim() {
    assert_eq!(score_label(-1), "Score: -1");
}
