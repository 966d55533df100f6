use super::*;
use crate::state::test_helpers::test_app_state;

#[test]
fn card_error_to_status_maps_not_found() {
    let err = CardStoreError::NotFound("x".to_owned());
    assert_eq!(card_error_to_status(err), StatusCode::NOT_FOUND);
}

#[test]
fn card_error_to_status_maps_load_errors_to_internal() {
    let err = CardStoreError::DuplicateId("x".to_owned());
    assert_eq!(card_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
    let err = CardStoreError::UnsupportedFormat("csv".to_owned());
    assert_eq!(card_error_to_status(err), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn list_cards_returns_store_order() {
    let state = test_app_state(&["c", "a", "b"]);
    let Json(cards) = list_cards(State(state)).await;
    let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[tokio::test]
async fn list_cards_on_empty_store_is_empty() {
    let Json(cards) = list_cards(State(test_app_state(&[]))).await;
    assert!(cards.is_empty());
}

#[tokio::test]
async fn get_card_returns_matching_card() {
    let state = test_app_state(&["a", "b"]);
    let Json(card) = get_card(State(state), Path("b".to_owned())).await.unwrap();
    assert_eq!(card.id, "b");
    assert_eq!(card.overview, "Overview b");
}

#[tokio::test]
async fn get_card_unknown_id_is_404() {
    let state = test_app_state(&["a"]);
    let status = get_card(State(state), Path("nope".to_owned())).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_cards_serializes_wire_field_names() {
    let Json(cards) = list_cards(State(test_app_state(&["a"]))).await;
    let value = serde_json::to_value(&cards).unwrap();
    assert_eq!(value[0]["severityScore"], serde_json::json!(50));
    assert_eq!(value[0]["category"], serde_json::json!("MEDIUM"));
}
