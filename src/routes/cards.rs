//! Safety-card REST routes.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::Card;

use crate::services::cards::CardStoreError;
use crate::state::AppState;

/// `GET /api/cards`: every card in source order.
pub async fn list_cards(State(state): State<AppState>) -> Json<Vec<Card>> {
    Json(state.cards.all().to_vec())
}

/// `GET /api/cards/{id}`: a single card.
pub async fn get_card(State(state): State<AppState>, Path(card_id): Path<String>) -> Result<Json<Card>, StatusCode> {
    match state.cards.get(&card_id) {
        Ok(card) => Ok(Json(card.clone())),
        Err(e) => {
            tracing::debug!(%card_id, error = %e, "card lookup failed");
            Err(card_error_to_status(e))
        }
    }
}

pub(crate) fn card_error_to_status(err: CardStoreError) -> StatusCode {
    match err {
        CardStoreError::NotFound(_) => StatusCode::NOT_FOUND,
        CardStoreError::Io { .. }
        | CardStoreError::Json(_)
        | CardStoreError::Yaml(_)
        | CardStoreError::UnsupportedFormat(_)
        | CardStoreError::DuplicateId(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
