//! REST API helpers for loading safety cards from the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning empty results; the browser fills the
//! page in after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a failed fetch
//! degrades to an empty list rather than breaking hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Card;

#[cfg(any(test, feature = "hydrate"))]
const CARDS_ENDPOINT: &str = "/api/cards";

#[cfg(any(test, feature = "hydrate"))]
fn card_endpoint(card_id: &str) -> String {
    format!("{CARDS_ENDPOINT}/{}", urlencoding::encode(card_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn cards_request_failed_message(status: u16) -> String {
    format!("cards request failed: {status}")
}

/// Fetch every card from `GET /api/cards`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body is not a card array.
pub async fn fetch_cards() -> Result<Vec<Card>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CARDS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(cards_request_failed_message(resp.status()));
        }
        resp.json::<Vec<Card>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch a single card from `GET /api/cards/{id}`.
/// Returns `None` if the card is unknown or on the server.
pub async fn fetch_card(card_id: &str) -> Option<Card> {
    #[cfg(feature = "hydrate")]
    {
        let url = card_endpoint(card_id);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Card>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = card_id;
        None
    }
}
