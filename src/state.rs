//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the card store, which is immutable after startup.

use std::sync::Arc;

use crate::services::cards::CardStore;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub cards: Arc<CardStore>,
}

impl AppState {
    #[must_use]
    pub fn new(cards: CardStore) -> Self {
        Self { cards: Arc::new(cards) }
    }
}
