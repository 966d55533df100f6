//! Card store: the read-only safety-card set served by the API.
//!
//! DESIGN
//! ======
//! Cards are loaded once at startup from a JSON or YAML file (chosen by
//! extension) and never mutated afterwards, so the store is shared behind a
//! plain `Arc` with no locking. Source order is preserved; an id index backs
//! single-card lookups.
//!
//! ERROR HANDLING
//! ==============
//! Loading fails fast on unreadable files, malformed data or duplicate ids.
//! Lookups report `NotFound`, which the route layer maps to `404`.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use client::net::types::Card;

#[derive(Debug, thiserror::Error)]
pub enum CardStoreError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON card data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML card data: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported card file extension: {0:?}")]
    UnsupportedFormat(String),
    #[error("duplicate card id: {0}")]
    DuplicateId(String),
    #[error("card not found: {0}")]
    NotFound(String),
}

/// On-disk encoding of a card file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFormat {
    Json,
    Yaml,
}

impl CardFormat {
    /// Pick the format from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Result<Self, CardStoreError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(CardStoreError::UnsupportedFormat(ext)),
        }
    }
}

/// Immutable card set with an id index.
#[derive(Debug, Default)]
pub struct CardStore {
    cards: Vec<Card>,
    index: HashMap<String, usize>,
}

impl CardStore {
    /// Build a store, rejecting duplicate ids.
    pub fn new(cards: Vec<Card>) -> Result<Self, CardStoreError> {
        let mut index = HashMap::with_capacity(cards.len());
        for (pos, card) in cards.iter().enumerate() {
            if index.insert(card.id.clone(), pos).is_some() {
                return Err(CardStoreError::DuplicateId(card.id.clone()));
            }
        }
        Ok(Self { cards, index })
    }

    /// Parse a card list in the given format.
    pub fn parse(raw: &str, format: CardFormat) -> Result<Self, CardStoreError> {
        let cards: Vec<Card> = match format {
            CardFormat::Json => serde_json::from_str(raw)?,
            CardFormat::Yaml => serde_yaml::from_str(raw)?,
        };
        Self::new(cards)
    }

    /// Read and parse a card file.
    pub fn load(path: &Path) -> Result<Self, CardStoreError> {
        let format = CardFormat::from_path(path)?;
        let raw = std::fs::read_to_string(path).map_err(|source| CardStoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, format)
    }

    /// Every card, in source order.
    pub fn all(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, id: &str) -> Result<&Card, CardStoreError> {
        self.index
            .get(id)
            .map(|&pos| &self.cards[pos])
            .ok_or_else(|| CardStoreError::NotFound(id.to_owned()))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
