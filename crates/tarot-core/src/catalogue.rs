use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::card::{CardDef, Suit};
use crate::error::{TarotError, TarotResult};
use crate::standard;

/// The fixed, read-only set of card definitions every deck is built from.
///
/// Titles are unique across the catalogue. Definitions are shared with the
/// live cards dealt from it, so a catalogue is cheap to clone.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Catalogue {
    cards: Vec<Arc<CardDef>>,
}

impl Catalogue {
    /// Build a catalogue from definitions, rejecting empty input and
    /// duplicate titles.
    pub fn new(defs: impl IntoIterator<Item = CardDef>) -> TarotResult<Self> {
        let mut seen = HashSet::new();
        let mut cards = Vec::new();
        for def in defs {
            if !seen.insert(def.title.to_lowercase()) {
                return Err(TarotError::DuplicateCard(def.title));
            }
            cards.push(Arc::new(def));
        }
        if cards.is_empty() {
            return Err(TarotError::EmptyCatalogue);
        }
        Ok(Self { cards })
    }

    /// The standard 78-card deck.
    pub fn standard() -> Self {
        Self {
            cards: standard::rider_waite().into_iter().map(Arc::new).collect(),
        }
    }

    /// All definitions in catalogue order.
    pub fn cards(&self) -> &[Arc<CardDef>] {
        &self.cards
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed catalogue; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Find a card by title (case-insensitive).
    pub fn find(&self, title: &str) -> Option<&CardDef> {
        let lower = title.trim().to_lowercase();
        self.cards
            .iter()
            .find(|c| c.title.to_lowercase() == lower)
            .map(|c| c.as_ref())
    }

    /// All cards of a suit, in catalogue order.
    pub fn by_suit(&self, suit: Suit) -> Vec<&CardDef> {
        self.cards
            .iter()
            .filter(|c| c.suit == suit)
            .map(|c| c.as_ref())
            .collect()
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::standard()
    }
}
