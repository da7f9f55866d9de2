//! The working deck: shuffle, orient, and draw.
//!
//! A deck starts `Fresh` with every catalogue card upright in catalogue
//! order. Shuffling permutes the remaining cards uniformly and flips an
//! independent coin for each card's orientation. Drawing takes from the
//! front and hands ownership of the card to the caller; cards never come
//! back until the next [`Deck::reset`].

use std::collections::VecDeque;
use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::card::{Card, Orientation};
use crate::catalogue::Catalogue;
use crate::error::{TarotError, TarotResult};

/// Lifecycle stage of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckState {
    /// Freshly built in catalogue order, all cards upright.
    Fresh,
    /// Shuffled at least once, nothing drawn yet.
    Shuffled,
    /// At least one card has been drawn.
    Drawing,
    /// The last card has been drawn.
    Exhausted,
}

impl fmt::Display for DeckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fresh => write!(f, "fresh"),
            Self::Shuffled => write!(f, "shuffled"),
            Self::Drawing => write!(f, "drawing"),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// An ordered, shrinking collection of cards.
#[derive(Debug, Clone, Serialize)]
pub struct Deck {
    cards: VecDeque<Card>,
    state: DeckState,
    shuffles: u32,
}

impl Deck {
    /// Build a fresh deck from every card in the catalogue.
    pub fn new(catalogue: &Catalogue) -> Self {
        Self {
            cards: catalogue.cards().iter().cloned().map(Card::new).collect(),
            state: DeckState::Fresh,
            shuffles: 0,
        }
    }

    /// Repopulate from the catalogue in catalogue order, all upright.
    pub fn reset(&mut self, catalogue: &Catalogue) {
        *self = Self::new(catalogue);
        tracing::debug!(cards = self.cards.len(), "deck reset");
    }

    /// Permute the remaining cards uniformly, then give each an independent
    /// random orientation.
    pub fn shuffle(&mut self, rng: &mut StdRng) {
        self.cards.make_contiguous().shuffle(rng);
        for card in &mut self.cards {
            card.set_orientation(Orientation::random(rng));
        }
        self.shuffles += 1;
        if self.state == DeckState::Fresh {
            self.state = DeckState::Shuffled;
        }
        tracing::debug!(
            shuffles = self.shuffles,
            remaining = self.cards.len(),
            "deck shuffled"
        );
    }

    /// Remove and return the card at the front of the deck.
    pub fn draw(&mut self) -> TarotResult<Card> {
        let card = self.cards.pop_front().ok_or(TarotError::DeckExhausted)?;
        self.state = if self.cards.is_empty() {
            DeckState::Exhausted
        } else {
            DeckState::Drawing
        };
        tracing::trace!(card = card.title(), remaining = self.cards.len(), "card drawn");
        Ok(card)
    }

    /// Number of cards remaining.
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if no cards remain.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Current lifecycle stage.
    pub fn state(&self) -> DeckState {
        self.state
    }

    /// How many times the deck has been shuffled since the last reset.
    pub fn shuffles(&self) -> u32 {
        self.shuffles
    }

    /// Iterate the remaining cards from the front.
    pub fn remaining(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns true if a card with this title is still in the deck.
    pub fn contains(&self, title: &str) -> bool {
        self.cards.iter().any(|c| c.title() == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::SeedableRng;

    use crate::card::{CardDef, Rank, Suit};

    fn small_catalogue() -> Catalogue {
        Catalogue::new(["A", "B", "C"].map(|t| {
            CardDef::new(t, Rank::Major(0), Suit::Trump, "up", "down")
        }))
        .unwrap()
    }

    fn titles(deck: &Deck) -> Vec<String> {
        deck.remaining().map(|c| c.title().to_string()).collect()
    }

    #[test]
    fn fresh_deck_is_full_and_upright() {
        let deck = Deck::new(&Catalogue::standard());
        assert_eq!(deck.size(), 78);
        assert_eq!(deck.state(), DeckState::Fresh);
        assert!(deck.remaining().all(|c| c.orientation() == Orientation::Upright));
        let unique: HashSet<String> = titles(&deck).into_iter().collect();
        assert_eq!(unique.len(), 78);
    }

    #[test]
    fn fresh_deck_in_catalogue_order() {
        let deck = Deck::new(&small_catalogue());
        assert_eq!(titles(&deck), vec!["A", "B", "C"]);
    }

    #[test]
    fn shuffle_changes_order() {
        let cat = Catalogue::standard();
        let mut deck = Deck::new(&cat);
        let before = titles(&deck);
        let mut rng = StdRng::seed_from_u64(42);
        deck.shuffle(&mut rng);
        assert_ne!(titles(&deck), before);
        assert_eq!(deck.state(), DeckState::Shuffled);
        assert_eq!(deck.shuffles(), 1);
    }

    #[test]
    fn shuffle_orients_both_ways() {
        let mut deck = Deck::new(&Catalogue::standard());
        let mut rng = StdRng::seed_from_u64(42);
        deck.shuffle(&mut rng);
        assert!(deck.remaining().any(|c| c.is_reversed()));
        assert!(deck.remaining().any(|c| !c.is_reversed()));
    }

    #[test]
    fn shuffle_deterministic_with_seed() {
        let cat = Catalogue::standard();
        let mut d1 = Deck::new(&cat);
        let mut d2 = Deck::new(&cat);
        d1.shuffle(&mut StdRng::seed_from_u64(99));
        d2.shuffle(&mut StdRng::seed_from_u64(99));
        let o1: Vec<_> = d1.remaining().map(|c| (c.title(), c.orientation())).collect();
        let o2: Vec<_> = d2.remaining().map(|c| (c.title(), c.orientation())).collect();
        assert_eq!(o1, o2);
    }

    #[test]
    fn repeated_shuffles_allowed() {
        let mut deck = Deck::new(&Catalogue::standard());
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..5 {
            deck.shuffle(&mut rng);
        }
        assert_eq!(deck.shuffles(), 5);
        assert_eq!(deck.size(), 78);
    }

    #[test]
    fn draw_removes_front_card() {
        let mut deck = Deck::new(&small_catalogue());
        let card = deck.draw().unwrap();
        assert_eq!(card.title(), "A");
        assert_eq!(deck.size(), 2);
        assert!(!deck.contains("A"));
        assert_eq!(deck.state(), DeckState::Drawing);
    }

    #[test]
    fn draw_empty_deck_fails() {
        let mut deck = Deck::new(&small_catalogue());
        for _ in 0..3 {
            deck.draw().unwrap();
        }
        assert!(deck.is_empty());
        assert_eq!(deck.state(), DeckState::Exhausted);
        assert_eq!(deck.draw().unwrap_err(), TarotError::DeckExhausted);
        assert_eq!(deck.size(), 0);
        assert_eq!(deck.state(), DeckState::Exhausted);
    }

    #[test]
    fn exhausted_state_until_reset() {
        let cat = small_catalogue();
        let mut deck = Deck::new(&cat);
        deck.draw().unwrap();
        deck.draw().unwrap();
        assert_eq!(deck.state(), DeckState::Drawing);
        deck.draw().unwrap();
        assert_eq!(deck.state(), DeckState::Exhausted);
        assert_eq!(deck.state().to_string(), "exhausted");
        deck.reset(&cat);
        assert_eq!(deck.state(), DeckState::Fresh);
    }

    #[test]
    fn reset_restores_full_upright_deck() {
        let cat = Catalogue::standard();
        let mut deck = Deck::new(&cat);
        let mut rng = StdRng::seed_from_u64(5);
        deck.shuffle(&mut rng);
        deck.draw().unwrap();
        deck.reset(&cat);
        assert_eq!(deck.size(), 78);
        assert_eq!(deck.state(), DeckState::Fresh);
        assert_eq!(deck.shuffles(), 0);
        assert!(deck.remaining().all(|c| !c.is_reversed()));
        assert_eq!(deck.remaining().next().unwrap().title(), "The Fool");
    }

    proptest! {
        #[test]
        fn shuffle_is_permutation(seed in any::<u64>(), rounds in 1usize..4) {
            let cat = Catalogue::standard();
            let mut deck = Deck::new(&cat);
            let mut before = titles(&deck);
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..rounds {
                deck.shuffle(&mut rng);
            }
            let mut after = titles(&deck);
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn draw_shrinks_by_one(seed in any::<u64>(), draws in 1usize..78) {
            let mut deck = Deck::new(&Catalogue::standard());
            let mut rng = StdRng::seed_from_u64(seed);
            deck.shuffle(&mut rng);
            for i in 0..draws {
                let card = deck.draw().unwrap();
                prop_assert_eq!(deck.size(), 78 - i - 1);
                prop_assert!(!deck.contains(card.title()));
            }
        }
    }
}
