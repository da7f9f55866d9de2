use serde::Serialize;

use crate::card::Card;
use crate::error::{TarotError, TarotResult};

/// A named layout of reading positions and the cards placed into them.
///
/// `cards[i]` always belongs to `positions[i]`; a spread never holds more
/// cards than it has positions.
#[derive(Debug, Clone, Serialize)]
pub struct Spread {
    title: String,
    positions: Vec<String>,
    cards: Vec<Card>,
}

impl Spread {
    /// Create an empty spread.
    pub fn new<I, S>(title: impl Into<String>, positions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            positions: positions.into_iter().map(Into::into).collect(),
            cards: Vec::new(),
        }
    }

    /// Spread title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Position descriptions in order.
    pub fn positions(&self) -> &[String] {
        &self.positions
    }

    /// Cards placed so far, in position order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards this spread needs.
    pub fn required_count(&self) -> usize {
        self.positions.len()
    }

    /// The description of position `index`.
    pub fn position_label(&self, index: usize) -> Option<&str> {
        self.positions.get(index).map(String::as_str)
    }

    /// Menu text, e.g. "Celtic Cross (10 cards)".
    pub fn menu_label(&self) -> String {
        let n = self.required_count();
        format!("{} ({n} card{})", self.title, if n == 1 { "" } else { "s" })
    }

    /// Place the next card. Fails if every position is already filled.
    pub fn place_card(&mut self, card: Card) -> TarotResult<()> {
        if self.is_complete() {
            return Err(TarotError::SpreadOverfull {
                title: self.title.clone(),
                positions: self.positions.len(),
            });
        }
        self.cards.push(card);
        Ok(())
    }

    /// Returns true once every position holds a card.
    pub fn is_complete(&self) -> bool {
        self.cards.len() >= self.positions.len()
    }

    /// Index of the next position to fill, if any.
    pub fn next_position(&self) -> Option<usize> {
        (!self.is_complete()).then_some(self.cards.len())
    }

    /// Pairs of (position description, card) for every filled position.
    pub fn placements(&self) -> impl Iterator<Item = (&str, &Card)> {
        self.positions
            .iter()
            .map(String::as_str)
            .zip(self.cards.iter())
    }

    /// A copy of this spread's layout with no cards placed.
    pub fn cleared(&self) -> Self {
        Self {
            title: self.title.clone(),
            positions: self.positions.clone(),
            cards: Vec::new(),
        }
    }
}

/// The four standard spreads, in menu order.
pub fn standard_spreads() -> Vec<Spread> {
    vec![
        Spread::new(
            "Past, Present, Future",
            ["the past of", "the present state of", "the future of"],
        ),
        Spread::new(
            "Relationship Spread",
            [
                "your state in",
                "the other person's state in",
                "both of you together in",
            ],
        ),
        Spread::new(
            "The Blindspot",
            [
                "something everyone knows about",
                "something others know but you do not about",
                "something you know and others don't about",
                "something no one knows about",
            ],
        ),
        Spread::new(
            "Celtic Cross",
            [
                "",
                "the main cause of",
                "conscious driving forces within",
                "hidden forces, like emotions, you may not be aware of within",
                "the immediate past of",
                "the *immediate* future of",
                "your attitude towards",
                "external influences, like other people, on",
                "your expectations, or perhaps hopes and fears regarding",
                "the long term outcome of",
            ],
        ),
    ]
}
