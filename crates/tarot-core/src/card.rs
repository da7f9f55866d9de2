use std::fmt;
use std::sync::Arc;

use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;

/// The suit a card belongs to. Trumps are the major arcana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    /// The 22 major arcana.
    Trump,
    /// Minor arcana: wands.
    Wands,
    /// Minor arcana: cups.
    Cups,
    /// Minor arcana: swords.
    Swords,
    /// Minor arcana: pentacles.
    Pentacles,
}

impl Suit {
    /// All suits in catalogue order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Trump,
            Self::Wands,
            Self::Cups,
            Self::Swords,
            Self::Pentacles,
        ]
    }

    /// Parse a suit name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trump" | "trumps" | "major" | "major arcana" => Some(Self::Trump),
            "wands" | "wand" => Some(Self::Wands),
            "cups" | "cup" => Some(Self::Cups),
            "swords" | "sword" => Some(Self::Swords),
            "pentacles" | "pentacle" | "coins" => Some(Self::Pentacles),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trump => write!(f, "trump"),
            Self::Wands => write!(f, "wands"),
            Self::Cups => write!(f, "cups"),
            Self::Swords => write!(f, "swords"),
            Self::Pentacles => write!(f, "pentacles"),
        }
    }
}

/// The rank label of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    /// A major arcana number (0-21).
    Major(u8),
    /// The ace of a minor suit.
    Ace,
    /// A pip card, two through ten.
    Number(u8),
    /// Page court card.
    Page,
    /// Knight court card.
    Knight,
    /// Queen court card.
    Queen,
    /// King court card.
    King,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major(n) => write!(f, "{n}"),
            Self::Ace => write!(f, "Ace"),
            Self::Number(n) => match number_word(*n) {
                Some(word) => write!(f, "{word}"),
                None => write!(f, "{n}"),
            },
            Self::Page => write!(f, "Page"),
            Self::Knight => write!(f, "Knight"),
            Self::Queen => write!(f, "Queen"),
            Self::King => write!(f, "King"),
        }
    }
}

fn number_word(n: u8) -> Option<&'static str> {
    const WORDS: [&str; 9] = [
        "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    ];
    WORDS.get(usize::from(n).checked_sub(2)?).copied()
}

/// Whether a card lies upright or reversed on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Read with its upright meaning.
    #[default]
    Upright,
    /// Read with its reversed meaning.
    Reversed,
}

impl Orientation {
    /// Flip a fair coin for an orientation.
    pub fn random(rng: &mut StdRng) -> Self {
        if rng.random_bool(0.5) {
            Self::Reversed
        } else {
            Self::Upright
        }
    }

    /// Returns true if reversed.
    pub fn is_reversed(self) -> bool {
        self == Self::Reversed
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upright => write!(f, "upright"),
            Self::Reversed => write!(f, "reversed"),
        }
    }
}

/// An immutable catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardDef {
    /// Unique card title, e.g. "The Fool".
    pub title: String,
    /// Rank label.
    pub rank: Rank,
    /// Suit.
    pub suit: Suit,
    /// Meaning when drawn upright.
    pub meaning_upright: String,
    /// Meaning when drawn reversed.
    pub meaning_reversed: String,
}

impl CardDef {
    /// Create a card definition.
    pub fn new(
        title: impl Into<String>,
        rank: Rank,
        suit: Suit,
        meaning_upright: impl Into<String>,
        meaning_reversed: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            rank,
            suit,
            meaning_upright: meaning_upright.into(),
            meaning_reversed: meaning_reversed.into(),
        }
    }
}

/// A live card: a shared catalogue entry plus its orientation for this shuffle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    def: Arc<CardDef>,
    orientation: Orientation,
}

impl Card {
    /// Create an upright card from a catalogue entry.
    pub fn new(def: Arc<CardDef>) -> Self {
        Self {
            def,
            orientation: Orientation::Upright,
        }
    }

    /// Card title.
    pub fn title(&self) -> &str {
        &self.def.title
    }

    /// Current orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Set the orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Returns true if the card is reversed.
    pub fn is_reversed(&self) -> bool {
        self.orientation.is_reversed()
    }

    /// The meaning that applies to the current orientation.
    pub fn meaning(&self) -> &str {
        match self.orientation {
            Orientation::Upright => &self.def.meaning_upright,
            Orientation::Reversed => &self.def.meaning_reversed,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.orientation {
            Orientation::Upright => write!(f, "{}", self.def.title),
            Orientation::Reversed => write!(f, "{}, reversed", self.def.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn fool() -> Card {
        Card::new(Arc::new(CardDef::new(
            "The Fool",
            Rank::Major(0),
            Suit::Trump,
            "Beginnings",
            "Recklessness",
        )))
    }

    #[test]
    fn new_card_is_upright() {
        let card = fool();
        assert_eq!(card.orientation(), Orientation::Upright);
        assert_eq!(card.meaning(), "Beginnings");
    }

    #[test]
    fn reversed_meaning() {
        let mut card = fool();
        card.set_orientation(Orientation::Reversed);
        assert!(card.is_reversed());
        assert_eq!(card.meaning(), "Recklessness");
        assert_eq!(card.to_string(), "The Fool, reversed");
    }

    #[test]
    fn rank_display() {
        assert_eq!(Rank::Major(0).to_string(), "0");
        assert_eq!(Rank::Major(21).to_string(), "21");
        assert_eq!(Rank::Ace.to_string(), "Ace");
        assert_eq!(Rank::Number(7).to_string(), "Seven");
        assert_eq!(Rank::Number(10).to_string(), "Ten");
        assert_eq!(Rank::Queen.to_string(), "Queen");
    }

    #[test]
    fn suit_parse() {
        assert_eq!(Suit::parse("Cups"), Some(Suit::Cups));
        assert_eq!(Suit::parse("major"), Some(Suit::Trump));
        assert_eq!(Suit::parse(" swords "), Some(Suit::Swords));
        assert_eq!(Suit::parse("hearts"), None);
    }

    #[test]
    fn random_orientation_produces_both() {
        let mut rng = StdRng::seed_from_u64(7);
        let flips: Vec<Orientation> = (0..64).map(|_| Orientation::random(&mut rng)).collect();
        assert!(flips.contains(&Orientation::Upright));
        assert!(flips.contains(&Orientation::Reversed));
    }

    #[test]
    fn serializes_orientation_and_title() {
        let json = serde_json::to_string(&fool()).unwrap();
        assert!(json.contains("\"title\":\"The Fool\""));
        assert!(json.contains("\"orientation\":\"upright\""));
    }
}
