//! Core types for the tarot table: cards, the catalogue, the deck, and spreads.
//!
//! This crate holds the reading model only. It does no I/O; a session layer
//! drives it and decides how drawn cards are presented.

/// Card definitions, ranks, suits, and orientation.
pub mod card;
/// The read-only catalogue decks are built from.
pub mod catalogue;
/// The shuffled, drawable deck.
pub mod deck;
/// Error types used throughout the crate.
pub mod error;
/// Spreads and the standard spread catalogue.
pub mod spread;
/// The standard 78-card catalogue.
pub mod standard;

/// Re-export card types.
pub use card::{Card, CardDef, Orientation, Rank, Suit};
/// Re-export the catalogue.
pub use catalogue::Catalogue;
/// Re-export deck types.
pub use deck::{Deck, DeckState};
/// Re-export error types.
pub use error::{TarotError, TarotResult};
/// Re-export spread types.
pub use spread::{Spread, standard_spreads};
