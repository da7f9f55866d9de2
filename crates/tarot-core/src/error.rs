/// Alias for `Result<T, TarotError>`.
pub type TarotResult<T> = Result<T, TarotError>;

/// Errors that can occur when building or dealing from a deck.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TarotError {
    /// A draw was requested with no cards left in the deck.
    #[error("deck exhausted: no cards left to draw")]
    DeckExhausted,

    /// A spread received more cards than it has positions.
    #[error("spread \"{title}\" is full: all {positions} positions already hold a card")]
    SpreadOverfull {
        /// Title of the spread.
        title: String,
        /// Number of positions in the spread.
        positions: usize,
    },

    /// A spread needs more cards than are available.
    #[error("spread \"{title}\" needs {required} cards but only {available} are available")]
    InsufficientCards {
        /// Title of the spread.
        title: String,
        /// Cards the spread requires.
        required: usize,
        /// Cards available to draw.
        available: usize,
    },

    /// Two card definitions share the same title.
    #[error("duplicate card in catalogue: \"{0}\"")]
    DuplicateCard(String),

    /// A catalogue was built without any cards.
    #[error("catalogue contains no cards")]
    EmptyCatalogue,

    /// No spread matches the requested title or menu label.
    #[error("unknown spread: \"{0}\"")]
    UnknownSpread(String),
}
