//! Error types for reading sessions.

use thiserror::Error;

use tarot_core::TarotError;

/// Result type for reading operations.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors that end a reading session.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// Input ended while a response was still required.
    #[error("input closed before the session finished")]
    InputClosed,

    /// A menu was requested with nothing to choose from.
    #[error("menu has no options")]
    EmptyMenu,

    /// A card was requested before a spread was chosen.
    #[error("no spread has been chosen for this reading")]
    NoActiveSpread,

    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The deck or spread rejected an operation.
    #[error("{0}")]
    Tarot(#[from] TarotError),
}
