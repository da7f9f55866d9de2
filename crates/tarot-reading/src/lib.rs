//! Interactive tarot readings.
//!
//! Provides the per-visit session state, numbered menus with re-prompting,
//! the reader's narration, and a controller that walks a user through
//! choosing a spread, shuffling, and drawing one card per position.

pub mod config;
pub mod console;
pub mod controller;
pub mod error;
pub mod menu;
pub mod narration;
pub mod record;
pub mod session;

pub use config::ReadingConfig;
pub use console::{Console, LineConsole, Tone};
pub use controller::Controller;
pub use error::{ReadingError, ReadingResult};
pub use menu::{MenuError, choose, confirm};
pub use record::{ReadingRecord, recap_markdown};
pub use session::Session;
