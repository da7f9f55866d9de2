//! Configuration for a reading session.

use std::time::Duration;

/// Narrowest line the reader will centre text in.
pub const MIN_LINE_WIDTH: usize = 20;
/// Widest line the reader will centre text in.
pub const MAX_LINE_WIDTH: usize = 500;

/// Configuration for a reading session.
#[derive(Debug, Clone)]
pub struct ReadingConfig {
    /// RNG seed for reproducible shuffles. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Length of one pause unit between dialogue beats.
    pub pace: Duration,
    /// Width used to centre banners and card reports.
    pub line_width: usize,
    /// Name the reader introduces themselves with.
    pub reader_name: String,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pace: Duration::from_secs(1),
            line_width: 80,
            reader_name: "Lisa".to_string(),
        }
    }
}

impl ReadingConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the pause unit.
    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }

    /// Set the line width, clamped to `MIN_LINE_WIDTH..=MAX_LINE_WIDTH`.
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH);
        self
    }

    /// Set the reader's name.
    pub fn with_reader_name(mut self, name: impl Into<String>) -> Self {
        self.reader_name = name.into();
        self
    }
}
