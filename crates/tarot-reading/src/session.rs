//! Per-session reading state.
//!
//! A `Session` owns everything one user's visit needs: the catalogue, the
//! spread layouts on offer, the live deck, the spread being read, the RNG,
//! and the readings completed so far. Nothing here is global; two sessions
//! never share a deck.

use rand::SeedableRng;
use rand::rngs::StdRng;

use tarot_core::{Catalogue, Deck, Spread, TarotError, standard_spreads};

use crate::config::ReadingConfig;
use crate::error::{ReadingError, ReadingResult};
use crate::narration::capitalize;
use crate::record::ReadingRecord;

/// The state of one user's visit to the table.
pub struct Session {
    catalogue: Catalogue,
    layouts: Vec<Spread>,
    deck: Deck,
    spread: Option<Spread>,
    username: String,
    rng: StdRng,
    history: Vec<ReadingRecord>,
}

impl Session {
    /// Create a session offering the standard spreads.
    pub fn new(catalogue: Catalogue, config: &ReadingConfig) -> ReadingResult<Self> {
        Self::with_spreads(catalogue, standard_spreads(), config)
    }

    /// Create a session offering the given spreads.
    ///
    /// Fails if any spread needs more cards than the catalogue holds.
    pub fn with_spreads(
        catalogue: Catalogue,
        spreads: Vec<Spread>,
        config: &ReadingConfig,
    ) -> ReadingResult<Self> {
        if let Some(spread) = spreads
            .iter()
            .find(|s| s.required_count() > catalogue.len())
        {
            return Err(TarotError::InsufficientCards {
                title: spread.title().to_string(),
                required: spread.required_count(),
                available: catalogue.len(),
            }
            .into());
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let deck = Deck::new(&catalogue);

        Ok(Self {
            catalogue,
            layouts: spreads.iter().map(Spread::cleared).collect(),
            deck,
            spread: None,
            username: "Stranger".to_string(),
            rng,
            history: Vec::new(),
        })
    }

    /// The spreads on offer, in menu order.
    pub fn spreads(&self) -> &[Spread] {
        &self.layouts
    }

    /// The live deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The spread being read, once one is chosen.
    pub fn active_spread(&self) -> Option<&Spread> {
        self.spread.as_ref()
    }

    /// The user's display name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Store the user's name, trimmed and capitalised.
    pub fn set_username(&mut self, raw: &str) -> &str {
        self.username = capitalize(raw);
        &self.username
    }

    /// Readings completed this session, oldest first.
    pub fn history(&self) -> &[ReadingRecord] {
        &self.history
    }

    /// Start over with a full, upright, unshuffled deck and no chosen spread.
    pub fn reset(&mut self) {
        self.deck.reset(&self.catalogue);
        self.spread = None;
    }

    /// Menu labels for every spread, e.g. "Celtic Cross (10 cards)".
    pub fn spread_options(&self) -> Vec<String> {
        self.layouts.iter().map(Spread::menu_label).collect()
    }

    /// Choose the spread whose menu label (or title) matches `label`.
    pub fn select_spread(&mut self, label: &str) -> ReadingResult<&Spread> {
        let layout = self
            .layouts
            .iter()
            .find(|s| s.menu_label() == label || s.title() == label)
            .ok_or_else(|| TarotError::UnknownSpread(label.to_string()))?;

        if layout.required_count() > self.deck.size() {
            return Err(TarotError::InsufficientCards {
                title: layout.title().to_string(),
                required: layout.required_count(),
                available: self.deck.size(),
            }
            .into());
        }

        tracing::debug!(spread = layout.title(), "spread selected");
        let spread: &Spread = self.spread.insert(layout.cleared());
        Ok(spread)
    }

    /// Shuffle the deck once.
    pub fn shuffle(&mut self) {
        self.deck.shuffle(&mut self.rng);
    }

    /// Draw the next card into the next open position.
    ///
    /// Returns the index of the position that was filled.
    pub fn draw_next(&mut self) -> ReadingResult<usize> {
        let spread = self.spread.as_mut().ok_or(ReadingError::NoActiveSpread)?;
        let Some(index) = spread.next_position() else {
            return Err(TarotError::SpreadOverfull {
                title: spread.title().to_string(),
                positions: spread.required_count(),
            }
            .into());
        };

        let card = self.deck.draw()?;
        tracing::debug!(
            position = index,
            card = card.title(),
            orientation = %card.orientation(),
            "card placed"
        );
        spread.place_card(card)?;
        Ok(index)
    }

    /// Record the active spread as a completed reading.
    pub fn complete_reading(&mut self) -> ReadingResult<&ReadingRecord> {
        let spread = self.spread.as_ref().ok_or(ReadingError::NoActiveSpread)?;
        let record = ReadingRecord::from_spread(spread);
        tracing::debug!(spread = record.spread.as_str(), "reading complete");
        self.history.push(record);
        self.history.last().ok_or(ReadingError::NoActiveSpread)
    }
}
