//! Records of completed readings, kept for the session recap.

use chrono::{DateTime, Utc};
use serde::Serialize;

use tarot_core::{Orientation, Spread};

/// One card as it fell in a reading.
#[derive(Debug, Clone, Serialize)]
pub struct PlacementRecord {
    /// What the position stands for.
    pub position: String,
    /// Title of the card drawn.
    pub card: String,
    /// Orientation of the card drawn.
    pub orientation: Orientation,
    /// The meaning that applied.
    pub meaning: String,
}

/// A finished reading.
#[derive(Debug, Clone, Serialize)]
pub struct ReadingRecord {
    /// Title of the spread used.
    pub spread: String,
    /// Every position in order with its card.
    pub placements: Vec<PlacementRecord>,
    /// When the reading was completed.
    pub completed_at: DateTime<Utc>,
}

impl ReadingRecord {
    /// Snapshot the cards currently placed in a spread.
    pub fn from_spread(spread: &Spread) -> Self {
        let placements = spread
            .placements()
            .map(|(position, card)| PlacementRecord {
                position: position.to_string(),
                card: card.title().to_string(),
                orientation: card.orientation(),
                meaning: card.meaning().to_string(),
            })
            .collect();
        Self {
            spread: spread.title().to_string(),
            placements,
            completed_at: Utc::now(),
        }
    }

    /// Render as a markdown section.
    pub fn to_markdown(&self) -> String {
        let mut out = format!(
            "## {} ({})\n\n",
            self.spread,
            self.completed_at.format("%Y-%m-%d %H:%M UTC")
        );
        for (i, p) in self.placements.iter().enumerate() {
            let reversed = if p.orientation.is_reversed() {
                ", reversed"
            } else {
                ""
            };
            let position = if p.position.trim().is_empty() {
                "the situation"
            } else {
                p.position.trim()
            };
            out.push_str(&format!(
                "{}. **{}{reversed}** ({position}): {}\n",
                i + 1,
                p.card,
                p.meaning
            ));
        }
        out
    }
}

/// Render a whole session's readings as a markdown document.
pub fn recap_markdown(username: &str, readings: &[ReadingRecord]) -> String {
    let mut out = format!("# Readings for {username}\n\n");
    if readings.is_empty() {
        out.push_str("No readings were completed.\n");
        return out;
    }
    for record in readings {
        out.push_str(&record.to_markdown());
        out.push('\n');
    }
    out
}
