//! A single card on the table.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Stable card identity for the lifetime of a deck.
///
/// Independent of the card's position in the deck: the flip-back timer
/// captures cards by id, never by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub usize);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card and its visibility state.
///
/// `matched` implies `revealed`: the mutators below keep that invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub value: Symbol,
    pub revealed: bool,
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn face_down(id: CardId, value: Symbol) -> Self {
        Self {
            id,
            value,
            revealed: false,
            matched: false,
        }
    }

    /// Face-down and not yet matched.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        !self.revealed
    }

    /// Face-up but not part of a confirmed pair.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.revealed && !self.matched
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Turn the card face-down. Matched cards stay revealed.
    pub fn hide(&mut self) {
        if !self.matched {
            self.revealed = false;
        }
    }

    pub fn mark_matched(&mut self) {
        self.revealed = true;
        self.matched = true;
    }
}
