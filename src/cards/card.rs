//! Card instances - runtime card state.
//!
//! A `Card` sits at a fixed board position for its whole life. Only its
//! face changes:
//!
//! ```text
//! FaceDown --flip--> Flipped --mark_matched--> Matched
//!    ^                  |
//!    +------unflip------+
//! ```
//!
//! `Matched` is terminal: unflipping a matched card does nothing.

use serde::{Deserialize, Serialize};

use super::symbol::SymbolId;

/// Stable position of a card on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardIndex(pub usize);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Display state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    /// Symbol hidden.
    #[default]
    FaceDown,
    /// Symbol revealed, awaiting resolution.
    Flipped,
    /// Part of a found pair; permanently revealed.
    Matched,
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub index: CardIndex,
    pub symbol: SymbolId,
    pub face: CardFace,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(index: CardIndex, symbol: SymbolId) -> Self {
        Self {
            index,
            symbol,
            face: CardFace::FaceDown,
        }
    }

    /// Is the symbol visible? Matched cards count as flipped.
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        matches!(self.face, CardFace::Flipped | CardFace::Matched)
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.face == CardFace::Matched
    }

    /// Reveal a face-down card. Returns false if it was already showing.
    pub fn flip(&mut self) -> bool {
        if self.face != CardFace::FaceDown {
            return false;
        }
        self.face = CardFace::Flipped;
        true
    }

    /// Lock the card face-up as part of a pair.
    pub fn mark_matched(&mut self) {
        self.face = CardFace::Matched;
    }

    /// Hide a flipped card. Returns true if the face changed.
    pub fn unflip(&mut self) -> bool {
        if self.face != CardFace::Flipped {
            return false;
        }
        self.face = CardFace::FaceDown;
        true
    }
}
