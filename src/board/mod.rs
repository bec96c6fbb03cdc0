//! The board: an ordered N×N grid of cards.
//!
//! Cards are stored row-major and addressed by `CardIndex`. Every symbol on
//! a generated board occurs exactly twice.

mod generator;

pub use generator::BoardGenerator;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardIndex, SymbolId};
use crate::core::BoardSize;

/// An N×N grid of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    cards: Vec<Card>,
}

impl Board {
    /// Assemble a board from already-shuffled cards.
    ///
    /// Cards must be indexed by position.
    pub(crate) fn from_cards(size: BoardSize, cards: Vec<Card>) -> Self {
        debug_assert_eq!(cards.len(), size.card_count());
        debug_assert!(cards.iter().enumerate().all(|(i, c)| c.index.raw() == i));
        Self { size, cards }
    }

    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Number of cards (N²).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.raw())
    }

    pub fn card_mut(&mut self, index: CardIndex) -> Option<&mut Card> {
        self.cards.get_mut(index.raw())
    }

    /// Row and column of a card.
    #[must_use]
    pub fn position(&self, index: CardIndex) -> (usize, usize) {
        let n = self.size.get();
        (index.raw() / n, index.raw() % n)
    }

    /// How many times each symbol occurs.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<SymbolId, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.symbol).or_insert(0) += 1;
        }
        counts
    }

    /// True when no card is face down.
    #[must_use]
    pub fn all_flipped(&self) -> bool {
        self.cards.iter().all(Card::is_flipped)
    }

    /// Number of cards still face down.
    #[must_use]
    pub fn face_down_count(&self) -> usize {
        self.cards.iter().filter(|c| !c.is_flipped()).count()
    }

    /// Cards that are face up but not yet part of a match, in board order.
    pub fn unmatched_flipped(&self) -> impl Iterator<Item = &Card> {
        self.cards
            .iter()
            .filter(|c| c.is_flipped() && !c.is_matched())
    }

    /// Turn every non-matched card face down.
    ///
    /// Returns the indices that changed.
    pub fn unflip_unmatched(&mut self) -> Vec<CardIndex> {
        self.cards
            .iter_mut()
            .filter_map(|c| c.unflip().then_some(c.index))
            .collect()
    }
}
