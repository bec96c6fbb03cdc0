//! Board generation: pick symbols, pair them up, shuffle.

use tracing::info;

use crate::cards::{Card, CardIndex, SymbolId};
use crate::core::{BoardSize, GameError, GameRng};

use super::Board;

/// Builds shuffled boards from a size and an RNG.
///
/// ## Example
///
/// ```
/// use rust_pairs::board::BoardGenerator;
/// use rust_pairs::core::{BoardSize, GameRng};
///
/// let mut rng = GameRng::new(42);
/// let board = BoardGenerator::generate(BoardSize::new(4).unwrap(), &mut rng).unwrap();
///
/// assert_eq!(board.len(), 16);
/// assert!(board.symbol_counts().values().all(|&n| n == 2));
/// ```
pub struct BoardGenerator;

impl BoardGenerator {
    /// Generate a board of `size`×`size` face-down cards.
    ///
    /// Fails with `InsufficientSymbols` when the board needs more pairs
    /// than the palette has symbols.
    pub fn generate(size: BoardSize, rng: &mut GameRng) -> Result<Board, GameError> {
        let needed = size.pair_count();
        let palette: Vec<SymbolId> = SymbolId::all().collect();

        let picks = rng
            .pick_distinct(&palette, needed)
            .ok_or(GameError::InsufficientSymbols {
                needed,
                available: palette.len(),
            })?;

        let mut deck = Vec::with_capacity(size.card_count());
        deck.extend_from_slice(&picks);
        deck.extend_from_slice(&picks);
        rng.shuffle(&mut deck);

        let cards = deck
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| Card::new(CardIndex::new(i), symbol))
            .collect();

        info!(%size, seed = rng.seed(), "generated board");
        Ok(Board::from_cards(size, cards))
    }
}
