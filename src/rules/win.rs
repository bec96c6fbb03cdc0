//! Win detection.

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// True when no card on the board is face down.
///
/// Matched cards count as face up. The last two face-down cards always
/// share a symbol, so a board can only become fully revealed through a
/// match; this never fires while a mismatched pair awaits its unflip.
#[must_use]
pub fn is_won(board: &Board) -> bool {
    !board.is_empty() && board.all_flipped()
}

/// Final score shown when the win is declared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinSummary {
    pub moves: u32,
    pub seconds: u32,
}

impl std::fmt::Display for WinSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You won! with {} moves under {} seconds",
            self.moves, self.seconds
        )
    }
}
