//! Flip resolution.
//!
//! A click on a card goes through [`rejection`] first; if nothing rejects
//! it, [`apply_flip`] turns the card and resolves the attempt when it is
//! the second card up. Neither function touches the clock. The caller
//! starts the game between the two calls and schedules the deferred unflip
//! and win announcement from the returned outcome.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::board::Board;
use crate::cards::CardIndex;
use crate::core::GameState;

use super::win::is_won;

/// Why a flip was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The win has been declared.
    Finished,
    /// No card at that index.
    OutOfRange,
    /// The card is already face up or matched.
    AlreadyFlipped,
    /// Two cards are waiting for the unflip.
    PairPending,
}

/// Result of a card click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of an attempt is up.
    FirstFlipped(CardIndex),
    /// Second card matched the first; both are locked face up.
    Matched { first: CardIndex, second: CardIndex },
    /// Second card differs; both turn back when the unflip fires.
    Mismatched { first: CardIndex, second: CardIndex },
    /// The match that left no card face down.
    Won { first: CardIndex, second: CardIndex },
}

impl FlipOutcome {
    /// Did this flip complete a move?
    #[must_use]
    pub fn completes_move(&self) -> bool {
        matches!(
            self,
            FlipOutcome::Matched { .. } | FlipOutcome::Mismatched { .. } | FlipOutcome::Won { .. }
        )
    }

    /// Did this flip leave the board fully revealed?
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, FlipOutcome::Won { .. })
    }

    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, FlipOutcome::Ignored(_))
    }
}

/// Check whether a click on `card` should be dropped.
#[must_use]
pub fn rejection(board: &Board, state: &GameState, card: CardIndex) -> Option<IgnoreReason> {
    if state.finished {
        return Some(IgnoreReason::Finished);
    }
    let Some(target) = board.card(card) else {
        return Some(IgnoreReason::OutOfRange);
    };
    if target.is_flipped() {
        return Some(IgnoreReason::AlreadyFlipped);
    }
    if state.pair_pending() {
        return Some(IgnoreReason::PairPending);
    }
    None
}

/// Turn `card` face up and resolve the attempt if it is the second card.
///
/// The win check runs on the board as it stands right after this flip,
/// before any pending unflip.
pub fn apply_flip(board: &mut Board, state: &mut GameState, card: CardIndex) -> FlipOutcome {
    if let Some(reason) = rejection(board, state, card) {
        return FlipOutcome::Ignored(reason);
    }

    if let Some(target) = board.card_mut(card) {
        target.flip();
    }
    state.push_flipped(card);

    if !state.pair_pending() {
        debug!(%card, "first card up");
        return FlipOutcome::FirstFlipped(card);
    }

    let up: SmallVec<[CardIndex; 2]> = board.unmatched_flipped().map(|c| c.index).collect();
    let (first, second) = match *up.as_slice() {
        [a, b] => (a, b),
        // Face-up set and board disagree; fall back to flip order.
        _ => (state.face_up[0], card),
    };

    let matched = match (board.card(first), board.card(second)) {
        (Some(a), Some(b)) => a.symbol == b.symbol,
        _ => false,
    };

    if matched {
        for index in [first, second] {
            if let Some(c) = board.card_mut(index) {
                c.mark_matched();
            }
        }
    }

    let record = state.record_move(first, second, matched);
    debug!(number = record.number, %first, %second, matched, "move");

    match (matched, is_won(board)) {
        (true, true) => FlipOutcome::Won { first, second },
        (true, false) => FlipOutcome::Matched { first, second },
        (false, _) => FlipOutcome::Mismatched { first, second },
    }
}
