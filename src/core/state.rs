//! Session state: counters, the current attempt, and move history.
//!
//! ## GameState
//!
//! - `started` / `finished`: lifecycle flags
//! - `flipped_count`: cards flipped in the current attempt (0, 1 or 2)
//! - `total_moves`, `total_time`: the only score
//! - `timer`: handle of the repeating tick, held until the win
//! - `history`: one `MoveRecord` per completed attempt
//!
//! `history` uses an `im` persistent vector so snapshots of the state are
//! cheap to clone.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardIndex;
use crate::timers::TimerHandle;

/// Cards allowed face up in one attempt.
pub const MAX_FLIPPED: u8 = 2;

/// One completed attempt at a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based move number.
    pub number: u32,
    pub first: CardIndex,
    pub second: CardIndex,
    pub matched: bool,
    /// Elapsed seconds when the second card was turned.
    pub at_seconds: u32,
}

/// Mutable state for one play session.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GameState {
    /// Has the clock been started?
    pub started: bool,

    /// Has the win been declared?
    pub finished: bool,

    /// Cards flipped but not yet turned back (0..=2).
    pub flipped_count: u8,

    /// Completed pair attempts, matched or not.
    pub total_moves: u32,

    /// Seconds elapsed since the game started.
    pub total_time: u32,

    /// The active tick, if the clock is running.
    #[serde(skip)]
    pub timer: Option<TimerHandle>,

    /// Cards flipped in the current attempt, in flip order.
    pub face_up: SmallVec<[CardIndex; 2]>,

    /// Every completed attempt, oldest first.
    pub history: Vector<MoveRecord>,
}

impl GameState {
    /// Create a fresh state for a new board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Are two cards waiting to be resolved?
    #[must_use]
    pub fn pair_pending(&self) -> bool {
        self.flipped_count >= MAX_FLIPPED
    }

    /// Is the clock running?
    #[must_use]
    pub fn clock_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Record a card turned face up in this attempt.
    ///
    /// Returns false, leaving the state untouched, if two are already up.
    pub fn push_flipped(&mut self, card: CardIndex) -> bool {
        if self.pair_pending() {
            return false;
        }
        self.flipped_count += 1;
        self.face_up.push(card);
        true
    }

    /// Close out the current attempt as a move.
    pub fn record_move(&mut self, first: CardIndex, second: CardIndex, matched: bool) -> MoveRecord {
        self.total_moves += 1;
        let record = MoveRecord {
            number: self.total_moves,
            first,
            second,
            matched,
            at_seconds: self.total_time,
        };
        self.history.push_back(record);
        record
    }

    /// Forget the current attempt so new cards can be flipped.
    pub fn clear_flipped(&mut self) {
        self.flipped_count = 0;
        self.face_up.clear();
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn matches_found(&self) -> usize {
        self.history.iter().filter(|m| m.matched).count()
    }

    /// The most recent move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert!(!state.started);
        assert!(!state.finished);
        assert_eq!(state.flipped_count, 0);
        assert_eq!(state.total_moves, 0);
        assert_eq!(state.total_time, 0);
        assert!(!state.clock_running());
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_push_flipped_caps_at_two() {
        let mut state = GameState::new();

        assert!(state.push_flipped(CardIndex::new(0)));
        assert!(!state.pair_pending());
        assert!(state.push_flipped(CardIndex::new(1)));
        assert!(state.pair_pending());

        assert!(!state.push_flipped(CardIndex::new(2)));
        assert_eq!(state.flipped_count, 2);
        assert_eq!(state.face_up.as_slice(), &[CardIndex::new(0), CardIndex::new(1)]);

        state.clear_flipped();
        assert_eq!(state.flipped_count, 0);
        assert!(state.face_up.is_empty());
    }

    #[test]
    fn test_record_move() {
        let mut state = GameState::new();
        state.total_time = 5;

        let first = state.record_move(CardIndex::new(0), CardIndex::new(3), true);
        assert_eq!(first.number, 1);
        assert_eq!(first.at_seconds, 5);

        state.record_move(CardIndex::new(1), CardIndex::new(2), false);
        assert_eq!(state.total_moves, 2);
        assert_eq!(state.matches_found(), 1);
        assert!(!state.last_move().unwrap().matched);
    }

    #[test]
    fn test_history_clone_is_independent() {
        let mut state = GameState::new();
        state.record_move(CardIndex::new(0), CardIndex::new(1), true);

        let snapshot = state.clone();
        state.record_move(CardIndex::new(2), CardIndex::new(3), false);

        assert_eq!(snapshot.history.len(), 1);
        assert_eq!(state.history.len(), 2);
    }
}
