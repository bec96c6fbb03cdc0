//! Game rules: flip resolution and win detection.
//!
//! Rules operate on a `Board` and `GameState` only. Timing, rendering and
//! input routing live in the session, which calls into these functions
//! and acts on the returned `FlipOutcome`.

pub mod flip;
pub mod win;

pub use flip::{apply_flip, rejection, FlipOutcome, IgnoreReason};
pub use win::{is_won, WinSummary};
