//! Rendering surface.
//!
//! The host owns a display tree with a board container, a start control,
//! a moves counter, a timer readout and a win banner. The session drives
//! it through the `Surface` trait and never reads it back: card state is
//! kept in the `Board`, not rediscovered from the display.

mod html;

pub use html::HtmlSurface;

use crate::board::Board;
use crate::cards::Card;
use crate::rules::WinSummary;

/// Moves counter text.
#[must_use]
pub fn moves_text(moves: u32) -> String {
    format!("{moves} moves")
}

/// Timer readout text.
#[must_use]
pub fn timer_text(seconds: u32) -> String {
    format!("time: {seconds} sec")
}

/// The host's display tree.
pub trait Surface {
    /// Replace the board element with a fresh grid for `board`.
    fn replace_board(&mut self, board: &Board);

    /// Update a single card's face classes.
    fn set_card_face(&mut self, card: &Card);

    fn set_moves(&mut self, text: &str);

    fn set_timer(&mut self, text: &str);

    /// Grey out the start control once the clock runs.
    fn disable_start(&mut self);

    /// Mark the board container finished; cards stop taking clicks.
    fn mark_finished(&mut self);

    fn show_win(&mut self, summary: &WinSummary);

    /// Return the chrome (start control, counters, banner) to its
    /// pre-game look.
    fn clear_status(&mut self);
}
