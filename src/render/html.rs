//! In-memory HTML surface.
//!
//! Keeps the state of each display element and renders the markup a
//! browser page would hold:
//!
//! ```text
//! <div class="board" style="grid-template-columns: repeat(4, auto)">
//!     <div class="card flipped">
//!         <div class="card-front"></div>
//!         <div class="card-back">🐍</div>
//!     </div>
//!     ...
//! </div>
//! ```

use std::fmt::Write;

use crate::board::Board;
use crate::cards::{Card, CardFace, SymbolId};
use crate::rules::WinSummary;

use super::{moves_text, timer_text, Surface};

/// Retained display tree rendered as HTML.
#[derive(Clone, Debug)]
pub struct HtmlSurface {
    columns: usize,
    cards: Vec<(SymbolId, CardFace)>,
    moves: String,
    timer: String,
    start_disabled: bool,
    finished: bool,
    win: Option<WinSummary>,
    /// How many times the board element has been replaced.
    generation: u32,
}

impl Default for HtmlSurface {
    fn default() -> Self {
        Self {
            columns: 0,
            cards: Vec::new(),
            moves: moves_text(0),
            timer: timer_text(0),
            start_disabled: false,
            finished: false,
            win: None,
            generation: 0,
        }
    }
}

impl HtmlSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn moves(&self) -> &str {
        &self.moves
    }

    #[must_use]
    pub fn timer(&self) -> &str {
        &self.timer
    }

    #[must_use]
    pub fn start_disabled(&self) -> bool {
        self.start_disabled
    }

    #[must_use]
    pub fn finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn win(&self) -> Option<&WinSummary> {
        self.win.as_ref()
    }

    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Face of the card rendered at `index`.
    #[must_use]
    pub fn card_face(&self, index: usize) -> Option<CardFace> {
        self.cards.get(index).map(|(_, face)| *face)
    }

    /// Class list of a card element.
    #[must_use]
    pub fn card_class(face: CardFace) -> &'static str {
        match face {
            CardFace::FaceDown => "card",
            CardFace::Flipped => "card flipped",
            CardFace::Matched => "card flipped matched",
        }
    }

    /// Markup of the board element.
    #[must_use]
    pub fn board_html(&self) -> String {
        let mut out = format!(
            "<div class=\"board\" style=\"grid-template-columns: repeat({}, auto)\">\n",
            self.columns
        );
        for (symbol, face) in &self.cards {
            // Writing to a String cannot fail.
            let _ = write!(
                out,
                "    <div class=\"{}\">\n        <div class=\"card-front\"></div>\n        <div class=\"card-back\">{}</div>\n    </div>\n",
                Self::card_class(*face),
                symbol.glyph()
            );
        }
        out.push_str("</div>");
        out
    }

    /// Markup of the win banner contents. Empty until the win.
    #[must_use]
    pub fn win_html(&self) -> String {
        match &self.win {
            Some(summary) => format!(
                "<span class=\"win-text\">You won!<br />with <span class=\"highlight\">{}</span> moves<br />under <span class=\"highlight\">{}</span> seconds</span>",
                summary.moves, summary.seconds
            ),
            None => String::new(),
        }
    }

    /// Markup of the whole game area.
    #[must_use]
    pub fn document(&self) -> String {
        let container_class = if self.finished {
            "board-container flipped"
        } else {
            "board-container"
        };
        let button_class = if self.start_disabled { " class=\"disabled\"" } else { "" };

        format!(
            "<div class=\"game\">\n<div class=\"controls\">\n<button{button_class}>Start</button>\n<div class=\"stats\">\n<div class=\"moves\">{}</div>\n<div class=\"timer\">{}</div>\n</div>\n</div>\n<div class=\"{container_class}\">\n{}\n<div class=\"win\">{}</div>\n</div>\n</div>",
            self.moves,
            self.timer,
            self.board_html(),
            self.win_html()
        )
    }
}

impl Surface for HtmlSurface {
    fn replace_board(&mut self, board: &Board) {
        self.columns = board.size().get();
        self.cards = board.cards().iter().map(|c| (c.symbol, c.face)).collect();
        self.generation += 1;
    }

    fn set_card_face(&mut self, card: &Card) {
        if let Some(slot) = self.cards.get_mut(card.index.raw()) {
            slot.1 = card.face;
        }
    }

    fn set_moves(&mut self, text: &str) {
        self.moves = text.to_string();
    }

    fn set_timer(&mut self, text: &str) {
        self.timer = text.to_string();
    }

    fn disable_start(&mut self) {
        self.start_disabled = true;
    }

    fn mark_finished(&mut self) {
        self.finished = true;
    }

    fn show_win(&mut self, summary: &WinSummary) {
        self.win = Some(*summary);
    }

    fn clear_status(&mut self) {
        self.moves = moves_text(0);
        self.timer = timer_text(0);
        self.start_disabled = false;
        self.finished = false;
        self.win = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardGenerator;
    use crate::cards::CardIndex;
    use crate::core::{BoardSize, GameRng};

    fn rendered() -> (Board, HtmlSurface) {
        let board =
            BoardGenerator::generate(BoardSize::new(2).unwrap(), &mut GameRng::new(5)).unwrap();
        let mut surface = HtmlSurface::new();
        surface.replace_board(&board);
        (board, surface)
    }

    #[test]
    fn test_board_markup() {
        let (board, surface) = rendered();
        let html = surface.board_html();

        assert!(html.starts_with(
            "<div class=\"board\" style=\"grid-template-columns: repeat(2, auto)\">"
        ));
        assert_eq!(html.matches("<div class=\"card\">").count(), 4);
        assert_eq!(html.matches("card-front").count(), 4);
        for card in board.cards() {
            let back = format!("<div class=\"card-back\">{}</div>", card.symbol.glyph());
            assert!(html.contains(&back));
        }
    }

    #[test]
    fn test_card_face_updates() {
        let (mut board, mut surface) = rendered();
        let card = board.card_mut(CardIndex::new(2)).unwrap();
        card.flip();
        card.mark_matched();
        let card = card.clone();

        surface.set_card_face(&card);
        assert_eq!(surface.card_face(2), Some(CardFace::Matched));
        assert!(surface.board_html().contains("card flipped matched"));
    }

    #[test]
    fn test_win_markup() {
        let (_, mut surface) = rendered();
        assert_eq!(surface.win_html(), "");

        surface.mark_finished();
        surface.show_win(&WinSummary { moves: 2, seconds: 9 });

        let doc = surface.document();
        assert!(doc.contains("board-container flipped"));
        assert!(doc.contains("<span class=\"highlight\">2</span> moves"));
        assert!(doc.contains("<span class=\"highlight\">9</span> seconds"));
    }

    #[test]
    fn test_clear_status() {
        let (_, mut surface) = rendered();
        surface.disable_start();
        surface.set_moves("4 moves");
        surface.mark_finished();
        surface.show_win(&WinSummary { moves: 4, seconds: 3 });

        surface.clear_status();
        assert!(!surface.start_disabled());
        assert!(!surface.finished());
        assert!(surface.win().is_none());
        assert_eq!(surface.moves(), "0 moves");
        assert!(surface.document().contains("<button>Start</button>"));
    }
}
