//! Input boundary.
//!
//! The host installs one click listener for the whole page and translates
//! each event into a `ClickTarget`. Only two targets matter: a card face
//! whose card is still face down, and the start control while it is
//! enabled. Everything else is dropped.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::CardIndex;
use crate::render::Surface;
use crate::rules::FlipOutcome;
use crate::session::GameSession;

/// What a click landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickTarget {
    /// One of a card's faces.
    CardFace {
        card: CardIndex,
        /// The card element already carries `flipped`.
        container_flipped: bool,
    },
    /// The start button.
    StartControl { disabled: bool },
    /// Anything else on the page.
    Other,
}

impl ClickTarget {
    /// Classify a click from the target element's structure.
    ///
    /// - `class_name`: class attribute of the clicked element
    /// - `parent_class_name`: class attribute of its parent
    /// - `node_name`: tag name of the clicked element
    /// - `card`: board position of the enclosing card, when there is one
    ///
    /// A card face is any element whose class mentions `card` inside a
    /// card element; the start control is the page's only `BUTTON`.
    #[must_use]
    pub fn classify(
        class_name: &str,
        parent_class_name: &str,
        node_name: &str,
        card: Option<CardIndex>,
    ) -> Self {
        if class_name.contains("card") {
            if let Some(card) = card {
                return ClickTarget::CardFace {
                    card,
                    container_flipped: has_class(parent_class_name, "flipped"),
                };
            }
        }
        if node_name.eq_ignore_ascii_case("button") {
            return ClickTarget::StartControl {
                disabled: has_class(class_name, "disabled"),
            };
        }
        ClickTarget::Other
    }

    /// A click on a face-down card.
    #[must_use]
    pub fn card(index: usize) -> Self {
        ClickTarget::CardFace {
            card: CardIndex::new(index),
            container_flipped: false,
        }
    }
}

fn has_class(class_name: &str, class: &str) -> bool {
    class_name.split_ascii_whitespace().any(|c| c == class)
}

/// What a dispatched click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickResult {
    Flip(FlipOutcome),
    /// The start control began the game.
    Started,
    /// The click was dropped.
    Ignored,
}

/// Routes classified clicks into a session.
pub struct InputHandler;

impl InputHandler {
    /// Dispatch one click.
    pub fn dispatch<S: Surface>(session: &mut GameSession<S>, target: ClickTarget) -> ClickResult {
        match target {
            ClickTarget::CardFace { container_flipped: true, card } => {
                trace!(%card, "click on face-up card ignored");
                ClickResult::Ignored
            }
            ClickTarget::CardFace { card, .. } => match session.flip_card(card) {
                FlipOutcome::Ignored(_) => ClickResult::Ignored,
                outcome => ClickResult::Flip(outcome),
            },
            ClickTarget::StartControl { disabled: false } => {
                if session.start_game() {
                    ClickResult::Started
                } else {
                    ClickResult::Ignored
                }
            }
            ClickTarget::StartControl { disabled: true } | ClickTarget::Other => {
                trace!(?target, "click ignored");
                ClickResult::Ignored
            }
        }
    }
}
