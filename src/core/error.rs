//! Error types.
//!
//! Only board generation can fail. Rejected input during play (rapid
//! clicks, clicks on matched cards, clicks during a delay window) is not an
//! error: it resolves to an ignored outcome.

use thiserror::Error;

/// The board size supplied by the host is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Missing data-size attribute")]
    Missing,

    #[error("The size of the board must be a number")]
    NotNumeric,

    #[error("The size of the board must be at least 2")]
    TooSmall,

    #[error("The size of the board must be an even number.")]
    Odd,
}

/// Errors raised while generating a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("board needs {needed} distinct symbols but the palette only has {available}")]
    InsufficientSymbols { needed: usize, available: usize },
}
