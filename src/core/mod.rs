//! Core types: configuration, errors, RNG and session state.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use config::{BoardSize, GameConfig, Timings};
pub use error::{ConfigurationError, GameError};
pub use rng::GameRng;
pub use state::{GameState, MoveRecord, MAX_FLIPPED};
