//! # rust-pairs
//!
//! A memory-matching ("pairs") game engine.
//!
//! A board of face-down cards is dealt; the player turns two cards per
//! move. Equal symbols stay face up, unequal ones turn back after a short
//! delay. A move counter and a seconds timer run until every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: The display tree is a `Surface` trait and time is
//!    a virtual clock the host pumps. The same session runs behind a web
//!    page, a terminal, or a test.
//!
//! 2. **Owned State**: One `GameSession` owns the board, counters and every
//!    pending timer. Nothing is global.
//!
//! 3. **Deterministic**: Boards come from a seeded ChaCha8 RNG, so a seed
//!    replays the same deal.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, RNG, session state
//! - `cards`: Symbols and card faces
//! - `board`: The card grid and its generator
//! - `timers`: Deferred tasks on a virtual clock
//! - `rules`: Flip resolution and win detection
//! - `render`: Rendering surface trait and HTML implementation
//! - `input`: Click classification and dispatch
//! - `session`: The controller tying it together

pub mod core;
pub mod cards;
pub mod board;
pub mod timers;
pub mod rules;
pub mod render;
pub mod input;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoardSize, ConfigurationError, GameConfig, GameError, GameRng, GameState, MoveRecord, Timings,
};

pub use crate::cards::{Card, CardFace, CardIndex, SymbolId, PALETTE};

pub use crate::board::{Board, BoardGenerator};

pub use crate::timers::{Fired, Scheduler, TaskKind, TimerHandle};

pub use crate::rules::{FlipOutcome, IgnoreReason, WinSummary};

pub use crate::render::{HtmlSurface, Surface};

pub use crate::input::{ClickResult, ClickTarget, InputHandler};

pub use crate::session::GameSession;
