//! Card system: symbols and card instances.
//!
//! ## Key Types
//!
//! - `SymbolId`: Index into the fixed emoji palette
//! - `CardIndex`: Stable board position, used instead of re-querying the
//!   render tree on every click
//! - `CardFace`: Face-down / flipped / matched
//! - `Card`: Runtime card state

pub mod card;
pub mod symbol;

pub use card::{Card, CardFace, CardIndex};
pub use symbol::{SymbolId, UnknownSymbol, PALETTE};
