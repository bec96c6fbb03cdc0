//! Card symbols.
//!
//! Every card shows one emoji from a fixed palette of ten. A board of
//! size N draws `N²/2` of them, so the palette caps the board at 4×4.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The symbol palette, in display order.
pub const PALETTE: [&str; 10] = [
    "\u{1F40D}",                   // snake
    "\u{1F418}",                   // elephant
    "\u{1F407}",                   // rabbit
    "\u{1F994}",                   // hedgehog
    "\u{1F99C}",                   // parrot
    "\u{1F408}\u{200D}\u{2B1B}",   // black cat
    "\u{1F992}",                   // giraffe
    "\u{1F9AD}",                   // seal
    "\u{1F9A7}",                   // orangutan
    "\u{1F980}",                   // crab
];

/// Index into [`PALETTE`].
///
/// Always in range, including when deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SymbolId(pub(crate) u8);

/// A raw symbol index past the end of the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("symbol {0} is outside the palette of {len}", len = PALETTE.len())]
pub struct UnknownSymbol(pub u8);

impl SymbolId {
    /// Create a symbol ID.
    ///
    /// Returns `None` if the index is outside the palette.
    #[must_use]
    pub fn new(index: u8) -> Option<Self> {
        ((index as usize) < PALETTE.len()).then_some(Self(index))
    }

    /// Raw palette index.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Every symbol in the palette.
    pub fn all() -> impl Iterator<Item = SymbolId> {
        (0..PALETTE.len() as u8).map(SymbolId)
    }

    /// Number of symbols available.
    #[must_use]
    pub const fn palette_len() -> usize {
        PALETTE.len()
    }

    /// The emoji shown on the card's back face.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        PALETTE[self.0 as usize]
    }

    /// Look a symbol up by its glyph.
    #[must_use]
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        PALETTE.iter().position(|g| *g == glyph).map(|i| Self(i as u8))
    }
}

impl TryFrom<u8> for SymbolId {
    type Error = UnknownSymbol;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(UnknownSymbol(index))
    }
}

impl From<SymbolId> for u8 {
    fn from(symbol: SymbolId) -> Self {
        symbol.0
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
