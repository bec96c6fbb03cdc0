//! Game configuration types.
//!
//! The host supplies exactly one parameter: the board size, read from the
//! `data-size` attribute of its board element. Everything else has
//! defaults matching the browser game's timings:
//!
//! - `BoardSize`: validated even side length (N×N cards)
//! - `Timings`: tick, unflip and win delays in milliseconds
//! - `GameConfig`: combines the two with an optional RNG seed

use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;

/// Side length of the square board.
///
/// Always even and at least 2, so `N²` cards split into `N²/2` pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Validate a side length.
    pub fn new(size: usize) -> Result<Self, ConfigurationError> {
        if size < 2 {
            return Err(ConfigurationError::TooSmall);
        }
        if size % 2 != 0 {
            return Err(ConfigurationError::Odd);
        }
        Ok(Self(size))
    }

    /// Parse the host's `data-size` attribute.
    ///
    /// The value is read as a number: surrounding whitespace is ignored and
    /// an empty string counts as zero. Fractional values are rejected as
    /// not even.
    pub fn from_attribute(attribute: Option<&str>) -> Result<Self, ConfigurationError> {
        let raw = attribute.ok_or(ConfigurationError::Missing)?.trim();

        let value: f64 = if raw.is_empty() {
            0.0
        } else {
            raw.parse().map_err(|_| ConfigurationError::NotNumeric)?
        };

        if value.is_nan() {
            return Err(ConfigurationError::NotNumeric);
        }
        if value < 2.0 {
            return Err(ConfigurationError::TooSmall);
        }
        if value % 2.0 != 0.0 {
            return Err(ConfigurationError::Odd);
        }

        // Past usize::MAX the cast saturates to an odd value; keep it even
        // so oversized boards fail at generation instead.
        let size = if value >= usize::MAX as f64 {
            usize::MAX & !1
        } else {
            value as usize
        };
        Self::new(size)
    }

    /// Side length N.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Total cards on the board (N²), saturating at `usize::MAX`.
    #[must_use]
    pub const fn card_count(self) -> usize {
        self.0.saturating_mul(self.0)
    }

    /// Number of pairs on the board (N²/2), saturating at `usize::MAX`.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        (self.0 / 2).saturating_mul(self.0)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = ConfigurationError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Scheduling intervals, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Period of the elapsed-time tick.
    pub tick_ms: u64,

    /// Delay before non-matched face-up cards are turned back.
    /// Applies after every move, matched or not.
    pub unflip_delay_ms: u64,

    /// Delay between the board filling up and the win being declared.
    pub win_delay_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            unflip_delay_ms: 3000,
            win_delay_ms: 1000,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    pub size: BoardSize,

    /// RNG seed. `None` seeds from the operating system.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub timings: Timings,
}

impl GameConfig {
    /// Create a config with default timings and an OS-chosen seed.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            seed: None,
            timings: Timings::default(),
        }
    }

    /// Build a config straight from the host's `data-size` attribute.
    pub fn from_attribute(attribute: Option<&str>) -> Result<Self, ConfigurationError> {
        BoardSize::from_attribute(attribute).map(Self::new)
    }

    /// Use a fixed seed for reproducible boards.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the scheduling intervals.
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }
}
