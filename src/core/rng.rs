//! Deterministic random number generation for board generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Explicit algorithms**: Fisher-Yates shuffle and without-replacement
//!   picks are written out so their distribution is documented here, not
//!   delegated to a library default
//!
//! ```
//! use rust_pairs::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! let mut a = vec![1, 2, 3, 4, 5, 6];
//! let mut b = a.clone();
//! rng1.shuffle(&mut a);
//! rng2.shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used for symbol picks and deck shuffles.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is retained so a session can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (Fisher-Yates).
    ///
    /// Walks from the last index down to 1, swapping each slot with a
    /// uniformly chosen index in `[0, index]`.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for index in (1..slice.len()).rev() {
            let swap_with = self.inner.gen_range(0..=index);
            slice.swap(index, swap_with);
        }
    }

    /// Pick `quantity` distinct elements without replacement.
    ///
    /// Each pick removes a uniformly chosen element from a working copy,
    /// so the result order is the pick order. Returns `None` if the source
    /// has fewer than `quantity` elements.
    pub fn pick_distinct<T: Clone>(&mut self, source: &[T], quantity: usize) -> Option<Vec<T>> {
        if quantity > source.len() {
            return None;
        }

        let mut pool = source.to_vec();
        let mut picks = Vec::with_capacity(quantity);
        for _ in 0..quantity {
            let index = self.inner.gen_range(0..pool.len());
            picks.push(pool.remove(index));
        }
        Some(picks)
    }
}
