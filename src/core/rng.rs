//! Shared random source for wheel draws and bot personalities.
//!
//! ## Key Features
//!
//! - **Seedable**: Same seed produces identical draws (tests, debugging)
//! - **Entropy-backed**: Normal play seeds from the OS
//! - **Single source**: One `GameRng` is threaded through the whole game
//!
//! ```
//! use wheel_game::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! assert_eq!(rng1.gen_range_usize(0..100), rng2.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Pseudo-random source backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: Option<u64>,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    /// Seeded when `seed` is given, entropy-backed otherwise.
    #[must_use]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this RNG was created with, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a float uniformly in `[low, high]`.
    pub fn gen_range_f64(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.inner.gen_range(low..=high)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
