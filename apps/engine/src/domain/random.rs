//! Injectable randomness for shuffling and card selection.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform indices.
///
/// Every `rand::Rng` is one; tests plug in scripted sources to make shuffles
/// and plays predictable.
pub trait RandomSource {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Deterministic generator for a seeded match.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Generator seeded from OS entropy.
pub fn entropy_rng() -> ChaCha8Rng {
    ChaCha8Rng::from_os_rng()
}
