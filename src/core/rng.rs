//! Deterministic random number generation for word selection and scrambling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rounds
//! - **Context streams**: Independent sequences for word picks and shuffles
//! - **Injectable**: The engine only sees the `RandomSource` trait
//!
//! ```
//! use unscramble::core::{GameRng, RandomSource};
//!
//! let rng = GameRng::new(42);
//! let mut picks = rng.for_context("words");
//!
//! let mut again = GameRng::new(42).for_context("words");
//! assert_eq!(picks.gen_index(100), again.gen_index(100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Source of randomness consumed by the game engine.
///
/// Word selection calls `gen_index`, scrambling calls `shuffle`.
/// Implementations must return indices strictly below `bound`.
pub trait RandomSource {
    /// Uniform index in `0..bound`. `bound` is never zero.
    fn gen_index(&mut self, bound: usize) -> usize;

    /// Shuffle a slice in place.
    ///
    /// Default is a Fisher-Yates pass driven by `gen_index`.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Seedable RNG backed by ChaCha8.
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

    /// Create an RNG seeded from OS entropy.
    ///
    /// The chosen seed is still recorded, so a round can be replayed via `seed()`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn gen_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always answers with the same index (clamped to the bound).
    struct Fixed(usize);

    impl RandomSource for Fixed {
        fn gen_index(&mut self, bound: usize) -> usize {
            self.0.min(bound - 1)
        }
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_index(1000), rng2.gen_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_produces_different_sequence() {
        let rng = GameRng::new(42);
        let mut words = rng.for_context("words");
        let mut scramble = rng.for_context("scramble");

        let seq1: Vec<_> = (0..10).map(|_| words.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| scramble.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_is_deterministic() {
        let mut ctx1 = GameRng::new(7).for_context("test");
        let mut ctx2 = GameRng::new(7).for_context("test");

        for _ in 0..10 {
            assert_eq!(ctx1.gen_index(1000), ctx2.gen_index(1000));
        }
    }

    #[test]
    fn test_gen_index_in_bounds() {
        let mut rng = GameRng::new(3);
        for bound in 1..50 {
            assert!(rng.gen_index(bound) < bound);
        }
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_default_shuffle_is_permutation() {
        let mut data = vec!['a', 'b', 'c', 'd'];
        Fixed(0).shuffle(&mut data);

        // i=3 swaps with 0, i=2 swaps with 0, i=1 swaps with 0
        assert_eq!(data, vec!['b', 'c', 'd', 'a']);
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        let mut original = rng.clone();
        assert_eq!(original.gen_index(1_000_000), replay.gen_index(1_000_000));
    }
}
