//! Shuffling randomness for draw piles.
//!
//! A pile of a few hundred cards has far more orderings than a 32- or 64-bit
//! generator state can reach, so games shuffle with a ChaCha20 stream seeded
//! with 256 bits from the operating system. Tests seed it with a fixed value
//! instead to get reproducible deals.
//!
//! ```
//! use party_cards::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left: Vec<u32> = (0..52).collect();
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// RNG used for every shuffle a game performs.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha20Rng,
    seed: Option<u64>,
}

impl GameRng {
    /// Create a reproducible RNG from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha20Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha20Rng::from_entropy(),
            seed: None,
        }
    }

    /// The seed this RNG was created with, if it was seeded explicitly.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let mut a: Vec<_> = (0..100).collect();
        let mut b = a.clone();
        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);

        assert_eq!(a, b);
        assert_eq!(rng1.seed(), Some(42));
    }

    #[test]
    fn test_different_seeds() {
        let mut a: Vec<_> = (0..100).collect();
        let mut b = a.clone();
        GameRng::new(1).shuffle(&mut a);
        GameRng::new(2).shuffle(&mut b);

        assert_ne!(a, b);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_entropy_has_no_seed() {
        let rng = GameRng::from_entropy();
        assert_eq!(rng.seed(), None);
    }
}
