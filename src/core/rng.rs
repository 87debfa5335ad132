//! Deterministic random number generation for dice and card draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical dice and draws
//! - **Injectable**: The game owns one `GameRng`; nothing reaches for a global
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use oligopoly::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll_dice(), b.roll_dice());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A throw of two six-sided dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll(pub u8, pub u8);

impl DiceRoll {
    /// Both dice show the same face.
    #[must_use]
    pub fn is_double(self) -> bool {
        self.0 == self.1
    }

    #[must_use]
    pub fn sum(self) -> usize {
        self.0 as usize + self.1 as usize
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}", self.0, self.1)
    }
}

/// Deterministic RNG backing dice rolls and card draws.
///
/// Uses ChaCha8 for speed while keeping a reproducible sequence per seed.
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

    /// Create an RNG from a fresh random seed.
    #[must_use]
    pub fn from_random_seed() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll one uniform six-sided die.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// Roll two dice.
    pub fn roll_dice(&mut self) -> DiceRoll {
        let first = self.roll_die();
        let second = self.roll_die();
        DiceRoll(first, second)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position so capture is O(1) regardless of how many
/// rolls have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_dice(), rng2.roll_dice());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll_dice()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll_dice()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_dice_faces_in_range() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 6];

        for _ in 0..600 {
            let face = rng.roll_die();
            assert!((1..=6).contains(&face));
            seen[face as usize - 1] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_dice_roll_helpers() {
        assert!(DiceRoll(3, 3).is_double());
        assert!(!DiceRoll(3, 4).is_double());
        assert_eq!(DiceRoll(6, 5).sum(), 11);
        assert_eq!(DiceRoll(2, 1).to_string(), "2+1");
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_round_trip() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.roll_dice();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.roll_dice()).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll_dice()).collect();

        assert_eq!(expected, actual);
    }
}
