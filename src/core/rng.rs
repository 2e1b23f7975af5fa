//! Deterministic random number generation for opponent draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical draw sequence
//! - **Uniform**: Each of the three choices has probability 1/3,
//!   independent of all prior rounds
//! - **Serializable**: O(1) state capture and restore for replay
//!
//! The opponent's draw is the only nondeterminism in the engine; a
//! seedable generator lets tests fix the whole match in advance.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::choice::Choice;

/// Deterministic RNG backing the random opponent.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness.
#[derive(Clone, Debug)]
pub struct MatchRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl MatchRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Draw one choice uniformly at random.
    pub fn draw_choice(&mut self) -> Choice {
        Choice::ALL[self.inner.gen_range(0..Choice::ALL.len())]
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> MatchRngState {
        MatchRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &MatchRngState) -> Self {
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
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many draws have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRngState {
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
        let mut rng1 = MatchRng::new(42);
        let mut rng2 = MatchRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.draw_choice(), rng2.draw_choice());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = MatchRng::new(1);
        let mut rng2 = MatchRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.draw_choice()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.draw_choice()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_all_choices_drawn() {
        let mut rng = MatchRng::new(42);

        let mut seen = [false; 3];
        for _ in 0..100 {
            seen[rng.draw_choice().index()] = true;
        }

        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = MatchRng::new(42);

        // Advance the RNG
        for _ in 0..50 {
            rng.draw_choice();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.draw_choice()).collect();

        let mut restored = MatchRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.draw_choice()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = MatchRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: MatchRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
