//! Deterministic random number generation for combat resolution.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces an identical sequence
//! - **Injectable**: Resolution code draws through the `UnitRng` trait, so
//!   tests can force outcomes with a scripted sequence
//! - **Serializable**: O(1) position capture and restore
//!
//! ## Usage
//!
//! ```
//! use duel_core::core::{DuelRng, UnitRng};
//!
//! let mut rng = DuelRng::new(42);
//! let mut replay = DuelRng::new(42);
//!
//! // Same seed, same draws
//! assert_eq!(rng.next_unit(), replay.next_unit());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniformly distributed values in `[0, 1)`.
///
/// The one configuration surface of the engine core: production wires
/// [`DuelRng`], tests wire [`SequenceRng`]. Combat resolution is a pure
/// function of the drawn values, so equal sequences give equal outcomes.
pub trait UnitRng {
    /// Draw the next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Deterministic production RNG.
///
/// Uses ChaCha8 for speed while keeping cryptographic-quality randomness.
/// The stream position is a counter, so a session snapshot can capture and
/// resume the sequence in O(1).
#[derive(Clone, Debug)]
pub struct DuelRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DuelRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from OS entropy.
    ///
    /// For hosts that want an unpredictable duel. Replays of such a session
    /// go through [`DuelRng::state`] capture, not the seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::rngs::OsRng.gen();
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current position for serialization.
    #[must_use]
    pub fn state(&self) -> DuelRngState {
        DuelRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved position.
    #[must_use]
    pub fn from_state(state: &DuelRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl UnitRng for DuelRng {
    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Serializable RNG position for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of how
/// many values have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}

/// Scripted RNG for deterministic tests.
///
/// Replays a fixed list of unit values, then panics: running a script dry
/// is a test-authoring error, and silently recycling values would hide it.
///
/// ```
/// use duel_core::core::{SequenceRng, UnitRng};
///
/// let mut rng = SequenceRng::new(vec![0.1, 0.9]);
/// assert_eq!(rng.next_unit(), 0.1);
/// assert_eq!(rng.next_unit(), 0.9);
/// ```
#[derive(Clone, Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRng {
    /// Create a scripted RNG from a list of unit values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "Scripted values must lie in [0, 1)"
        );
        Self { values, cursor: 0 }
    }

    /// How many scripted values remain.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len() - self.cursor
    }
}

impl UnitRng for SequenceRng {
    fn next_unit(&mut self) -> f64 {
        let value = *self
            .values
            .get(self.cursor)
            .expect("SequenceRng script exhausted");
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = DuelRng::new(42);
        let mut rng2 = DuelRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_unit(), rng2.next_unit());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = DuelRng::new(1);
        let mut rng2 = DuelRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_unit()).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_unit()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_unit_range() {
        let mut rng = DuelRng::new(7);

        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v), "draw out of range: {v}");
        }
    }

    #[test]
    fn test_state_capture_resumes_stream() {
        let mut rng = DuelRng::new(42);

        // Advance the RNG
        for _ in 0..100 {
            rng.next_unit();
        }

        let state = rng.state();

        let expected: Vec<_> = (0..10).map(|_| rng.next_unit()).collect();

        let mut restored = DuelRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.next_unit()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = DuelRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: DuelRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_sequence_rng_replays_script() {
        let mut rng = SequenceRng::new(vec![0.0, 0.5, 0.999]);

        assert_eq!(rng.remaining(), 3);
        assert_eq!(rng.next_unit(), 0.0);
        assert_eq!(rng.next_unit(), 0.5);
        assert_eq!(rng.next_unit(), 0.999);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "SequenceRng script exhausted")]
    fn test_sequence_rng_exhaustion_panics() {
        let mut rng = SequenceRng::new(vec![0.5]);
        rng.next_unit();
        rng.next_unit();
    }

    #[test]
    #[should_panic(expected = "Scripted values must lie in [0, 1)")]
    fn test_sequence_rng_rejects_out_of_range() {
        SequenceRng::new(vec![1.0]);
    }
}
