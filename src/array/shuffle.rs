//! Fisher-Yates shuffling with an injectable random source.
//!
//! A random source is any `FnMut() -> f64` returning samples in `[0, 1)`.
//! [`Shuffler::default`] draws from [`fastrand::f64`]; tests inject a seeded
//! generator to make permutations reproducible:
//!
//! ```rust
//! use pipekit::array::shuffle::shuffler;
//!
//! let mut first_rng = fastrand::Rng::with_seed(7);
//! let mut second_rng = fastrand::Rng::with_seed(7);
//! let mut first = shuffler(move || first_rng.f64());
//! let mut second = shuffler(move || second_rng.f64());
//!
//! let values: Vec<u32> = (0..32).collect();
//! assert_eq!(first.shuffle(&values), second.shuffle(&values));
//! ```

use crate::sequence::{IntoSequence, to_sequence};
use crate::validation::to_count;

/// A ready-to-use shuffle bound to a random source.
#[derive(Clone, Debug)]
pub struct Shuffler<R = fn() -> f64> {
    random: R,
}

impl<R> Shuffler<R>
where
    R: FnMut() -> f64,
{
    /// Creates a shuffler drawing samples from `random`.
    pub const fn new(random: R) -> Self {
        Self { random }
    }

    /// Returns a uniformly permuted copy of `sequence`.
    ///
    /// Samples outside `[0, 1)` are clamped into range, so a misbehaving
    /// source biases the permutation but never panics.
    pub fn shuffle<S: IntoSequence>(&mut self, sequence: S) -> Vec<S::Item> {
        let mut sequence = to_sequence(sequence);
        for index in (1..sequence.len()).rev() {
            let pick = pick_index((self.random)(), index + 1);
            sequence.swap(index, pick);
        }
        sequence
    }
}

impl Default for Shuffler {
    fn default() -> Self {
        Self::new(fastrand::f64)
    }
}

/// Creates a [`Shuffler`] over `random`.
pub const fn shuffler<R>(random: R) -> Shuffler<R>
where
    R: FnMut() -> f64,
{
    Shuffler::new(random)
}

#[allow(clippy::cast_precision_loss)]
fn pick_index(sample: f64, bound: usize) -> usize {
    to_count((sample * bound as f64).floor()).min(bound - 1)
}
