//! Bounded integer draws used by the fill and carving steps
//!
//! Every draw uses the half-open convention `[min, max)`: fill draws are taken as
//! `next_between(1, 100)` and compared with `< fill_probability`, list picks as
//! `next_between(0, len)`.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Narrow random number capability consumed by the generators
pub trait RandomSource {
    /// Uniform integer in `[min, max)`, or `min` when the range is empty
    fn next_between(&mut self, min: usize, max: usize) -> usize;

    /// Uniform index into a collection of `len` elements
    fn pick_index(&mut self, len: usize) -> usize {
        self.next_between(0, len)
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_between(&mut self, min: usize, max: usize) -> usize {
        if min >= max {
            return min;
        }
        self.random_range(min..max)
    }
}

/// Deterministic generator for reproducible maps
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
