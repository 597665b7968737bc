//! Numeric utilities for map generation

/// Random number capability and seeded construction
pub mod random;

pub use random::{RandomSource, seeded};
