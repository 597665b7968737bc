//! Complete map generators built from the algorithm building blocks
//!
//! Each strategy follows the same pipeline: initialize, fill or carve, iterate,
//! optionally upscale, then stitch isolated sections together.

use std::fmt;

use crate::io::configuration::MAX_FILL_PROBABILITY;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::Map;

/// Cellular automaton cave generators
pub mod cave;
/// Prim's and depth-first maze generators
pub mod maze;

pub use cave::{CaveStrategy, CaveV2Strategy};
pub use maze::{DepthFirstMazeStrategy, PrimsMazeStrategy};

/// Intermediate map reported while a strategy runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    /// Solid map at its working size
    Initialized,
    /// After random floor placement
    Filled,
    /// After the automaton iteration with this zero-based number
    Iteration(usize),
    /// After upscaling to the final size
    ScaledUp,
    /// After maze carving
    Carved,
    /// Final map with every section connected
    Connected,
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initialized => write!(f, "initialized"),
            Self::Filled => write!(f, "filled"),
            Self::Iteration(number) => write!(f, "iteration {number}"),
            Self::ScaledUp => write!(f, "scaled up"),
            Self::Carved => write!(f, "carved"),
            Self::Connected => write!(f, "connected"),
        }
    }
}

/// A complete map generator
pub trait MapCreationStrategy<M: Map> {
    /// Generate a map, reporting every intermediate stage to `observer`
    ///
    /// # Errors
    ///
    /// Returns an error if an internal transform rejects its parameters
    fn create_map_observed(&mut self, observer: &mut dyn FnMut(GenerationStage, &M))
    -> Result<M>;

    /// Generate a map
    ///
    /// # Errors
    ///
    /// Returns an error if an internal transform rejects its parameters
    fn create_map(&mut self) -> Result<M> {
        self.create_map_observed(&mut |_, _| {})
    }
}

/// Reject fill probabilities outside `0..=100`
pub(crate) fn validate_fill_probability(fill_probability: usize) -> Result<()> {
    if fill_probability > MAX_FILL_PROBABILITY {
        return Err(invalid_parameter(
            "fill_probability",
            &fill_probability,
            &format!("must be at most {MAX_FILL_PROBABILITY}"),
        ));
    }
    Ok(())
}
