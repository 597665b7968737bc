//! Procedural map generation for grid-based games
//!
//! Cellular automata carve caves, Prim's and depth-first carvers build mazes, and a
//! flood fill plus union-find stitcher joins every isolated region so the whole
//! map is reachable. All steps are deterministic for a given random source.

#![forbid(unsafe_code)]

/// Generation algorithms: automata, maze carving, flood fill and stitching
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Random number capability
pub mod math;
/// Grid storage and connected sections
pub mod spatial;
/// Complete map generators
pub mod strategy;

pub use io::error::{MapError, Result};
pub use spatial::{Cell, Grid, Map};
pub use strategy::MapCreationStrategy;
