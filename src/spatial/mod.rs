//! Spatial data structures for map generation
//!
//! This module contains spatial-related functionality including:
//! - The grid capability trait and its dense implementation
//! - Connected map sections and bounding rectangles

/// Grid capability trait, cell snapshots and dense grid storage
pub mod grid;
/// Connected regions produced by flood fill analysis
pub mod section;

pub use grid::{Cell, Grid, Map};
pub use section::{Bounds, MapSection};
