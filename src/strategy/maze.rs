//! Maze generators
//!
//! Even widths or heights leave a double wall along the right or bottom edge.

use tracing::info;

use crate::algorithm::maze::{MazeContext, carve_depth_first, carve_prims};
use crate::algorithm::stitching::connect_orphaned_sections;
use crate::io::error::Result;
use crate::math::random::RandomSource;
use crate::spatial::grid::Map;
use crate::strategy::{GenerationStage, MapCreationStrategy};

/// Maze generator using randomized Prim's algorithm
#[derive(Debug, Clone)]
pub struct PrimsMazeStrategy<R> {
    width: usize,
    height: usize,
    random: R,
}

impl<R: RandomSource> PrimsMazeStrategy<R> {
    /// Create a Prim's maze generator
    pub const fn new(width: usize, height: usize, random: R) -> Self {
        Self {
            width,
            height,
            random,
        }
    }
}

impl<M: Map, R: RandomSource> MapCreationStrategy<M> for PrimsMazeStrategy<R> {
    fn create_map_observed(
        &mut self,
        observer: &mut dyn FnMut(GenerationStage, &M),
    ) -> Result<M> {
        let mut map = M::default();
        map.initialize(self.width, self.height);
        observer(GenerationStage::Initialized, &map);

        map = carve_prims(MazeContext::with_map(map, &mut self.random));
        observer(GenerationStage::Carved, &map);

        map = connect_orphaned_sections(&map);
        observer(GenerationStage::Connected, &map);

        info!(
            strategy = "prims",
            width = map.width(),
            height = map.height(),
            "created map"
        );
        Ok(map)
    }
}

/// Maze generator using depth-first backtracking
#[derive(Debug, Clone)]
pub struct DepthFirstMazeStrategy<R> {
    width: usize,
    height: usize,
    random: R,
}

impl<R: RandomSource> DepthFirstMazeStrategy<R> {
    /// Create a depth-first maze generator
    pub const fn new(width: usize, height: usize, random: R) -> Self {
        Self {
            width,
            height,
            random,
        }
    }
}

impl<M: Map, R: RandomSource> MapCreationStrategy<M> for DepthFirstMazeStrategy<R> {
    fn create_map_observed(
        &mut self,
        observer: &mut dyn FnMut(GenerationStage, &M),
    ) -> Result<M> {
        let mut map = M::default();
        map.initialize(self.width, self.height);
        observer(GenerationStage::Initialized, &map);

        map = carve_depth_first(MazeContext::with_map(map, &mut self.random));
        observer(GenerationStage::Carved, &map);

        map = connect_orphaned_sections(&map);
        observer(GenerationStage::Connected, &map);

        info!(
            strategy = "dfs",
            width = map.width(),
            height = map.height(),
            "created map"
        );
        Ok(map)
    }
}
