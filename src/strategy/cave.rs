//! Cave generators driven by cellular automata

use tracing::info;

use crate::algorithm::automaton::{
    AutomatonRule, big_area_step, nearest_neighbor_step, randomly_fill_cells, run_generation,
    scale_up,
};
use crate::algorithm::stitching::connect_orphaned_sections;
use crate::io::configuration::{
    CAVE_V2_ROUGH_BORN, CAVE_V2_ROUGH_PASSES, CAVE_V2_ROUGH_SURVIVE, CAVE_V2_SCALE_FACTOR,
    CAVE_V2_SMOOTH_BORN, CAVE_V2_SMOOTH_SURVIVE,
};
use crate::io::error::Result;
use crate::math::random::RandomSource;
use crate::spatial::grid::Map;
use crate::strategy::{GenerationStage, MapCreationStrategy, validate_fill_probability};

/// Cave generator mixing a large-area rule with a nearest-neighbor rule
///
/// The first `cutoff_of_big_area_fill` iterations use the large-area rule, which
/// also plants pillars in wide open spaces. The remaining iterations only smooth.
#[derive(Debug, Clone)]
pub struct CaveStrategy<R> {
    width: usize,
    height: usize,
    fill_probability: usize,
    total_iterations: usize,
    cutoff_of_big_area_fill: usize,
    random: R,
}

impl<R: RandomSource> CaveStrategy<R> {
    /// Create a cave generator
    ///
    /// Recommended values: `fill_probability` 40 to 60 (percent chance of floor),
    /// `total_iterations` 2 to 5, `cutoff_of_big_area_fill` below 4.
    ///
    /// # Errors
    ///
    /// Returns an error if `fill_probability` exceeds 100
    pub fn new(
        width: usize,
        height: usize,
        fill_probability: usize,
        total_iterations: usize,
        cutoff_of_big_area_fill: usize,
        random: R,
    ) -> Result<Self> {
        validate_fill_probability(fill_probability)?;
        Ok(Self {
            width,
            height,
            fill_probability,
            total_iterations,
            cutoff_of_big_area_fill,
            random,
        })
    }
}

impl<M: Map, R: RandomSource> MapCreationStrategy<M> for CaveStrategy<R> {
    fn create_map_observed(
        &mut self,
        observer: &mut dyn FnMut(GenerationStage, &M),
    ) -> Result<M> {
        let mut map = M::default();
        map.initialize(self.width, self.height);
        observer(GenerationStage::Initialized, &map);

        map = randomly_fill_cells(&map, self.fill_probability, &mut self.random);
        observer(GenerationStage::Filled, &map);

        for iteration in 0..self.total_iterations {
            map = if iteration < self.cutoff_of_big_area_fill {
                big_area_step(&map)
            } else {
                nearest_neighbor_step(&map)
            };
            observer(GenerationStage::Iteration(iteration), &map);
        }

        map = connect_orphaned_sections(&map);
        observer(GenerationStage::Connected, &map);

        info!(
            strategy = "cave",
            width = map.width(),
            height = map.height(),
            "created map"
        );
        Ok(map)
    }
}

/// Cave generator that works at half resolution and upscales
///
/// Rough passes at half size give large smooth caverns cheaply, a single
/// smoothing pass after upscaling removes the blocky edges.
#[derive(Debug, Clone)]
pub struct CaveV2Strategy<R> {
    width: usize,
    height: usize,
    fill_probability: usize,
    random: R,
}

impl<R: RandomSource> CaveV2Strategy<R> {
    /// Create a half-scale cave generator
    ///
    /// Recommended `fill_probability` is 50 to 70.
    ///
    /// # Errors
    ///
    /// Returns an error if `fill_probability` exceeds 100
    pub fn new(width: usize, height: usize, fill_probability: usize, random: R) -> Result<Self> {
        validate_fill_probability(fill_probability)?;
        Ok(Self {
            width,
            height,
            fill_probability,
            random,
        })
    }
}

impl<M: Map, R: RandomSource> MapCreationStrategy<M> for CaveV2Strategy<R> {
    fn create_map_observed(
        &mut self,
        observer: &mut dyn FnMut(GenerationStage, &M),
    ) -> Result<M> {
        let rough_rule = AutomatonRule::new(CAVE_V2_ROUGH_BORN, CAVE_V2_ROUGH_SURVIVE);
        let smooth_rule = AutomatonRule::new(CAVE_V2_SMOOTH_BORN, CAVE_V2_SMOOTH_SURVIVE);

        let mut map = M::default();
        map.initialize(
            self.width / CAVE_V2_SCALE_FACTOR,
            self.height / CAVE_V2_SCALE_FACTOR,
        );
        observer(GenerationStage::Initialized, &map);

        map = randomly_fill_cells(&map, self.fill_probability, &mut self.random);
        observer(GenerationStage::Filled, &map);

        for iteration in 0..CAVE_V2_ROUGH_PASSES {
            map = run_generation(&map, &rough_rule);
            observer(GenerationStage::Iteration(iteration), &map);
        }

        map = scale_up(&map, CAVE_V2_SCALE_FACTOR)?;
        observer(GenerationStage::ScaledUp, &map);

        map = run_generation(&map, &smooth_rule);
        observer(GenerationStage::Iteration(CAVE_V2_ROUGH_PASSES), &map);

        map = connect_orphaned_sections(&map);
        observer(GenerationStage::Connected, &map);

        info!(
            strategy = "cave2",
            width = map.width(),
            height = map.height(),
            "created map"
        );
        Ok(map)
    }
}
