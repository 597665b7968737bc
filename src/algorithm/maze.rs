//! Maze carving with Prim's algorithm and depth-first backtracking
//!
//! Both carvers walk a lattice of odd coordinates and leave one-cell walls between
//! corridors. A cell marked walkable but not transparent is "open": it has been
//! reached but may still have unvisited neighbors. Finalized cells are walkable and
//! transparent. Open lists store linear indices because cells are plain snapshots.

use tracing::debug;

use crate::math::random::RandomSource;
use crate::spatial::grid::{Cell, Map};

/// Offsets two steps away along each axis
const SKIP_OFFSETS: [[i64; 2]; 4] = [[-2, 0], [2, 0], [0, -2], [0, 2]];

/// Shared state for one maze carving run
pub struct MazeContext<'a, M, R: ?Sized> {
    width: usize,
    height: usize,
    map: M,
    rng: &'a mut R,
}

impl<'a, M, R> MazeContext<'a, M, R>
where
    M: Map,
    R: RandomSource + ?Sized,
{
    /// Create a context holding a fully solid map of the given size
    pub fn new(width: usize, height: usize, rng: &'a mut R) -> Self {
        let mut map = M::default();
        map.initialize(width, height);
        Self {
            width,
            height,
            map,
            rng,
        }
    }

    /// Create a context around an existing map
    pub fn with_map(map: M, rng: &'a mut R) -> Self {
        Self {
            width: map.width(),
            height: map.height(),
            map,
            rng,
        }
    }

    /// Map being carved
    pub const fn map(&self) -> &M {
        &self.map
    }

    /// Finish carving and hand back the map
    pub fn into_map(self) -> M {
        self.map
    }

    /// Unvisited wall cells two steps away from `cell`, excluding the border
    pub fn skip_neighbors(&self, cell: &Cell) -> Vec<Cell> {
        SKIP_OFFSETS
            .iter()
            .filter_map(|[dx, dy]| {
                let x = cell.x as i64 + dx;
                let y = cell.y as i64 + dy;
                if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
                    return None;
                }
                self.map.cell(x as usize, y as usize)
            })
            .filter(|candidate| {
                !self.map.is_border_cell(candidate.x, candidate.y)
                    && !candidate.is_walkable
                    && !candidate.is_transparent
            })
            .collect()
    }

    /// The wall cell halfway between two cells that are two steps apart
    pub fn link_cell(&self, start: &Cell, end: &Cell) -> Option<Cell> {
        let x = start.x as i64 + (end.x as i64 - start.x as i64) / 2;
        let y = start.y as i64 + (end.y as i64 - start.y as i64) / 2;
        self.map.cell(x as usize, y as usize)
    }

    fn mark_open(&mut self, x: usize, y: usize) {
        self.map.set_cell_properties(x, y, true, false);
    }

    fn finalize(&mut self, x: usize, y: usize) {
        self.map.set_cell_properties(x, y, true, true);
    }

    /// Carve through the link cell into `next` and mark it open
    fn carve_toward(&mut self, current: &Cell, next: &Cell) {
        if let Some(link) = self.link_cell(current, next) {
            self.map.set_cell_properties(link.x, link.y, true, true);
        }
        self.mark_open(next.x, next.y);
    }

    fn position(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Open the start cell at (1, 1), `None` when the map has no interior
    fn start(&mut self) -> Option<usize> {
        if self.width < 3 || self.height < 3 {
            return None;
        }
        self.mark_open(1, 1);
        Some(self.width + 1)
    }

    /// Randomly chosen skip neighbor of the cell at `index`
    fn random_skip_neighbor(&mut self, index: usize) -> Option<(Cell, Cell)> {
        let (x, y) = self.position(index);
        let current = self.map.cell(x, y)?;
        let candidates = self.skip_neighbors(&current);
        if candidates.is_empty() {
            return None;
        }
        let choice = self.rng.pick_index(candidates.len());
        candidates.get(choice).map(|next| (current, *next))
    }
}

/// Carve a maze with randomized Prim's algorithm
///
/// Each step picks any open cell uniformly at random, not only the newest one,
/// which gives short branching corridors.
pub fn carve_prims<M, R>(mut context: MazeContext<'_, M, R>) -> M
where
    M: Map,
    R: RandomSource + ?Sized,
{
    let Some(start) = context.start() else {
        return context.into_map();
    };

    let mut open = vec![start];
    let mut steps = 0usize;

    while !open.is_empty() {
        steps += 1;
        let slot = context.rng.pick_index(open.len());
        let Some(&current) = open.get(slot) else {
            break;
        };

        match context.random_skip_neighbor(current) {
            Some((from, next)) => {
                context.carve_toward(&from, &next);
                open.push(next.index(context.width));
            }
            None => {
                open.swap_remove(slot);
                let (x, y) = context.position(current);
                context.finalize(x, y);
            }
        }
    }

    debug!(
        width = context.width,
        height = context.height,
        steps,
        "carved Prim's maze"
    );
    context.into_map()
}

/// Carve a maze with depth-first backtracking
///
/// The newest open cell is always extended first, giving long winding corridors.
pub fn carve_depth_first<M, R>(mut context: MazeContext<'_, M, R>) -> M
where
    M: Map,
    R: RandomSource + ?Sized,
{
    let Some(start) = context.start() else {
        return context.into_map();
    };

    let mut stack = vec![start];
    let mut steps = 0usize;

    while let Some(&current) = stack.last() {
        steps += 1;
        match context.random_skip_neighbor(current) {
            Some((from, next)) => {
                context.carve_toward(&from, &next);
                stack.push(next.index(context.width));
            }
            None => {
                stack.pop();
                let (x, y) = context.position(current);
                context.finalize(x, y);
            }
        }
    }

    debug!(
        width = context.width,
        height = context.height,
        steps,
        "carved depth-first maze"
    );
    context.into_map()
}
