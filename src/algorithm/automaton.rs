//! Cellular automaton transforms for cave generation
//!
//! Every function here reads from one map and returns a fresh clone, the input is
//! never modified. Border cells are never rewritten by a generation step.

use crate::io::configuration::{BIG_AREA_SPARSE_CUTOFF, FILL_DRAW_UPPER, NEIGHBOR_WALL_CUTOFF};
use crate::io::error::{Result, invalid_parameter};
use crate::math::random::RandomSource;
use crate::spatial::grid::{Cell, Map};

/// Largest wall count possible in an 8-neighborhood
const MAX_NEIGHBORS: usize = 8;

/// Birth and survival neighbor counts for one automaton generation
///
/// A wall with a wall count in `survive` stays a wall. A floor with a wall count in
/// `born` becomes a wall. Counts above 8 can never occur and are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutomatonRule {
    born: [bool; MAX_NEIGHBORS + 1],
    survive: [bool; MAX_NEIGHBORS + 1],
}

impl AutomatonRule {
    /// Build a rule from birth and survival count lists
    pub fn new(born: &[usize], survive: &[usize]) -> Self {
        Self {
            born: Self::count_table(born),
            survive: Self::count_table(survive),
        }
    }

    fn count_table(counts: &[usize]) -> [bool; MAX_NEIGHBORS + 1] {
        let mut table = [false; MAX_NEIGHBORS + 1];
        for &count in counts {
            if let Some(slot) = table.get_mut(count) {
                *slot = true;
            }
        }
        table
    }

    /// Whether a floor cell with `count` wall neighbors turns into a wall
    pub fn is_born(&self, count: usize) -> bool {
        self.born.get(count).copied().unwrap_or(false)
    }

    /// Whether a wall cell with `count` wall neighbors stays a wall
    pub fn survives(&self, count: usize) -> bool {
        self.survive.get(count).copied().unwrap_or(false)
    }

    /// Next wall state of a cell given its current state and neighbor count
    pub fn next_is_wall(&self, is_wall: bool, count: usize) -> bool {
        if is_wall {
            self.survives(count)
        } else {
            self.is_born(count)
        }
    }
}

/// Count non-walkable cells in the square of half-side `distance` around `(x, y)`
///
/// The center cell is excluded and the square is clipped to the map.
pub fn count_walls_near<M: Map>(map: &M, x: usize, y: usize, distance: usize) -> usize {
    map.cells_in_square(x, y, distance)
        .filter(|cell| !(cell.x == x && cell.y == y) && !cell.is_walkable)
        .count()
}

/// Rewrite every interior cell as wall or floor according to `becomes_wall`
///
/// Decisions read the untouched input so that the update is simultaneous.
fn transform_interior<M, F>(map: &M, becomes_wall: F) -> M
where
    M: Map,
    F: Fn(&Cell) -> bool,
{
    let mut updated = map.clone();

    for cell in map.cells() {
        if map.is_border_cell(cell.x, cell.y) {
            continue;
        }
        let is_floor = !becomes_wall(&cell);
        updated.set_cell_properties(cell.x, cell.y, is_floor, is_floor);
    }

    updated
}

/// Run one cellular automaton generation with the given rule
pub fn run_generation<M: Map>(map: &M, rule: &AutomatonRule) -> M {
    transform_interior(map, |cell| {
        rule.next_is_wall(!cell.is_walkable, count_walls_near(map, cell.x, cell.y, 1))
    })
}

/// Large-area smoothing step
///
/// A cell becomes a wall when it is crowded by walls, or when it sits in a wide
/// open area with almost no walls within two steps. The second condition seeds
/// pillars inside big caverns.
pub fn big_area_step<M: Map>(map: &M) -> M {
    transform_interior(map, |cell| {
        count_walls_near(map, cell.x, cell.y, 1) >= NEIGHBOR_WALL_CUTOFF
            || count_walls_near(map, cell.x, cell.y, 2) <= BIG_AREA_SPARSE_CUTOFF
    })
}

/// Nearest-neighbor smoothing step
pub fn nearest_neighbor_step<M: Map>(map: &M) -> M {
    transform_interior(map, |cell| {
        count_walls_near(map, cell.x, cell.y, 1) >= NEIGHBOR_WALL_CUTOFF
    })
}

/// Randomly turn interior cells into floor with `fill_probability` percent chance
///
/// Border cells always become walls. Each interior cell draws from `[1, 100)` and
/// becomes floor when the draw is below `fill_probability`.
pub fn randomly_fill_cells<M, R>(map: &M, fill_probability: usize, rng: &mut R) -> M
where
    M: Map,
    R: RandomSource + ?Sized,
{
    let mut filled = map.clone();

    for cell in map.cells() {
        let is_floor = !map.is_border_cell(cell.x, cell.y)
            && rng.next_between(1, FILL_DRAW_UPPER) < fill_probability;
        filled.set_cell_properties(cell.x, cell.y, is_floor, is_floor);
    }

    filled
}

/// Nearest-neighbor upscale by an integer factor
///
/// Destination `(x, y)` samples source `(x / factor, y / factor)`. Both flags of the
/// destination are taken from the source cell's transparency.
///
/// # Errors
///
/// Returns an error if `factor` is smaller than 2
pub fn scale_up<M: Map>(map: &M, factor: usize) -> Result<M> {
    if factor < 2 {
        return Err(invalid_parameter(
            "factor",
            &factor,
            &"scale factor must be greater than 1",
        ));
    }

    let source_width = map.width();
    let source_height = map.height();
    let width = source_width * factor;
    let height = source_height * factor;

    let mut scaled = M::default();
    scaled.initialize(width, height);

    for y in 0..height {
        for x in 0..width {
            let source_x = x * source_width / width;
            let source_y = y * source_height / height;
            if let Some(source) = map.cell(source_x, source_y) {
                scaled.set_cell_properties(x, y, source.is_transparent, source.is_transparent);
            }
        }
    }

    Ok(scaled)
}
