//! Flood fill partitioning of a map into connected sections

use bitvec::prelude::*;

use crate::spatial::grid::{Cell, Map};
use crate::spatial::section::MapSection;

/// 4-directional neighbor offsets in visiting order
const NEIGHBOR_OFFSETS: [[i64; 2]; 4] = [[0, -1], [-1, 0], [1, 0], [0, 1]];

/// Splits a map into maximal 4-connected regions of equal walkable state
///
/// Floor and wall regions are both reported. One analyzer covers one pass: the
/// visited matrix is shared by every traversal so each cell is handled once.
pub struct FloodFillAnalyzer<'a, M> {
    map: &'a M,
    visited: BitVec,
}

impl<'a, M: Map> FloodFillAnalyzer<'a, M> {
    /// Create an analyzer for `map`
    pub fn new(map: &'a M) -> Self {
        Self {
            map,
            visited: bitvec![0; map.width() * map.height()],
        }
    }

    /// All sections of the map in row-major order of their first cell
    pub fn map_sections(mut self) -> Vec<MapSection> {
        let map = self.map;
        let mut sections = Vec::new();

        for cell in map.cells() {
            let section = self.visit(cell);
            if !section.is_empty() {
                sections.push(section);
            }
        }

        sections
    }

    fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.map.width() + x
    }

    fn is_visited(&self, x: usize, y: usize) -> bool {
        self.visited.get(self.index_of(x, y)).as_deref() == Some(&true)
    }

    fn mark_visited(&mut self, x: usize, y: usize) {
        let index = self.index_of(x, y);
        if index < self.visited.len() {
            self.visited.set(index, true);
        }
    }

    /// Depth-first traversal from `seed` with an explicit stack
    fn visit(&mut self, seed: Cell) -> MapSection {
        let mut section = MapSection::new();
        let mut stack = vec![seed];

        while let Some(cell) = stack.pop() {
            if self.is_visited(cell.x, cell.y) {
                continue;
            }
            section.add_cell(cell);
            self.mark_visited(cell.x, cell.y);

            for neighbor in self.neighbors(&cell) {
                if neighbor.is_walkable == cell.is_walkable
                    && !self.is_visited(neighbor.x, neighbor.y)
                {
                    stack.push(neighbor);
                }
            }
        }

        section
    }

    fn neighbors(&self, cell: &Cell) -> Vec<Cell> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|[dx, dy]| {
                let x = cell.x as i64 + dx;
                let y = cell.y as i64 + dy;
                if x < 0 || y < 0 {
                    return None;
                }
                let (x, y) = (x as usize, y as usize);
                if x >= self.map.width() || y >= self.map.height() {
                    return None;
                }
                self.map.cell(x, y)
            })
            .collect()
    }
}

/// Convenience wrapper running a single analysis pass
pub fn map_sections<M: Map>(map: &M) -> Vec<MapSection> {
    FloodFillAnalyzer::new(map).map_sections()
}
