//! Tunnel carving that joins every map section into one network
//!
//! Sections come from the flood fill analyzer and include wall regions as well as
//! floor regions. Each pass links every section to its nearest section that is not
//! yet in the same union-find set, so unions made earlier in a pass already shape
//! the choices later in that pass.

use tracing::debug;

use crate::algorithm::flood_fill::map_sections;
use crate::algorithm::union_find::UnionFind;
use crate::spatial::grid::{Cell, Map};
use crate::spatial::section::MapSection;

/// Connect all isolated sections of `map` with straight tunnels
///
/// Returns a clone of `map` in which every originally walkable cell can reach every
/// other one through 4-directional moves.
pub fn connect_orphaned_sections<M: Map>(map: &M) -> M {
    let sections = map_sections(map);
    let endpoints: Vec<Option<(usize, usize)>> = sections
        .iter()
        .map(|section| tunnel_endpoint(map, section))
        .collect();

    let mut connected = map.clone();
    let mut union_find = UnionFind::new(sections.len());
    let mut passes = 0usize;
    let mut tunnels = 0usize;

    while union_find.count() > 1 {
        passes += 1;
        for index in 0..sections.len() {
            let Some(nearest) = find_nearest_section(&sections, index, &mut union_find) else {
                continue;
            };

            let from = endpoints.get(index).copied().flatten();
            let to = endpoints.get(nearest).copied().flatten();
            if let (Some(from), Some(to)) = (from, to) {
                carve_tunnel(map, &mut connected, from, to);
                tunnels += 1;
            }
            union_find.union(index, nearest);
        }
        debug!(pass = passes, remaining = union_find.count(), "stitching pass done");
    }

    debug!(
        sections = sections.len(),
        passes, tunnels, "connected orphaned sections"
    );
    connected
}

/// Index of the closest section not yet connected to `index`
///
/// Distance is the Manhattan distance between bounding-box centers. Ties keep the
/// lowest index. Returns `None` once everything is connected to `index`.
pub fn find_nearest_section(
    sections: &[MapSection],
    index: usize,
    union_find: &mut UnionFind,
) -> Option<usize> {
    let start = sections.get(index)?;
    let mut closest = None;
    let mut best = usize::MAX;

    for (candidate, section) in sections.iter().enumerate() {
        if candidate == index || union_find.connected(candidate, index) {
            continue;
        }
        let Some(distance) = distance_between(start, section) else {
            continue;
        };
        if distance < best {
            best = distance;
            closest = Some(candidate);
        }
    }

    closest
}

/// Manhattan distance between the bounding-box centers of two sections
pub fn distance_between(start: &MapSection, destination: &MapSection) -> Option<usize> {
    let (start_x, start_y) = start.center()?;
    let (end_x, end_y) = destination.center()?;
    Some(start_x.abs_diff(end_x) + start_y.abs_diff(end_y))
}

/// Position a tunnel to or from `section` starts at
///
/// The bounding-box center when it belongs to the section, otherwise the member
/// nearest to it, preferring interior cells. Wall sections never anchor on the
/// border so stitching cannot punch holes in the outer wall.
pub fn tunnel_endpoint<M: Map>(map: &M, section: &MapSection) -> Option<(usize, usize)> {
    let (center_x, center_y) = section.center()?;

    let (x, y) = if section.contains(center_x, center_y) {
        (center_x, center_y)
    } else {
        let distance = |cell: &&Cell| cell.x.abs_diff(center_x) + cell.y.abs_diff(center_y);
        let nearest = section
            .cells()
            .iter()
            .filter(|cell| !map.is_border_cell(cell.x, cell.y))
            .min_by_key(distance)
            .or_else(|| section.cells().iter().min_by_key(distance))?;
        (nearest.x, nearest.y)
    };

    if section.is_walkable() == Some(false) && map.is_border_cell(x, y) {
        return Some(inset(map, x, y));
    }
    Some((x, y))
}

/// Move a position one step off the border when the map has an interior
fn inset<M: Map>(map: &M, x: usize, y: usize) -> (usize, usize) {
    let clamp = |value: usize, extent: usize| {
        if extent < 3 {
            value
        } else {
            value.clamp(1, extent - 2)
        }
    };
    (clamp(x, map.width()), clamp(y, map.height()))
}

/// Open the straight line between two positions
///
/// Diagonal steps also open the corner cell beside the new cell on the previous
/// column, so the tunnel stays passable without diagonal moves.
fn carve_tunnel<M: Map>(map: &M, target: &mut M, from: (usize, usize), to: (usize, usize)) {
    let mut previous: Option<Cell> = None;

    for cell in map.cells_along_line(from.0, from.1, to.0, to.1) {
        target.set_cell_properties(cell.x, cell.y, true, true);
        if let Some(prev) = previous.filter(|prev| prev.x != cell.x && prev.y != cell.y) {
            target.set_cell_properties(prev.x, cell.y, true, true);
        }
        previous = Some(cell);
    }
}
