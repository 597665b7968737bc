//! Tests for flood fill partitioning into floor and wall sections

#[cfg(test)]
mod tests {
    use mapcarve::algorithm::automaton::randomly_fill_cells;
    use mapcarve::algorithm::flood_fill::{FloodFillAnalyzer, map_sections};
    use mapcarve::math::random::seeded;
    use mapcarve::spatial::grid::{Grid, Map};

    fn parse(text: &str) -> Grid {
        Grid::parse(text).unwrap_or_default()
    }

    // Tests floor and wall regions are both reported in row-major order
    // Verified by skipping non-walkable seeds
    #[test]
    fn test_sections_include_walls() {
        let grid = parse(
            "#####\n\
             #.#.#\n\
             #####",
        );

        let sections = map_sections(&grid);

        let sizes: Vec<(usize, Option<bool>)> = sections
            .iter()
            .map(|s| (s.len(), s.is_walkable()))
            .collect();
        assert_eq!(sizes, vec![(13, Some(false)), (1, Some(true)), (1, Some(true))]);
        assert!(sections.get(1).is_some_and(|s| s.contains(1, 1)));
        assert!(sections.get(2).is_some_and(|s| s.contains(3, 1)));
    }

    // Tests diagonal contact does not join sections
    // Verified by using 8-directional neighbors
    #[test]
    fn test_diagonal_cells_are_separate() {
        let grid = parse(
            ".#\n\
             #.",
        );

        assert_eq!(map_sections(&grid).len(), 4);
    }

    // Tests a uniform map is a single section with full bounds
    // Verified by resetting visited cells between seeds
    #[test]
    fn test_uniform_map_single_section() {
        let grid = Grid::new(6, 4);

        let sections = FloodFillAnalyzer::new(&grid).map_sections();

        assert_eq!(sections.len(), 1);
        let section = sections.first();
        assert_eq!(section.map(|s| s.len()), Some(24));
        assert_eq!(section.and_then(|s| s.center()), Some((3, 2)));
    }

    // Tests empty maps yield no sections
    // Verified by emitting an empty section
    #[test]
    fn test_empty_map() {
        assert!(map_sections(&Grid::default()).is_empty());
    }

    // Tests sections partition the map and respect 4-adjacency
    // Verified by visiting neighbors of different walkable state
    #[test]
    fn test_random_map_partition() {
        let grid = randomly_fill_cells(&Grid::new(30, 20), 50, &mut seeded(5));
        let sections = map_sections(&grid);

        let mut owner = vec![usize::MAX; grid.width() * grid.height()];
        for (id, section) in sections.iter().enumerate() {
            assert!(!section.is_empty());
            for cell in section.cells() {
                assert_eq!(Some(cell.is_walkable), section.is_walkable());
                if let Some(slot) = owner.get_mut(cell.index(grid.width())) {
                    assert_eq!(*slot, usize::MAX, "cell assigned twice");
                    *slot = id;
                }
            }
        }
        assert!(owner.iter().all(|&id| id != usize::MAX));

        for cell in grid.cells() {
            for (nx, ny) in [(cell.x + 1, cell.y), (cell.x, cell.y + 1)] {
                let same_state = grid.cell(nx, ny).filter(|n| n.is_walkable == cell.is_walkable);
                if let Some(neighbor) = same_state {
                    assert_eq!(
                        owner.get(cell.index(grid.width())),
                        owner.get(neighbor.index(grid.width()))
                    );
                }
            }
        }
    }

    // Tests discovery order starts from the first cell of each section
    // Verified by seeding traversal from the last cell
    #[test]
    fn test_section_starts_at_first_cell() {
        let grid = parse(
            "#..\n\
             #.#\n\
             ###",
        );

        let sections = map_sections(&grid);

        let firsts: Vec<(usize, usize)> = sections
            .iter()
            .filter_map(|s| s.cells().first().map(|c| (c.x, c.y)))
            .collect();
        assert_eq!(firsts, vec![(0, 0), (1, 0)]);
    }
}
