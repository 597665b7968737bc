//! Tests for map rendering and PNG export

#[cfg(test)]
mod tests {
    use mapcarve::io::configuration::{FLOOR_COLOR, PIXEL_SCALE, WALL_COLOR};
    use mapcarve::io::image::{canvas_size, export_map_as_png, render_map};
    use mapcarve::spatial::grid::Grid;
    use tempfile::TempDir;

    fn parse(text: &str) -> Grid {
        Grid::parse(text).unwrap_or_default()
    }

    // Tests each cell becomes a square block of its color
    // Verified by sampling rows as columns
    #[test]
    fn test_render_map_colors() {
        let grid = parse(".#\n##");

        let image = render_map(&grid, 4, 4);

        assert_eq!(image.get_pixel(0, 0).0, FLOOR_COLOR);
        assert_eq!(image.get_pixel(1, 1).0, FLOOR_COLOR);
        assert_eq!(image.get_pixel(2, 0).0, WALL_COLOR);
        assert_eq!(image.get_pixel(0, 2).0, WALL_COLOR);
        assert_eq!(image.get_pixel(3, 3).0, WALL_COLOR);
    }

    // Tests smaller maps stretch over a larger canvas
    // Verified by clamping samples to the map instead of scaling
    #[test]
    fn test_render_map_stretches() {
        let grid = parse("#.");

        let image = render_map(&grid, 8, 2);

        assert_eq!(image.get_pixel(3, 1).0, WALL_COLOR);
        assert_eq!(image.get_pixel(4, 0).0, FLOOR_COLOR);
    }

    // Tests canvas size scales with the map
    // Verified by swapping width and height
    #[test]
    fn test_canvas_size() {
        let grid = Grid::new(5, 3);

        assert_eq!(canvas_size(&grid), (5 * PIXEL_SCALE, 3 * PIXEL_SCALE));
    }

    // Tests PNG export writes a decodable image of the canvas size
    // Verified by saving the unscaled map
    #[test]
    fn test_export_png() {
        let dir = TempDir::new();
        assert!(dir.is_ok());
        let Ok(dir) = dir else {
            return;
        };
        let path = dir.path().join("nested").join("map.png");
        let grid = parse("#.#\n...\n#.#");

        let result = export_map_as_png(&grid, &path);

        assert!(result.is_ok());
        let decoded = image::open(&path).map(|img| (img.width(), img.height()));
        assert_eq!(decoded.ok(), Some((3 * PIXEL_SCALE, 3 * PIXEL_SCALE)));
    }

    // Tests empty maps cannot be exported
    // Verified by writing a zero-sized image
    #[test]
    fn test_export_empty_map_fails() {
        let dir = TempDir::new();
        assert!(dir.is_ok());
        let Ok(dir) = dir else {
            return;
        };

        let result = export_map_as_png(&Grid::default(), &dir.path().join("empty.png"));

        assert!(result.is_err());
    }
}
