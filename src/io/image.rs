//! PNG export of generated maps

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::io::configuration::{FLOOR_COLOR, PIXEL_SCALE, WALL_COLOR};
use crate::io::error::{MapError, Result, invalid_parameter};
use crate::spatial::grid::Map;

/// Render a map into an image of `width` x `height` pixels
///
/// Each pixel samples the nearest cell, so maps of different sizes can be drawn
/// onto the same canvas.
pub fn render_map<M: Map>(map: &M, width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, Rgba(WALL_COLOR));
    if map.width() == 0 || map.height() == 0 {
        return img;
    }

    for (px, py, pixel) in img.enumerate_pixels_mut() {
        let x = px as usize * map.width() / width as usize;
        let y = py as usize * map.height() / height as usize;
        if map.cell(x, y).is_some_and(|cell| cell.is_walkable) {
            *pixel = Rgba(FLOOR_COLOR);
        }
    }

    img
}

/// Pixel dimensions of a map drawn at [`PIXEL_SCALE`]
pub fn canvas_size<M: Map>(map: &M) -> (u32, u32) {
    (
        map.width() as u32 * PIXEL_SCALE,
        map.height() as u32 * PIXEL_SCALE,
    )
}

/// Export a map as a PNG image with one square per cell
///
/// # Errors
///
/// Returns an error if:
/// - The map has no cells
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_map_as_png<M: Map>(map: &M, output_path: &Path) -> Result<()> {
    if map.width() == 0 || map.height() == 0 {
        return Err(invalid_parameter(
            "map",
            &format!("{}x{}", map.width(), map.height()),
            &"cannot export an empty map",
        ));
    }

    let (width, height) = canvas_size(map);
    let img = render_map(map, width, height);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MapError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| MapError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
