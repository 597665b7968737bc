//! Stage capture and GIF generation for generation visualization

use std::path::Path;

use image::imageops::{FilterType, resize};
use image::{Delay, Frame, RgbaImage};

use crate::io::configuration::GIF_FINAL_FRAME_HOLD;
use crate::io::error::{MapError, Result, invalid_parameter};
use crate::io::image::{canvas_size, render_map};
use crate::spatial::grid::Map;
use crate::strategy::GenerationStage;

/// One rendered intermediate map
#[derive(Debug, Clone)]
pub struct CapturedStage {
    /// Pipeline stage that produced the map
    pub stage: GenerationStage,
    /// Map rendered at its own size
    pub image: RgbaImage,
}

/// Records rendered stages reported by a strategy
///
/// Pass [`StageCapture::record`] as the observer of
/// [`MapCreationStrategy::create_map_observed`](crate::strategy::MapCreationStrategy::create_map_observed).
#[derive(Debug, Clone, Default)]
pub struct StageCapture {
    frames: Vec<CapturedStage>,
}

impl StageCapture {
    /// Create an empty capture
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Render and store a stage
    pub fn record<M: Map>(&mut self, stage: GenerationStage, map: &M) {
        let (width, height) = canvas_size(map);
        self.frames.push(CapturedStage {
            stage,
            image: render_map(map, width, height),
        });
    }

    /// Captured stages in recording order
    pub fn frames(&self) -> &[CapturedStage] {
        &self.frames
    }

    /// Returns the number of captured stages
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured stages as an animated GIF
    ///
    /// Frames are stretched to the largest captured size so half-scale stages line
    /// up with the final map. The last frame is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No stages were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        let width = self.frames.iter().map(|f| f.image.width()).max().unwrap_or(0);
        let height = self.frames.iter().map(|f| f.image.height()).max().unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "frames",
                &self.frames.len(),
                &"no non-empty stages captured for visualization",
            ));
        }

        let last = self.frames.len().saturating_sub(1);
        let frames: Vec<Frame> = self
            .frames
            .iter()
            .enumerate()
            .map(|(index, captured)| {
                let delay = if index == last {
                    frame_delay_ms * GIF_FINAL_FRAME_HOLD
                } else {
                    frame_delay_ms
                };
                let buffer = if captured.image.dimensions() == (width, height) {
                    captured.image.clone()
                } else {
                    resize(&captured.image, width, height, FilterType::Nearest)
                };
                Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(delay, 1))
            })
            .collect();

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| MapError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| MapError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| MapError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}
