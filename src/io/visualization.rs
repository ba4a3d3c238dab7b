//! Snapshot capture and GIF assembly for the evolution history

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{EvolutionError, Result, configuration_error};
use image::{Frame, Rgba, RgbaImage};
use ndarray::Array3;

/// Captures best-individual snapshots for animated playback
///
/// Records each snapshot canvas as a frame during the run so the animation
/// can be encoded without re-reading saved files afterwards.
pub struct SnapshotCapture {
    frames: Vec<RgbaImage>,
}

impl SnapshotCapture {
    /// Create an empty capture sized for the expected snapshot count
    pub fn new(expected_snapshots: usize) -> Self {
        Self {
            frames: Vec::with_capacity(expected_snapshots),
        }
    }

    /// Record a snapshot canvas as an animation frame
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch error if the canvas is not three-channel
    pub fn record_snapshot(&mut self, canvas: &Array3<u8>) -> Result<()> {
        let (height, width, channels) = canvas.dim();
        if channels != 3 {
            return Err(EvolutionError::DimensionMismatch {
                expected: (height, width, 3),
                actual: canvas.dim(),
            });
        }

        let mut img = RgbaImage::new(width as u32, height as u32);
        for y in 0..height {
            for x in 0..width {
                let pixel = Rgba([
                    canvas.get((y, x, 0)).copied().unwrap_or(0),
                    canvas.get((y, x, 1)).copied().unwrap_or(0),
                    canvas.get((y, x, 2)).copied().unwrap_or(0),
                    255,
                ]);
                img.put_pixel(x as u32, y as u32, pixel);
            }
        }
        self.frames.push(img);
        Ok(())
    }

    /// Number of recorded frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Encode all recorded frames as an animated GIF
    ///
    /// Frame delays shorter than viewers reliably support are clamped, and
    /// the final frame is held longer for visibility.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No snapshots were recorded
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(configuration_error(
                "snapshots",
                &0,
                &"no snapshots recorded for animation",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);

        let mut frames: Vec<Frame> = self
            .frames
            .iter()
            .map(|img| {
                Frame::from_parts(
                    img.clone(),
                    0,
                    0,
                    image::Delay::from_numer_denom_ms(effective_delay_ms, 1),
                )
            })
            .collect();

        // Final frame displays longer for better visibility
        if let Some(last) = self.frames.last() {
            frames.push(Frame::from_parts(
                last.clone(),
                0,
                0,
                image::Delay::from_numer_denom_ms(effective_delay_ms * 25, 1),
            ));
        }

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| EvolutionError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| EvolutionError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| EvolutionError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }
}
