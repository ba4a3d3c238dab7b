//! Image loading and PNG export for targets, tile libraries, and snapshots

use crate::io::error::{EvolutionError, Result, configuration_error};
use crate::spatial::tiles::{Tile, TileLibrary};
use image::RgbImage;
use ndarray::Array3;
use std::path::{Path, PathBuf};

/// Decode an RGB image file into a (height, width, 3) pixel array
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn load_target_image(path: &Path) -> Result<Array3<u8>> {
    decode_rgb(path)
}

fn decode_rgb(path: &Path) -> Result<Array3<u8>> {
    let img = image::open(path)
        .map_err(|source| EvolutionError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgb8();

    canvas_from_rgb(img)
}

/// Load every PNG in a directory into an ordered tile library
///
/// Files are sorted by name so tile indices stay stable across runs.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be read
/// - Any tile file cannot be decoded
/// - The directory yields no tiles or tiles of inconsistent dimensions
pub fn load_tile_library(directory: &Path) -> Result<TileLibrary> {
    let entries = std::fs::read_dir(directory).map_err(|source| EvolutionError::FileSystem {
        path: directory.to_path_buf(),
        operation: "read directory",
        source,
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| EvolutionError::FileSystem {
                path: directory.to_path_buf(),
                operation: "read directory entry",
                source,
            })?
            .path();
        if path.extension().and_then(|s| s.to_str()) == Some("png") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut tiles: Vec<Tile> = Vec::with_capacity(paths.len());
    for path in &paths {
        tiles.push(decode_rgb(path)?);
    }

    TileLibrary::new(tiles)
}

/// Save a rendered canvas as a PNG file
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns an error if the canvas is not three-channel, the parent directory
/// cannot be created, or encoding fails
pub fn export_canvas_as_png(canvas: &Array3<u8>, output_path: &Path) -> Result<()> {
    let img = rgb_from_canvas(canvas)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| EvolutionError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    img.save(output_path).map_err(|source| EvolutionError::ImageExport {
        path: output_path.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Convert a decoded RGB buffer into a (height, width, 3) array
///
/// # Errors
///
/// Returns a configuration error if the buffer layout is inconsistent, which
/// a freshly decoded image never is
pub fn canvas_from_rgb(img: RgbImage) -> Result<Array3<u8>> {
    let (width, height) = img.dimensions();
    Array3::from_shape_vec((height as usize, width as usize, 3), img.into_raw()).map_err(|e| {
        configuration_error("decoded_image", &format!("{width}x{height}"), &e)
    })
}

/// Convert a (height, width, 3) array into an RGB buffer for encoding
///
/// # Errors
///
/// Returns a dimension mismatch error if the array is not three-channel
pub fn rgb_from_canvas(canvas: &Array3<u8>) -> Result<RgbImage> {
    let (height, width, channels) = canvas.dim();
    if channels != 3 {
        return Err(EvolutionError::DimensionMismatch {
            expected: (height, width, 3),
            actual: canvas.dim(),
        });
    }

    let raw: Vec<u8> = canvas.iter().copied().collect();
    RgbImage::from_raw(width as u32, height as u32, raw).ok_or_else(|| {
        configuration_error(
            "canvas",
            &format!("{height}x{width}"),
            &"canvas does not fit an RGB buffer",
        )
    })
}
