//! Immutable tile library addressed by stable integer indices

use crate::io::error::{EvolutionError, Result, configuration_error};
use ndarray::Array3;

/// A single RGB8 tile stored as a (height, width, 3) pixel array
pub type Tile = Array3<u8>;

/// Ordered, immutable collection of identically sized tiles
///
/// A genome gene is an index into this library; every valid gene lies in
/// `[0, len)`. Tiles are never mutated after construction.
#[derive(Debug, Clone)]
pub struct TileLibrary {
    tiles: Vec<Tile>,
    tile_height: usize,
    tile_width: usize,
}

impl TileLibrary {
    /// Build a library from decoded tile pixel arrays
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no tiles are supplied, and a dimension
    /// mismatch error if any tile disagrees with the first tile's shape or is
    /// not three-channel
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        let Some(first) = tiles.first() else {
            return Err(configuration_error(
                "tile_library",
                &"<empty>",
                &"at least one tile is required",
            ));
        };

        let (tile_height, tile_width, channels) = first.dim();
        if channels != 3 {
            return Err(EvolutionError::DimensionMismatch {
                expected: (tile_height, tile_width, 3),
                actual: first.dim(),
            });
        }

        for tile in &tiles {
            if tile.dim() != (tile_height, tile_width, 3) {
                return Err(EvolutionError::DimensionMismatch {
                    expected: (tile_height, tile_width, 3),
                    actual: tile.dim(),
                });
            }
        }

        Ok(Self {
            tiles,
            tile_height,
            tile_width,
        })
    }

    /// Number of tiles in the library
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the library holds no tiles (never true for a constructed library)
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Shared tile footprint as (height, width)
    pub const fn tile_size(&self) -> (usize, usize) {
        (self.tile_height, self.tile_width)
    }

    /// Look up a tile by index
    ///
    /// # Errors
    ///
    /// Returns an invalid tile index error for out-of-range indices
    pub fn tile(&self, index: usize) -> Result<&Tile> {
        self.tiles.get(index).ok_or(EvolutionError::InvalidTileIndex {
            index,
            tile_count: self.tiles.len(),
        })
    }
}
