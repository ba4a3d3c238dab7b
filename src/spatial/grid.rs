//! Grid geometry mapping linear gene indices to pixel rectangles
//!
//! The grid is a pure, stateless mapping: cell `i` of a `rows`x`cols` layout
//! covers a fixed tile-sized rectangle of the output canvas. The final cell on
//! each axis is clamped one pixel short of flush placement so a tile can never
//! extend past the canvas regardless of integer rounding.

use crate::io::error::{EvolutionError, Result, configuration_error};

/// Pure mapping from linear cell indices to top-left pixel coordinates
///
/// Cells are laid out row-major. Per axis with `n` cells of size `s`, cell `i`
/// starts at `i*s` except the final cell, which is clamped to `i*s - 1` and
/// overlaps the preceding cell's last pixel row/column. The clamp leaves the
/// canvas's final pixel row/column unpainted; it stays at the zeroed
/// background. Changing this to flush placement changes every rendered output
/// and must not be done silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    rows: usize,
    cols: usize,
    tile_height: usize,
    tile_width: usize,
}

impl TileGrid {
    /// Create a grid with the given cell layout and tile footprint
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any dimension is zero
    pub fn new(rows: usize, cols: usize, tile_height: usize, tile_width: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(configuration_error(
                "grid_dimensions",
                &format!("{rows}x{cols}"),
                &"grid must have at least one row and column",
            ));
        }
        if tile_height == 0 || tile_width == 0 {
            return Err(configuration_error(
                "tile_size",
                &format!("{tile_height}x{tile_width}"),
                &"tiles must have non-zero dimensions",
            ));
        }

        Ok(Self {
            rows,
            cols,
            tile_height,
            tile_width,
        })
    }

    /// Derive the grid covering a target canvas with the given tile footprint
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the canvas is not an exact multiple of
    /// the tile size on either axis
    pub fn from_canvas(
        canvas_height: usize,
        canvas_width: usize,
        tile_height: usize,
        tile_width: usize,
    ) -> Result<Self> {
        if tile_height == 0
            || tile_width == 0
            || canvas_height % tile_height != 0
            || canvas_width % tile_width != 0
        {
            return Err(configuration_error(
                "target_image",
                &format!("{canvas_height}x{canvas_width}"),
                &format!("canvas must be an exact multiple of the {tile_height}x{tile_width} tile size"),
            ));
        }

        Self::new(
            canvas_height / tile_height,
            canvas_width / tile_width,
            tile_height,
            tile_width,
        )
    }

    /// Number of grid rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Tile footprint as (height, width)
    pub const fn tile_size(&self) -> (usize, usize) {
        (self.tile_height, self.tile_width)
    }

    /// Total number of cells, which is also the genome length
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Output canvas dimensions as (height, width)
    pub const fn rendered_size(&self) -> (usize, usize) {
        (self.rows * self.tile_height, self.cols * self.tile_width)
    }

    /// Top-left pixel coordinate of a cell as (y, x)
    ///
    /// # Errors
    ///
    /// Returns an invalid index error if `index` is outside `[0, cell_count)`
    pub fn cell_origin(&self, index: usize) -> Result<(usize, usize)> {
        if index >= self.cell_count() {
            return Err(EvolutionError::InvalidTileIndex {
                index,
                tile_count: self.cell_count(),
            });
        }

        let row = index / self.cols;
        let col = index % self.cols;
        Ok((
            clamped_axis_position(row, self.rows, self.tile_height),
            clamped_axis_position(col, self.cols, self.tile_width),
        ))
    }
}

// Final cell starts one pixel early; saturation covers single-cell axes.
const fn clamped_axis_position(index: usize, cell_count: usize, cell_size: usize) -> usize {
    if index + 1 == cell_count {
        (index * cell_size).saturating_sub(1)
    } else {
        index * cell_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_cells_are_flush() {
        let grid = TileGrid::new(32, 32, 16, 16).unwrap_or_else(|_| unreachable!());
        assert_eq!(grid.cell_origin(0).ok(), Some((0, 0)));
        assert_eq!(grid.cell_origin(1).ok(), Some((0, 16)));
        assert_eq!(grid.cell_origin(33).ok(), Some((16, 16)));
    }

    #[test]
    fn test_final_row_and_column_are_clamped() {
        // 2x2 grid of 16px tiles: the last cell starts at 15, not 16
        let grid = TileGrid::new(2, 2, 16, 16).unwrap_or_else(|_| unreachable!());
        assert_eq!(grid.cell_origin(1).ok(), Some((0, 15)));
        assert_eq!(grid.cell_origin(2).ok(), Some((15, 0)));
        assert_eq!(grid.cell_origin(3).ok(), Some((15, 15)));
    }

    #[test]
    fn test_single_cell_grid_clamps_to_origin() {
        let grid = TileGrid::new(1, 1, 16, 16).unwrap_or_else(|_| unreachable!());
        assert_eq!(grid.cell_origin(0).ok(), Some((0, 0)));
    }

    #[test]
    fn test_rendered_size_matches_layout() {
        let grid = TileGrid::new(32, 32, 16, 16).unwrap_or_else(|_| unreachable!());
        assert_eq!(grid.rendered_size(), (512, 512));
        assert_eq!(grid.cell_count(), 1024);
    }

    #[test]
    fn test_out_of_range_cell_is_rejected() {
        let grid = TileGrid::new(2, 2, 16, 16).unwrap_or_else(|_| unreachable!());
        assert!(grid.cell_origin(4).is_err());
    }

    #[test]
    fn test_canvas_must_divide_evenly() {
        assert!(TileGrid::from_canvas(512, 512, 16, 16).is_ok());
        assert!(TileGrid::from_canvas(500, 512, 16, 16).is_err());
        assert!(TileGrid::from_canvas(512, 512, 0, 16).is_err());
    }
}
