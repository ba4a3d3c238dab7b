//! Deterministic mosaic rendering from a genome and tile library

use crate::algorithm::genome::Genome;
use crate::io::error::{EvolutionError, Result};
use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::TileLibrary;
use ndarray::{Array3, s};

/// Paint a full canvas from a genome
///
/// Allocates a zeroed canvas and copies each cell's tile into its rectangle in
/// row-major order, following the grid's clamped coordinate rule. Pure function
/// of its inputs; rendering the same genome twice yields identical pixels.
///
/// # Errors
///
/// Returns an error if:
/// - The library's tile footprint disagrees with the grid's
/// - The genome length disagrees with the grid's cell count
/// - Any gene indexes past the end of the library
pub fn render(genome: &Genome, library: &TileLibrary, grid: &TileGrid) -> Result<Array3<u8>> {
    let (tile_height, tile_width) = grid.tile_size();
    if library.tile_size() != (tile_height, tile_width) {
        return Err(EvolutionError::DimensionMismatch {
            expected: (tile_height, tile_width, 3),
            actual: (library.tile_size().0, library.tile_size().1, 3),
        });
    }
    if genome.len() != grid.cell_count() {
        return Err(EvolutionError::GenomeLengthMismatch {
            left: genome.len(),
            right: grid.cell_count(),
        });
    }

    let (canvas_height, canvas_width) = grid.rendered_size();
    let mut canvas = Array3::<u8>::zeros((canvas_height, canvas_width, 3));

    for (index, gene) in genome.genes().iter().enumerate() {
        let tile = library.tile(*gene)?;
        let (y, x) = grid.cell_origin(index)?;
        canvas
            .slice_mut(s![y..y + tile_height, x..x + tile_width, ..])
            .assign(tile);
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::tiles::Tile;

    fn two_tile_library() -> TileLibrary {
        let black = Tile::zeros((4, 4, 3));
        let white = Tile::from_elem((4, 4, 3), 255);
        TileLibrary::new(vec![black, white]).unwrap_or_else(|_| unreachable!())
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let library = two_tile_library();
        let grid = TileGrid::new(2, 2, 4, 4).unwrap_or_else(|_| unreachable!());
        let genome = Genome::from_genes(vec![0, 1, 1, 0]);

        let first = render(&genome, &library, &grid);
        let second = render(&genome, &library, &grid);
        assert!(first.is_ok());
        assert_eq!(first.ok(), second.ok());
    }

    #[test]
    fn test_clamped_cell_overlaps_and_leaves_background() {
        let library = two_tile_library();
        let grid = TileGrid::new(2, 2, 4, 4).unwrap_or_else(|_| unreachable!());
        // All-white mosaic on a 8x8 canvas
        let genome = Genome::from_genes(vec![1, 1, 1, 1]);

        let canvas = render(&genome, &library, &grid).unwrap_or_else(|_| unreachable!());
        assert_eq!(canvas.dim(), (8, 8, 3));

        // Clamped final column tile starts at x=3, covering 3..=6
        assert_eq!(canvas.get((0, 6, 0)).copied(), Some(255));
        // Final pixel column is never painted
        assert_eq!(canvas.get((0, 7, 0)).copied(), Some(0));
        assert_eq!(canvas.get((7, 0, 0)).copied(), Some(0));
    }

    #[test]
    fn test_gene_out_of_range_is_rejected() {
        let library = two_tile_library();
        let grid = TileGrid::new(2, 2, 4, 4).unwrap_or_else(|_| unreachable!());
        let genome = Genome::from_genes(vec![0, 1, 2, 0]);
        assert!(render(&genome, &library, &grid).is_err());
    }

    #[test]
    fn test_genome_length_must_match_grid() {
        let library = two_tile_library();
        let grid = TileGrid::new(2, 2, 4, 4).unwrap_or_else(|_| unreachable!());
        let genome = Genome::from_genes(vec![0, 1]);
        assert!(render(&genome, &library, &grid).is_err());
    }
}
