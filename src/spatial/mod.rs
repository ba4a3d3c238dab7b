//! Spatial data structures and mosaic rendering
//!
//! This module contains the geometry side of the system:
//! - Grid layout mapping gene indices to pixel rectangles
//! - Immutable tile libraries
//! - Deterministic canvas rendering

/// Grid geometry and coordinate clamping
pub mod grid;
/// Mosaic rendering from genomes
pub mod render;
/// Tile data structures and the tile library
pub mod tiles;

pub use grid::TileGrid;
pub use tiles::TileLibrary;
