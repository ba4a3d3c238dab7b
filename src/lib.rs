//! Genetic algorithm that approximates a target image with a mosaic of small tiles
//!
//! A population of candidate mosaics evolves over a fixed number of generations.
//! Each candidate is a genome of tile indices laid out on a grid; fitness is the
//! mean squared pixel error against the target. Selection keeps the fittest
//! fraction untouched, recombines the next band from the fittest pairs, and
//! mutates the remainder.

#![deny(unsafe_code)]

/// Evolutionary engine: genomes, operators, fitness, and the generation loop
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grid geometry, tile libraries, and mosaic rendering
pub mod spatial;

pub use io::error::{EvolutionError, Result};
