//! Evolutionary engine for tile mosaic approximation
//!
//! The engine is split into:
//! - Genome, individual, and population data structures
//! - Crossover and mutation operators
//! - The fitness evaluator
//! - The generation loop and selection policy

/// Uniform crossover operator
pub mod crossover;
/// Generation loop, selection bands, and run configuration
pub mod executor;
/// Mean squared error fitness evaluation
pub mod fitness;
/// Genome, individual, and population structures
pub mod genome;
/// In-place point mutation operator
pub mod mutation;

pub use executor::{EvolutionConfig, SelectionBands, TileEvolution};
pub use genome::{Genome, Individual, Population};
