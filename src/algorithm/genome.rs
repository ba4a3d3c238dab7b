//! Genome, individual, and population data structures
//!
//! A genome is a fixed-length sequence of tile indices, one per grid cell in
//! row-major order. Individuals pair a genome with its cached fitness; the
//! cache is only valid once the owner has re-rendered and re-scored after any
//! genome change. Operators never share genome storage with a parent or
//! sibling; crossover and mutation work on exclusively owned copies.

use crate::io::error::{EvolutionError, Result, configuration_error};
use rand::Rng;
use rand::rngs::StdRng;
use std::cmp::Ordering;

/// Fixed-length sequence of tile indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genome {
    genes: Vec<usize>,
}

impl Genome {
    /// Wrap an existing gene sequence
    pub const fn from_genes(genes: Vec<usize>) -> Self {
        Self { genes }
    }

    /// Draw a genome of uniformly random tile indices
    pub fn random(length: usize, tile_count: usize, rng: &mut StdRng) -> Self {
        let genes = (0..length).map(|_| rng.random_range(0..tile_count)).collect();
        Self { genes }
    }

    /// Number of genes
    pub const fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the genome holds no genes
    pub const fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// All genes in row-major cell order
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Gene at the given position, if in range
    pub fn gene(&self, index: usize) -> Option<usize> {
        self.genes.get(index).copied()
    }

    /// Overwrite the gene at the given position
    ///
    /// # Errors
    ///
    /// Returns an invalid index error if `index` is out of range
    pub fn set_gene(&mut self, index: usize, value: usize) -> Result<()> {
        let length = self.genes.len();
        let gene = self
            .genes
            .get_mut(index)
            .ok_or(EvolutionError::InvalidTileIndex {
                index,
                tile_count: length,
            })?;
        *gene = value;
        Ok(())
    }

    /// Check that every gene indexes into a library of `tile_count` tiles
    ///
    /// # Errors
    ///
    /// Returns an invalid tile index error naming the first offending gene
    pub fn validate(&self, tile_count: usize) -> Result<()> {
        match self.genes.iter().find(|&&gene| gene >= tile_count) {
            Some(&gene) => Err(EvolutionError::InvalidTileIndex {
                index: gene,
                tile_count,
            }),
            None => Ok(()),
        }
    }
}

/// A genome paired with its cached fitness (lower is better)
#[derive(Debug, Clone)]
pub struct Individual {
    genome: Genome,
    fitness: f64,
}

impl Individual {
    /// Pair a genome with an already computed fitness
    pub const fn new(genome: Genome, fitness: f64) -> Self {
        Self { genome, fitness }
    }

    /// The individual's genome
    pub const fn genome(&self) -> &Genome {
        &self.genome
    }

    /// Mutable access to the genome; the caller must re-score afterwards
    pub const fn genome_mut(&mut self) -> &mut Genome {
        &mut self.genome
    }

    /// Cached reconstruction error
    pub const fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Refresh the fitness cache after a genome change
    pub const fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// Ordered collection of individuals with fixed cardinality across the run
#[derive(Debug, Clone)]
pub struct Population {
    members: Vec<Individual>,
}

impl Population {
    /// Create a population from pre-scored individuals
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty member list
    pub fn new(members: Vec<Individual>) -> Result<Self> {
        if members.is_empty() {
            return Err(configuration_error(
                "population_size",
                &0,
                &"population must hold at least one individual",
            ));
        }
        Ok(Self { members })
    }

    /// Number of individuals
    pub const fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the population is empty (never true for a constructed population)
    pub const fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// All members in their current order
    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    /// Mutable access for in-place selection and mutation
    pub fn members_mut(&mut self) -> &mut [Individual] {
        &mut self.members
    }

    /// Stable ascending sort by cached fitness
    ///
    /// Ties break arbitrarily; fitness values are finite so the comparison
    /// never actually falls back to `Equal` for incomparable values.
    pub fn sort_by_fitness(&mut self) {
        self.members.sort_by(|a, b| {
            a.fitness
                .partial_cmp(&b.fitness)
                .unwrap_or(Ordering::Equal)
        });
    }

    /// The fittest member after the most recent sort
    pub fn best(&self) -> Option<&Individual> {
        self.members
            .iter()
            .min_by(|a, b| a.fitness.partial_cmp(&b.fitness).unwrap_or(Ordering::Equal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_random_genome_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let genome = Genome::random(1024, 28, &mut rng);
        assert_eq!(genome.len(), 1024);
        assert!(genome.validate(28).is_ok());
        assert!(genome.genes().iter().all(|&gene| gene < 28));
    }

    #[test]
    fn test_validate_rejects_out_of_range_gene() {
        let genome = Genome::from_genes(vec![0, 3, 1]);
        assert!(genome.validate(4).is_ok());
        assert!(genome.validate(3).is_err());
    }

    #[test]
    fn test_set_gene_bounds() {
        let mut genome = Genome::from_genes(vec![0, 0]);
        assert!(genome.set_gene(1, 5).is_ok());
        assert_eq!(genome.gene(1), Some(5));
        assert!(genome.set_gene(2, 0).is_err());
    }

    #[test]
    fn test_population_sorts_ascending() {
        let member = |fitness| Individual::new(Genome::from_genes(vec![0]), fitness);
        let mut population =
            Population::new(vec![member(3.0), member(1.0), member(2.0)])
                .unwrap_or_else(|_| unreachable!());

        population.sort_by_fitness();
        let order: Vec<f64> = population.members().iter().map(Individual::fitness).collect();
        for (actual, expected) in order.iter().zip([1.0, 2.0, 3.0]) {
            assert!((actual - expected).abs() < f64::EPSILON);
        }
        assert!(
            population
                .best()
                .is_some_and(|b| (b.fitness() - 1.0).abs() < f64::EPSILON)
        );
    }

    #[test]
    fn test_empty_population_is_rejected() {
        assert!(Population::new(Vec::new()).is_err());
    }
}
