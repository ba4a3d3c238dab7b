//! Generation loop with elitism, crossover, and mutation bands
//!
//! Each generation sorts the population ascending by fitness, carries the top
//! tenth forward untouched, fills the next fifth with the best offspring bred
//! from all ordered pairs of the fittest fifth, and mutates the remaining
//! bulk in place. Generations are strictly sequential; a generation's input
//! is the previous generation's fully sorted, fully re-scored output.

use crate::algorithm::crossover::uniform_crossover;
use crate::algorithm::fitness::mean_squared_error;
use crate::algorithm::genome::{Genome, Individual, Population};
use crate::algorithm::mutation::point_mutation;
use crate::io::error::{Result, configuration_error};
use crate::spatial::grid::TileGrid;
use crate::spatial::render::render;
use crate::spatial::tiles::TileLibrary;
use ndarray::Array3;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cmp::Ordering;

/// Run parameters for the evolution loop
#[derive(Clone, Copy, Debug)]
pub struct EvolutionConfig {
    /// Number of individuals, fixed across the whole run
    pub population_size: usize,
    /// Number of generations to evolve
    pub generations: usize,
    /// Seed for the run's single pseudorandom source
    pub seed: u64,
}

/// Band boundaries over a freshly sorted population
///
/// Boundaries are computed once via cumulative floors of `0.1*P` and `0.3*P`,
/// so the three bands partition every population size without gaps or
/// overlaps. The crossover parent pool is the fittest `floor(0.2*P)`
/// individuals, which spans the elites and the start of the crossover band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionBands {
    elite_end: usize,
    crossover_end: usize,
    parent_pool: usize,
    population_size: usize,
}

impl SelectionBands {
    /// Compute band boundaries for a population size
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the parent pool holds fewer than
    /// two individuals, since no ordered crossover pair exists
    pub fn for_population(population_size: usize) -> Result<Self> {
        let elite_end = population_size / 10;
        let parent_pool = population_size * 2 / 10;

        if parent_pool < 2 {
            return Err(configuration_error(
                "population_size",
                &population_size,
                &"the fittest 20% must hold at least two crossover parents",
            ));
        }

        // Cap the band at the ordered pair count so offspring always fill it;
        // any spillover slot joins the mutation band below.
        let floor_width = population_size * 3 / 10 - elite_end;
        let crossover_end = elite_end + floor_width.min(parent_pool * (parent_pool - 1));

        Ok(Self {
            elite_end,
            crossover_end,
            parent_pool,
            population_size,
        })
    }

    /// End of the untouched elite band (exclusive)
    pub const fn elite_end(&self) -> usize {
        self.elite_end
    }

    /// End of the crossover band (exclusive); the mutation band runs from here
    pub const fn crossover_end(&self) -> usize {
        self.crossover_end
    }

    /// Number of offspring slots in the crossover band
    pub const fn crossover_band_width(&self) -> usize {
        self.crossover_end - self.elite_end
    }

    /// Number of individuals mutated in place every generation
    pub const fn mutation_band_width(&self) -> usize {
        self.population_size - self.crossover_end
    }

    /// Number of parents drawn from the top of the sorted population
    pub const fn parent_pool(&self) -> usize {
        self.parent_pool
    }

    /// Number of ordered parent pairs evaluated per generation
    pub const fn candidate_pair_count(&self) -> usize {
        self.parent_pool * (self.parent_pool - 1)
    }
}

/// Evolution executor owning the population, tile library, and target image
///
/// All state is owned exclusively for the run's duration. The loop runs a
/// fixed number of generations with no convergence-based early exit.
pub struct TileEvolution {
    config: EvolutionConfig,
    bands: SelectionBands,
    grid: TileGrid,
    library: TileLibrary,
    target: Array3<u8>,
    population: Population,
    rng: StdRng,
    generation: usize,
}

impl TileEvolution {
    /// Build an executor with a randomly initialized, pre-scored population
    ///
    /// The grid is derived from the target canvas and the library's tile
    /// footprint; genome length equals the grid's cell count.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population size is zero or yields a crossover pool under two
    /// - The target canvas is not an exact multiple of the tile size
    /// - Initial rendering or scoring fails
    pub fn new(
        target: Array3<u8>,
        library: TileLibrary,
        config: EvolutionConfig,
    ) -> Result<Self> {
        if config.population_size == 0 {
            return Err(configuration_error(
                "population_size",
                &0,
                &"population must hold at least one individual",
            ));
        }

        let bands = SelectionBands::for_population(config.population_size)?;

        let (canvas_height, canvas_width, channels) = target.dim();
        if channels != 3 {
            return Err(configuration_error(
                "target_image",
                &format!("{channels} channels"),
                &"target image must be three-channel RGB",
            ));
        }
        let (tile_height, tile_width) = library.tile_size();
        let grid = TileGrid::from_canvas(canvas_height, canvas_width, tile_height, tile_width)?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut members = Vec::with_capacity(config.population_size);
        for _ in 0..config.population_size {
            let genome = Genome::random(grid.cell_count(), library.len(), &mut rng);
            let fitness = score(&genome, &library, &grid, &target)?;
            members.push(Individual::new(genome, fitness));
        }
        let population = Population::new(members)?;

        Ok(Self {
            config,
            bands,
            grid,
            library,
            target,
            population,
            rng,
            generation: 0,
        })
    }

    /// Run one full generation and return the best fitness found so far
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or scoring any child or mutant fails;
    /// randomness-driven draws never themselves error
    pub fn execute_generation(&mut self) -> Result<f64> {
        self.population.sort_by_fitness();

        self.breed_crossover_band()?;
        self.mutate_remainder()?;

        self.generation += 1;
        Ok(self
            .population
            .best()
            .map_or(f64::INFINITY, Individual::fitness))
    }

    /// Breed offspring from all ordered parent pairs and fill the band
    fn breed_crossover_band(&mut self) -> Result<()> {
        let pool = self.bands.parent_pool();
        let parents: Vec<Genome> = self
            .population
            .members()
            .iter()
            .take(pool)
            .map(|member| member.genome().clone())
            .collect();

        let mut offspring = Vec::with_capacity(self.bands.candidate_pair_count());
        for (k, parent_a) in parents.iter().enumerate() {
            for (m, parent_b) in parents.iter().enumerate() {
                if k == m {
                    continue;
                }
                let child = uniform_crossover(parent_a, parent_b, &mut self.rng)?;
                let fitness = score(&child, &self.library, &self.grid, &self.target)?;
                offspring.push(Individual::new(child, fitness));
            }
        }

        offspring.sort_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(Ordering::Equal)
        });

        let band_start = self.bands.elite_end();
        let band_width = self.bands.crossover_band_width();
        for (slot, child) in self
            .population
            .members_mut()
            .iter_mut()
            .skip(band_start)
            .take(band_width)
            .zip(offspring)
        {
            *slot = child;
        }

        Ok(())
    }

    /// Mutate every individual below the crossover band and re-score it
    fn mutate_remainder(&mut self) -> Result<()> {
        let band_start = self.bands.crossover_end();
        let tile_count = self.library.len();

        for member in self.population.members_mut().iter_mut().skip(band_start) {
            point_mutation(member.genome_mut(), tile_count, &mut self.rng)?;
            let fitness = score(member.genome(), &self.library, &self.grid, &self.target)?;
            member.set_fitness(fitness);
        }

        Ok(())
    }

    /// Sort one final time and return the overall best individual
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the population is somehow empty,
    /// which a constructed executor never allows
    pub fn finish(&mut self) -> Result<Individual> {
        self.population.sort_by_fitness();
        self.population
            .best()
            .cloned()
            .ok_or_else(|| configuration_error("population_size", &0, &"population is empty"))
    }

    /// Render the current best individual's mosaic
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty or rendering fails
    pub fn best_canvas(&self) -> Result<Array3<u8>> {
        let best = self
            .population
            .best()
            .ok_or_else(|| configuration_error("population_size", &0, &"population is empty"))?;
        render(best.genome(), &self.library, &self.grid)
    }

    /// Number of completed generations
    pub const fn generation(&self) -> usize {
        self.generation
    }

    /// Run parameters
    pub const fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Band boundaries used for selection
    pub const fn bands(&self) -> &SelectionBands {
        &self.bands
    }

    /// Grid derived from the target canvas and tile footprint
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Current population in its most recent order
    pub const fn population(&self) -> &Population {
        &self.population
    }
}

/// Render a genome and score it against the target
fn score(
    genome: &Genome,
    library: &TileLibrary,
    grid: &TileGrid,
    target: &Array3<u8>,
) -> Result<f64> {
    let canvas = render(genome, library, grid)?;
    mean_squared_error(&canvas, target)
}
