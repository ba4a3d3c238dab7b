//! In-place point mutation of genomes

use crate::algorithm::genome::Genome;
use crate::io::error::{Result, configuration_error};
use rand::Rng;
use rand::rngs::StdRng;

/// Maximum number of point mutations applied in a single call
pub const MAX_POINT_MUTATIONS: usize = 5;

/// Apply up to [`MAX_POINT_MUTATIONS`] random point mutations in place
///
/// Draws a trial count uniformly from `[0, 5]` inclusive; zero is a permitted
/// no-op. Each trial independently draws a gene position and a replacement
/// tile index, both uniform. Repeat positions across trials simply overwrite
/// again. The caller must re-render and re-score the genome afterwards.
///
/// # Errors
///
/// Returns a configuration error for an empty genome or an empty tile
/// library, since no position or replacement can be drawn
pub fn point_mutation(genome: &mut Genome, tile_count: usize, rng: &mut StdRng) -> Result<()> {
    if genome.is_empty() || tile_count == 0 {
        return Err(configuration_error(
            "mutation_target",
            &format!("{} genes, {tile_count} tiles", genome.len()),
            &"mutation requires a non-empty genome and tile library",
        ));
    }

    let trials = rng.random_range(0..=MAX_POINT_MUTATIONS);
    for _ in 0..trials {
        let position = rng.random_range(0..genome.len());
        let tile = rng.random_range(0..tile_count);
        genome.set_gene(position, tile)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_changed_positions_bounded_by_trial_count() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..50 {
            let original = Genome::from_genes(vec![0; 128]);
            let mut mutant = original.clone();
            assert!(point_mutation(&mut mutant, 16, &mut rng).is_ok());

            let changed = original
                .genes()
                .iter()
                .zip(mutant.genes().iter())
                .filter(|(before, after)| before != after)
                .count();
            assert!(changed <= MAX_POINT_MUTATIONS);
        }
    }

    #[test]
    fn test_mutant_genes_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut genome = Genome::from_genes(vec![0; 64]);
        for _ in 0..200 {
            assert!(point_mutation(&mut genome, 7, &mut rng).is_ok());
        }
        assert!(genome.validate(7).is_ok());
        assert_eq!(genome.len(), 64);
    }

    #[test]
    fn test_unmutated_genes_retain_value() {
        let mut rng = StdRng::seed_from_u64(13);
        let original: Vec<usize> = (0..64).map(|i| i % 4).collect();
        let mut mutant = Genome::from_genes(original.clone());
        assert!(point_mutation(&mut mutant, 4, &mut rng).is_ok());

        let unchanged = original
            .iter()
            .zip(mutant.genes().iter())
            .filter(|(before, after)| before == after)
            .count();
        assert!(unchanged >= 64 - MAX_POINT_MUTATIONS);
    }
}
