//! Uniform crossover between two parent genomes

use crate::algorithm::genome::Genome;
use crate::io::error::{EvolutionError, Result};
use rand::Rng;
use rand::rngs::StdRng;

/// Combine two parents into one child via a uniform Boolean mask
///
/// One independent coin flip per gene position, heads with probability 0.5:
/// heads takes parent A's gene, tails parent B's. The mask is drawn fresh on
/// every call and neither parent is modified. The child's fitness is not
/// computed here; the caller must render and score it before trusting it.
///
/// # Errors
///
/// Returns a genome length mismatch error when the parents differ in length
pub fn uniform_crossover(a: &Genome, b: &Genome, rng: &mut StdRng) -> Result<Genome> {
    if a.len() != b.len() {
        return Err(EvolutionError::GenomeLengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let genes = a
        .genes()
        .iter()
        .zip(b.genes().iter())
        .map(|(&gene_a, &gene_b)| if rng.random::<bool>() { gene_a } else { gene_b })
        .collect();

    Ok(Genome::from_genes(genes))
}
