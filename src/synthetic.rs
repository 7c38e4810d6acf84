//! Random nucleotide sequences for benchmarks and tests.

use rand::distributions::Uniform;
use rand::Rng;

const NUCLEOTIDES: [u8; 4] = *b"ACGT";

/// Generate a uniformly random ACGT sequence of `len` bases.
pub fn random_sequence(rng: &mut impl Rng, len: usize) -> Vec<u8> {
    let base_dist = Uniform::from(0..NUCLEOTIDES.len());
    (0..len).map(|_| NUCLEOTIDES[rng.sample(base_dist)]).collect()
}

/// Generate `num_seqs` random sequences of `len` bases each.
pub fn random_sequences(rng: &mut impl Rng, num_seqs: usize, len: usize) -> Vec<Vec<u8>> {
    (0..num_seqs).map(|_| random_sequence(rng, len)).collect()
}
