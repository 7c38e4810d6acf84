// src/kmer/naive.rs
//! Brute-force closed syncmer reference.
//!
//! Every k-mer window is rescanned and every s-mer hash recomputed from the
//! raw bases, with no rolling state shared between s-mers or windows. This is
//! O(N * k * s) and exists only to cross-check [`super::syncmer`] in tests and
//! benchmarks.

use crate::error::Result;
use crate::kmer::canonical::canonical_hash_unchecked;
use crate::kmer::syncmer::ClosedSyncmer;
use crate::kmer::CanonicalHash;
use crate::params::SyncmerParams;

/// Naive closed syncmer selection.
///
/// Same contract, validation and output as
/// [`compute_closed_syncmers`](super::compute_closed_syncmers). Not for
/// production use.
pub fn compute_closed_syncmers_naive(seq: &[u8], k: usize, s: usize) -> Result<Vec<ClosedSyncmer>> {
    let params = SyncmerParams::new(k, s)?;
    params.check_len(seq.len())?;

    let last_offset = k - s;
    let mut records = Vec::new();

    for kmer_pos in 0..=seq.len() - k {
        let mut min_hash = CanonicalHash::MAX;
        let mut min_offset = 0;

        for offset in 0..=last_offset {
            let smer_pos = kmer_pos + offset;
            let hash = canonical_hash_unchecked(&seq[smer_pos..smer_pos + s]);
            // Strict comparison keeps the earliest minimum. The first s-mer is
            // always taken, even when its hash is CanonicalHash::MAX (s = 64).
            if offset == 0 || hash < min_hash {
                min_hash = hash;
                min_offset = offset;
            }
        }

        if min_offset == 0 || min_offset == last_offset {
            records.push(ClosedSyncmer {
                kmer_position: kmer_pos,
                smer_position: kmer_pos + min_offset,
                minimizer_hash: min_hash,
            });
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncmerError;

    #[test]
    fn test_naive_regression_vector() {
        let records = compute_closed_syncmers_naive(b"ACGTACGTAC", 4, 2).unwrap();
        let positions: Vec<(usize, usize, CanonicalHash)> = records
            .iter()
            .map(|r| (r.kmer_position, r.smer_position, r.minimizer_hash))
            .collect();
        assert_eq!(positions, vec![(0, 0, 1), (2, 2, 1), (4, 4, 1), (6, 6, 1)]);
    }

    #[test]
    fn test_naive_validation() {
        assert_eq!(
            compute_closed_syncmers_naive(b"ACGT", 2, 2),
            Err(SyncmerError::SmerNotShorterThanKmer { k: 2, s: 2 })
        );
        assert_eq!(
            compute_closed_syncmers_naive(b"ACG", 4, 1),
            Err(SyncmerError::SequenceTooShort { len: 3, k: 4 })
        );
    }

    #[test]
    fn test_naive_single_window() {
        let records = compute_closed_syncmers_naive(b"CCCAAA", 6, 3).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].smer_position, 3);
        assert_eq!(records[0].minimizer_hash, 0);
    }
}
