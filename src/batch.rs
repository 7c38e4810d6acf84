//! Data-parallel closed syncmer selection across independent sequences.
//!
//! Each sequence carries its own rolling hash and deque, so sequences are
//! farmed out to the rayon pool with no synchronization. Work inside a single
//! sequence stays sequential.

use rayon::prelude::*;

use crate::error::Result;
use crate::kmer::syncmer::{compute_with_params, ClosedSyncmer};
use crate::params::SyncmerParams;

/// Compute closed syncmers for many sequences in parallel.
///
/// Returns one result per input sequence, in input order. A sequence shorter
/// than `k` yields its own `SequenceTooShort` error without affecting the
/// others.
pub fn compute_batch<S>(sequences: &[S], params: &SyncmerParams) -> Vec<Result<Vec<ClosedSyncmer>>>
where
    S: AsRef<[u8]> + Sync,
{
    let results: Vec<Result<Vec<ClosedSyncmer>>> = sequences
        .par_iter()
        .map(|seq| compute_with_params(seq.as_ref(), params))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        tracing::debug!(
            "{} of {} sequences shorter than k={}",
            failed,
            sequences.len(),
            params.k()
        );
    }

    results
}

/// Count closed syncmers per sequence without keeping the records.
///
/// Sequences shorter than `k` count as zero.
pub fn count_batch<S>(sequences: &[S], params: &SyncmerParams) -> Vec<usize>
where
    S: AsRef<[u8]> + Sync,
{
    sequences
        .par_iter()
        .map(|seq| crate::kmer::closed_syncmers(seq.as_ref(), params).count())
        .collect()
}

/// Total number of records across successful results.
pub fn total_records(results: &[Result<Vec<ClosedSyncmer>>]) -> usize {
    results
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .map(|records| records.len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncmerError;
    use crate::kmer::compute_closed_syncmers;

    #[test]
    fn test_batch_matches_sequential() {
        let sequences = vec![
            b"ACGTACGTACGTTTGACCA".to_vec(),
            b"GGGGACGTACGTAAACCCGGT".to_vec(),
            b"TTAGGGTTAGGGCATCATCAT".to_vec(),
        ];
        let params = SyncmerParams::new(6, 3).unwrap();

        let results = compute_batch(&sequences, &params);
        assert_eq!(results.len(), sequences.len());
        for (seq, result) in sequences.iter().zip(&results) {
            assert_eq!(result, &compute_closed_syncmers(seq, 6, 3));
        }

        let counts = count_batch(&sequences, &params);
        assert_eq!(total_records(&results), counts.iter().sum::<usize>());
    }

    #[test]
    fn test_batch_short_sequence_isolated() {
        let sequences = ["ACG", "ACGTACGTAC"];
        let params = SyncmerParams::new(4, 2).unwrap();

        let results = compute_batch(&sequences, &params);
        assert_eq!(results[0], Err(SyncmerError::SequenceTooShort { len: 3, k: 4 }));
        assert_eq!(results[1].as_ref().map(|r| r.len()), Ok(4));
        assert_eq!(total_records(&results), 4);
        assert_eq!(count_batch(&sequences, &params), vec![0, 4]);
    }
}
