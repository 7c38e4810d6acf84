// src/kmer/syncmer.rs
//! Closed syncmer selection via sliding-window minimum.
//!
//! A closed syncmer is a k-mer whose smallest canonical s-mer hash sits at
//! the first or last s-mer position of the k-mer. Each k-mer covers a window
//! of `w = k - s + 1` consecutive s-mer hashes, so selecting closed syncmers
//! is a sliding-window minimum over the s-mer hash stream followed by a
//! boundary test.
//!
//! The window minimum is maintained with a monotonic deque of
//! `(position, hash)` pairs whose hashes are non-decreasing front to back.
//! Every s-mer is pushed and popped at most once, so the whole sequence is
//! processed in O(N) time and O(w) space, instead of O(N * w) for rescanning
//! each window.
//!
//! Ties are broken by earliest position: an entry is only popped from the
//! back when its hash is *strictly* greater than the incoming one.
//!
//! Reference: Edgar, R. (2021). Syncmers are more sensitive than minimizers
//! for selecting conserved k-mers in biological sequences. PeerJ, 9, e10805.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::kmer::canonical::CanonicalHashes;
use crate::kmer::CanonicalHash;
use crate::params::SyncmerParams;

/// A closed syncmer: a k-mer whose minimal s-mer is at one of its ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClosedSyncmer {
    /// Start of the k-mer in the sequence
    pub kmer_position: usize,
    /// Start of the minimal s-mer (either `kmer_position` or
    /// `kmer_position + k - s`)
    pub smer_position: usize,
    /// Canonical hash of the minimal s-mer
    pub minimizer_hash: CanonicalHash,
}

impl ClosedSyncmer {
    /// Offset of the minimal s-mer within its k-mer (0 or `k - s`).
    #[inline]
    pub fn smer_offset(&self) -> usize {
        self.smer_position - self.kmer_position
    }

    /// True if the minimal s-mer is the k-mer's first s-mer.
    #[inline]
    pub fn is_start_anchored(&self) -> bool {
        self.smer_position == self.kmer_position
    }
}

/// Iterator adaptor turning an s-mer hash stream into closed syncmers.
///
/// The input must yield `(position, hash)` for consecutive s-mer positions
/// starting at 0, as [`CanonicalHashes`] does. Records come out in
/// increasing `kmer_position`.
pub struct ClosedSyncmers<I> {
    hashes: I,
    /// Candidate minima, hashes non-decreasing front to back
    deque: VecDeque<(usize, CanonicalHash)>,
    /// s-mers per k-mer
    window_len: usize,
}

impl<I> ClosedSyncmers<I>
where
    I: Iterator<Item = (usize, CanonicalHash)>,
{
    pub fn new(hashes: I, params: &SyncmerParams) -> Self {
        let window_len = params.window_len();
        Self {
            hashes,
            deque: VecDeque::with_capacity(window_len),
            window_len,
        }
    }

    /// Push one s-mer into the window and report the k-mer window it
    /// completes, if it is a closed syncmer.
    #[inline]
    fn slide(&mut self, pos: usize, hash: CanonicalHash) -> Option<ClosedSyncmer> {
        // Strictly greater: an equal hash already in the deque is earlier and wins the tie
        while matches!(self.deque.back(), Some(&(_, back)) if back > hash) {
            self.deque.pop_back();
        }
        self.deque.push_back((pos, hash));

        if pos + 1 < self.window_len {
            return None;
        }

        // Window covers s-mers [kmer_pos, pos]
        let kmer_pos = pos + 1 - self.window_len;
        while matches!(self.deque.front(), Some(&(front, _)) if front < kmer_pos) {
            self.deque.pop_front();
        }

        let &(min_pos, min_hash) = self.deque.front()?;
        if min_pos == kmer_pos || min_pos == pos {
            Some(ClosedSyncmer {
                kmer_position: kmer_pos,
                smer_position: min_pos,
                minimizer_hash: min_hash,
            })
        } else {
            None
        }
    }
}

impl<I> Iterator for ClosedSyncmers<I>
where
    I: Iterator<Item = (usize, CanonicalHash)>,
{
    type Item = ClosedSyncmer;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((pos, hash)) = self.hashes.next() {
            if let Some(record) = self.slide(pos, hash) {
                return Some(record);
            }
        }
        None
    }
}

/// Lazily select the closed syncmers of `seq`.
///
/// Unlike [`compute_closed_syncmers`], a sequence shorter than `k` is not an
/// error here; the iterator is simply empty.
pub fn closed_syncmers<'a>(
    seq: &'a [u8],
    params: &SyncmerParams,
) -> ClosedSyncmers<CanonicalHashes<'a>> {
    ClosedSyncmers::new(CanonicalHashes::from_params(seq, params), params)
}

/// Compute all closed syncmers of `seq` for k-mer length `k` and s-mer
/// length `s`.
///
/// # Arguments
/// * `seq` - The DNA sequence as bytes (case-insensitive; non-ACGT is read as 'A')
/// * `k` - K-mer size
/// * `s` - S-mer size, `1 <= s < k`, at most 64
///
/// # Returns
/// Records in increasing k-mer position, or an error if the parameters are
/// invalid or `seq` is shorter than `k`.
///
/// # Example
/// ```ignore
/// let syncmers = compute_closed_syncmers(b"ACGTACGTAC", 4, 2)?;
/// assert_eq!(syncmers.len(), 4);
/// ```
pub fn compute_closed_syncmers(seq: &[u8], k: usize, s: usize) -> Result<Vec<ClosedSyncmer>> {
    let params = SyncmerParams::new(k, s)?;
    compute_with_params(seq, &params)
}

/// [`compute_closed_syncmers`] for already validated parameters.
pub fn compute_with_params(seq: &[u8], params: &SyncmerParams) -> Result<Vec<ClosedSyncmer>> {
    params.check_len(seq.len())?;

    // Expected density on random input is about 2 / w
    let num_kmers = params.num_kmers(seq.len());
    let mut records = Vec::with_capacity(2 * num_kmers / params.window_len() + 1);
    records.extend(closed_syncmers(seq, params));

    tracing::debug!(
        "Selected {} closed syncmers from {} k-mers (k={}, s={})",
        records.len(),
        num_kmers,
        params.k(),
        params.s()
    );

    Ok(records)
}

/// Fraction of k-mers that are closed syncmers.
///
/// Approximately 2/(k-s+1) for random sequences.
pub fn syncmer_density(seq: &[u8], k: usize, s: usize) -> Result<f64> {
    let params = SyncmerParams::new(k, s)?;
    let num_kmers = params.num_kmers(seq.len());
    if num_kmers == 0 {
        return Ok(0.0);
    }

    let num_syncmers = closed_syncmers(seq, &params).count();
    Ok(num_syncmers as f64 / num_kmers as f64)
}
