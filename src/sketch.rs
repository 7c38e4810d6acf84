//! Closed syncmer sketches for sequence comparison.
//!
//! A sketch is the set of minimizer hashes of a sequence's closed syncmers.
//! Because hashes are strand-canonical, a sequence and its reverse
//! complement produce overlapping sketches, and two sequences sharing long
//! stretches share most of their syncmer hashes.

use ahash::AHashSet;

use crate::kmer::{closed_syncmers, CanonicalHash};
use crate::params::SyncmerParams;

/// Set of closed syncmer hashes for one or more sequences.
#[derive(Debug, Clone)]
pub struct SyncmerSketch {
    params: SyncmerParams,
    hashes: AHashSet<CanonicalHash>,
}

impl SyncmerSketch {
    /// Create an empty sketch.
    pub fn new(params: SyncmerParams) -> Self {
        Self {
            params,
            hashes: AHashSet::new(),
        }
    }

    /// Sketch a single sequence.
    pub fn from_sequence(seq: &[u8], params: SyncmerParams) -> Self {
        let mut sketch = Self::new(params);
        sketch.add_sequence(seq);
        sketch
    }

    /// Add the closed syncmers of `seq`. Sequences shorter than k add nothing.
    pub fn add_sequence(&mut self, seq: &[u8]) {
        let params = self.params;
        self.hashes
            .extend(closed_syncmers(seq, &params).map(|r| r.minimizer_hash));
    }

    pub fn contains(&self, hash: CanonicalHash) -> bool {
        self.hashes.contains(&hash)
    }

    /// Number of distinct hashes.
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn params(&self) -> &SyncmerParams {
        &self.params
    }

    /// Jaccard similarity |A ∩ B| / |A ∪ B|.
    ///
    /// Returns `None` if the sketches were built with different parameters.
    /// Two empty sketches have similarity 0.
    pub fn jaccard(&self, other: &SyncmerSketch) -> Option<f64> {
        if self.params != other.params {
            return None;
        }
        let shared = self.shared(other);
        let union = self.len() + other.len() - shared;
        if union == 0 {
            return Some(0.0);
        }
        Some(shared as f64 / union as f64)
    }

    /// Fraction of this sketch's hashes present in `other`.
    ///
    /// Returns `None` if the sketches were built with different parameters.
    pub fn containment(&self, other: &SyncmerSketch) -> Option<f64> {
        if self.params != other.params {
            return None;
        }
        if self.is_empty() {
            return Some(0.0);
        }
        Some(self.shared(other) as f64 / self.len() as f64)
    }

    fn shared(&self, other: &SyncmerSketch) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (&self.hashes, &other.hashes)
        } else {
            (&other.hashes, &self.hashes)
        };
        small.iter().filter(|h| large.contains(h)).count()
    }
}
