// src/kmer/canonical.rs
//! Strand-canonical rolling hash over 2-bit packed s-mers.
//!
//! Each s-mer is packed two bits per base (A=0, C=1, G=2, T=3) in sequence
//! order; its reverse complement is packed the same way. The canonical hash
//! is the numerically smaller of the two, so an s-mer and its reverse
//! complement always hash identically.
//!
//! Both encodings are maintained incrementally: one shift/or/mask per base for
//! the forward word, one shift/or for the reverse-complement word. Hashing the
//! whole sequence is therefore O(N) regardless of s.

use crate::error::{Result, SyncmerError};
use crate::params::SyncmerParams;
use crate::kmer::{base_to_bits, complement_bits, smer_mask, CanonicalHash, MAX_SMER_LEN};

/// Rolling canonical hash state for s-mers.
#[derive(Clone, Debug)]
pub struct CanonicalHasher {
    /// Forward packing of the most recent s bases
    forward: CanonicalHash,
    /// Reverse-complement packing of the most recent s bases
    reverse: CanonicalHash,
    mask: CanonicalHash,
    /// Bit offset of the leftmost base in the reverse-complement word
    rc_shift: u32,
    s: usize,
    /// Bases consumed since construction or the last reset
    filled: usize,
}

impl CanonicalHasher {
    /// Create an empty hasher for s-mers of length `s`.
    ///
    /// Fails if `s` is zero or `2 * s` exceeds the width of [`CanonicalHash`].
    pub fn new(s: usize) -> Result<Self> {
        if s == 0 {
            return Err(SyncmerError::EmptySmer);
        }
        if s > MAX_SMER_LEN {
            return Err(SyncmerError::SmerTooWide { s, max: MAX_SMER_LEN });
        }
        Ok(Self::with_len(s))
    }

    /// Hasher for the s-mer length of already validated parameters.
    pub fn from_params(params: &SyncmerParams) -> Self {
        Self::with_len(params.s())
    }

    fn with_len(s: usize) -> Self {
        Self {
            forward: 0,
            reverse: 0,
            mask: smer_mask(s),
            rc_shift: 2 * (s as u32 - 1),
            s,
            filled: 0,
        }
    }

    /// Consume one base.
    ///
    /// Returns the canonical hash of the s-mer ending at this base once at
    /// least `s` bases have been consumed, `None` before that.
    #[inline]
    pub fn push(&mut self, base: u8) -> Option<CanonicalHash> {
        let code = base_to_bits(base);

        self.forward = ((self.forward << 2) | code as CanonicalHash) & self.mask;
        // The complement of the newest base becomes the leftmost base of the
        // reverse complement; the oldest base falls off the right.
        self.reverse = ((self.reverse >> 2)
            | ((complement_bits(code) as CanonicalHash) << self.rc_shift))
            & self.mask;

        self.filled += 1;
        if self.filled >= self.s {
            Some(self.canonical())
        } else {
            None
        }
    }

    /// Canonical hash (minimum of forward and reverse complement).
    ///
    /// Only meaningful after at least `s` bases have been pushed.
    #[inline]
    pub fn canonical(&self) -> CanonicalHash {
        self.forward.min(self.reverse)
    }

    #[inline]
    pub fn forward_hash(&self) -> CanonicalHash {
        self.forward
    }

    #[inline]
    pub fn reverse_hash(&self) -> CanonicalHash {
        self.reverse
    }

    #[inline]
    pub fn s(&self) -> usize {
        self.s
    }

    /// Forget all consumed bases.
    pub fn reset(&mut self) {
        self.forward = 0;
        self.reverse = 0;
        self.filled = 0;
    }
}

/// Iterator yielding `(position, canonical hash)` for every s-mer of a
/// sequence, in position order.
pub struct CanonicalHashes<'a> {
    seq: &'a [u8],
    hasher: CanonicalHasher,
    /// Index of the next base to consume
    pos: usize,
}

impl<'a> CanonicalHashes<'a> {
    /// Create a new iterator over the s-mers of `seq`.
    ///
    /// A sequence shorter than `s` yields nothing.
    pub fn new(seq: &'a [u8], s: usize) -> Result<Self> {
        Ok(Self {
            seq,
            hasher: CanonicalHasher::new(s)?,
            pos: 0,
        })
    }

    /// Infallible constructor for validated parameters.
    pub fn from_params(seq: &'a [u8], params: &SyncmerParams) -> Self {
        Self {
            seq,
            hasher: CanonicalHasher::from_params(params),
            pos: 0,
        }
    }
}

impl<'a> Iterator for CanonicalHashes<'a> {
    type Item = (usize, CanonicalHash); // (s-mer position, hash)

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.seq.len() {
            let i = self.pos;
            self.pos += 1;
            if let Some(hash) = self.hasher.push(self.seq[i]) {
                return Some((i + 1 - self.hasher.s(), hash));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let first_end = self.pos.max(self.hasher.s() - 1);
        let remaining = self.seq.len().saturating_sub(first_end);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CanonicalHashes<'_> {}

/// Canonical hashes of every s-mer in `seq`, fully materialized.
pub fn canonical_hashes(seq: &[u8], s: usize) -> Result<Vec<CanonicalHash>> {
    Ok(CanonicalHashes::new(seq, s)?.map(|(_, h)| h).collect())
}

/// Canonical hash of a single s-mer, computed from scratch.
///
/// Returns `None` for an empty slice or one longer than [`MAX_SMER_LEN`].
/// For sliding windows, use [`CanonicalHasher`] or [`CanonicalHashes`].
#[inline]
pub fn canonical_hash(smer: &[u8]) -> Option<CanonicalHash> {
    if smer.is_empty() || smer.len() > MAX_SMER_LEN {
        return None;
    }
    Some(canonical_hash_unchecked(smer))
}

/// From-scratch hash with no length checks. Caller guarantees
/// `1 <= smer.len() <= MAX_SMER_LEN`.
pub(crate) fn canonical_hash_unchecked(smer: &[u8]) -> CanonicalHash {
    let mut forward: CanonicalHash = 0;
    let mut reverse: CanonicalHash = 0;

    for (i, &base) in smer.iter().enumerate() {
        let code = base_to_bits(base);
        forward = (forward << 2) | code as CanonicalHash;
        // Base i lands at RC position len-1-i, i.e. bit offset 2*i from the right
        reverse |= (complement_bits(code) as CanonicalHash) << (2 * i);
    }

    forward.min(reverse)
}
