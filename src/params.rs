//! Validated (k, s) parameters.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SyncmerError};
use crate::kmer::{CanonicalHash, MAX_SMER_LEN};

/// K-mer and s-mer lengths, checked once at construction.
///
/// Holding a `SyncmerParams` means `1 <= s < k` and `2 * s` fits in
/// [`CanonicalHash`], so downstream code never re-validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawParams")]
pub struct SyncmerParams {
    k: usize,
    s: usize,
}

#[derive(Deserialize)]
struct RawParams {
    k: usize,
    s: usize,
}

impl TryFrom<RawParams> for SyncmerParams {
    type Error = SyncmerError;

    fn try_from(raw: RawParams) -> Result<Self> {
        SyncmerParams::new(raw.k, raw.s)
    }
}

impl SyncmerParams {
    /// Validate k-mer length `k` and s-mer length `s`.
    ///
    /// # Example
    /// ```ignore
    /// let params = SyncmerParams::new(15, 5)?;
    /// assert_eq!(params.window_len(), 11);
    /// ```
    pub fn new(k: usize, s: usize) -> Result<Self> {
        if s == 0 {
            return Err(SyncmerError::EmptySmer);
        }
        if k == 0 {
            return Err(SyncmerError::EmptyKmer);
        }
        if s >= k {
            return Err(SyncmerError::SmerNotShorterThanKmer { k, s });
        }
        if s > MAX_SMER_LEN {
            return Err(SyncmerError::SmerTooWide { s, max: MAX_SMER_LEN });
        }
        Ok(Self { k, s })
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn s(&self) -> usize {
        self.s
    }

    /// Number of s-mers per k-mer (`k - s + 1`).
    #[inline]
    pub fn window_len(&self) -> usize {
        self.k - self.s + 1
    }

    /// Bits actually used by a canonical hash for this s.
    #[inline]
    pub fn hash_bits(&self) -> u32 {
        2 * self.s as u32
    }

    /// Length precondition for a sequence of `len` bases.
    pub fn check_len(&self, len: usize) -> Result<()> {
        if len < self.k {
            return Err(SyncmerError::SequenceTooShort { len, k: self.k });
        }
        Ok(())
    }

    /// Number of k-mer windows in a sequence of `len` bases.
    #[inline]
    pub fn num_kmers(&self, len: usize) -> usize {
        (len + 1).saturating_sub(self.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_params() {
        let p = SyncmerParams::new(4, 2).unwrap();
        assert_eq!(p.window_len(), 3);
        assert_eq!(p.hash_bits(), 4);
        assert_eq!(p.num_kmers(10), 7);
        assert_eq!(p.num_kmers(3), 0);
    }

    #[test]
    fn test_rejected_params() {
        assert_eq!(SyncmerParams::new(4, 0), Err(SyncmerError::EmptySmer));
        assert_eq!(SyncmerParams::new(0, 1), Err(SyncmerError::EmptyKmer));
        assert_eq!(
            SyncmerParams::new(4, 4),
            Err(SyncmerError::SmerNotShorterThanKmer { k: 4, s: 4 })
        );
        assert_eq!(
            SyncmerParams::new(100, 65),
            Err(SyncmerError::SmerTooWide { s: 65, max: 64 })
        );
        assert!(SyncmerParams::new(100, 64).is_ok());
    }

    #[test]
    fn test_length_precondition() {
        let p = SyncmerParams::new(5, 2).unwrap();
        assert!(p.check_len(5).is_ok());
        assert_eq!(
            p.check_len(4),
            Err(SyncmerError::SequenceTooShort { len: 4, k: 5 })
        );
    }

    #[test]
    fn test_serde_validates() {
        let p: SyncmerParams = serde_json::from_str(r#"{"k":8,"s":3}"#).unwrap();
        assert_eq!((p.k(), p.s()), (8, 3));
        assert!(serde_json::from_str::<SyncmerParams>(r#"{"k":3,"s":8}"#).is_err());
        assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"k":8,"s":3}"#);
    }
}
