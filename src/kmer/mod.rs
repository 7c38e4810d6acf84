//! K-mer processing: 2-bit base encoding, canonical s-mer hashing and
//! closed syncmer selection.

pub mod canonical;
pub mod naive;
pub mod syncmer;

pub use canonical::{canonical_hash, canonical_hashes, CanonicalHasher, CanonicalHashes};
pub use naive::compute_closed_syncmers_naive;
pub use syncmer::{
    closed_syncmers, compute_closed_syncmers, compute_with_params, syncmer_density, ClosedSyncmer,
    ClosedSyncmers,
};

/// Canonical s-mer hash word. Two bits per base, so s-mers up to
/// [`MAX_SMER_LEN`] bases fit without truncation.
pub type CanonicalHash = u128;

/// Longest s-mer whose 2-bit packing fits in a [`CanonicalHash`].
pub const MAX_SMER_LEN: usize = (CanonicalHash::BITS / 2) as usize;

/// Lookup table for base -> 2-bit code. Anything outside ACGT/acgt maps to
/// the code for 'A'.
const BASE_BITS: [u8; 256] = {
    let mut table = [0u8; 256];
    table[b'C' as usize] = 1;
    table[b'c' as usize] = 1;
    table[b'G' as usize] = 2;
    table[b'g' as usize] = 2;
    table[b'T' as usize] = 3;
    table[b't' as usize] = 3;
    table
};

/// 2-bit code of a nucleotide (A=0, C=1, G=2, T=3).
///
/// Unknown symbols (N, IUPAC codes, anything else) are silently treated as
/// 'A'. This is a fixed encoding policy, not input validation: the rolling
/// hasher and the naive oracle must agree on it.
#[inline]
pub fn base_to_bits(base: u8) -> u8 {
    BASE_BITS[base as usize]
}

/// Complement of a 2-bit code (A<->T, C<->G).
#[inline]
pub fn complement_bits(code: u8) -> u8 {
    3 - code
}

/// Mask keeping the low `2 * s` bits of a hash word.
#[inline]
pub fn smer_mask(s: usize) -> CanonicalHash {
    debug_assert!(s >= 1 && s <= MAX_SMER_LEN);
    CanonicalHash::MAX >> (CanonicalHash::BITS - 2 * s as u32)
}

/// Reverse complement of a nucleotide sequence.
///
/// Case is preserved; bytes other than ACGT/acgt are copied through
/// unchanged (an 'N' stays 'N').
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .rev()
        .map(|&b| match b {
            b'A' => b'T',
            b'C' => b'G',
            b'G' => b'C',
            b'T' => b'A',
            b'a' => b't',
            b'c' => b'g',
            b'g' => b'c',
            b't' => b'a',
            other => other,
        })
        .collect()
}
