//! Error type for closed syncmer selection.
//!
//! Every fallible entry point validates its parameters before touching the
//! sequence, so callers see one of these variants instead of a panic or an
//! out-of-bounds read. Unknown nucleotide symbols are *not* errors; they are
//! encoded as 'A' (see [`crate::kmer::base_to_bits`]).

/// Errors produced by the closed syncmer API.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncmerError {
    #[error("invalid parameters: s-mer length must be at least 1")]
    EmptySmer,

    #[error("invalid parameters: k-mer length must be at least 1")]
    EmptyKmer,

    #[error("invalid parameters: s-mer length {s} must be less than k-mer length {k}")]
    SmerNotShorterThanKmer { k: usize, s: usize },

    /// `2 * s` does not fit in the canonical hash word.
    #[error("invalid parameters: s-mer length {s} exceeds the maximum of {max} for the hash width")]
    SmerTooWide { s: usize, max: usize },

    /// Length precondition: no k-mer window fits in the sequence.
    #[error("sequence length {len} is less than k-mer length {k}")]
    SequenceTooShort { len: usize, k: usize },
}

impl SyncmerError {
    /// True for the parameter-validation variants (as opposed to the
    /// length precondition, which depends on the input sequence).
    pub fn is_invalid_parameter(&self) -> bool {
        !matches!(self, SyncmerError::SequenceTooShort { .. })
    }
}

pub type Result<T> = std::result::Result<T, SyncmerError>;
