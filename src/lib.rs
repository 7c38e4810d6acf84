//! Closed syncmer selection.
//!
//! A closed syncmer is a k-mer whose minimal canonical s-mer hash sits at its
//! first or last s-mer position. This crate hashes every s-mer of a sequence
//! with a strand-canonical rolling 2-bit packing and selects closed syncmers
//! with a monotonic-deque sliding-window minimum, in one linear pass.
//!
//! ```ignore
//! use closed_syncmers::compute_closed_syncmers;
//!
//! let syncmers = compute_closed_syncmers(b"ACGTACGTAC", 4, 2)?;
//! for s in &syncmers {
//!     println!("{} {}", s.kmer_position, s.minimizer_hash);
//! }
//! ```

pub mod batch;
pub mod error;
pub mod kmer;
pub mod params;
pub mod sketch;
pub mod synthetic;

pub use error::SyncmerError;
pub use kmer::{
    closed_syncmers, compute_closed_syncmers, compute_closed_syncmers_naive, CanonicalHash,
    ClosedSyncmer, MAX_SMER_LEN,
};
pub use params::SyncmerParams;
pub use sketch::SyncmerSketch;
