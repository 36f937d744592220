//! Numeric state hashing for the phonetic word generator.
//!
//! This crate turns arbitrary text into the unsigned integer "numeric state"
//! that carries all pseudo-randomness through a generation run, and provides
//! the cheap derivative used for branching decisions.
//!
//! # Architecture
//!
//! - [`digest`] -- The injected 128-bit digest primitive and its MD5 default
//! - [`numeric`] -- Salted digest to numeric state conversion
//! - [`derivative`](mod@derivative) -- Base-7 remainder accumulation over the numeric state

pub mod derivative;
pub mod digest;
pub mod numeric;

pub use derivative::derivative;
pub use digest::{Digest128, Md5Digest};
pub use numeric::{Numeric, NumericHasher};

/// Number of bytes a digest primitive must return.
pub const DIGEST_LEN: usize = 16;

/// Error type for numeric hashing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    /// The injected digest primitive broke its contract. The output is
    /// neither truncated nor padded, since either would silently change
    /// every word generated from it.
    #[error("digest primitive returned {actual} bytes, expected {expected}")]
    DigestLength { expected: usize, actual: usize },
}
