//! Deterministic, seedable generator of pronounceable nonsense words.
//!
//! The same seed and options always produce the same word, which makes the
//! output usable as a stable, human-friendly identifier.
//!
//! ```
//! use phonetic_gen::Options;
//!
//! let word = phonetic_gen::generate(&Options::new().with_seed("Tom")).unwrap();
//! assert_eq!(word, "Hayoosam");
//! ```
//!
//! # Architecture
//!
//! - [`tables`] -- PRE / MID / POST fragment tables with their simple boundaries
//! - [`syllable`] -- Fragment selection and the syllable state machine
//! - [`postprocess`] -- Ordered replacement rules and capitalization
//! - [`entropy`] -- Secure random seed generation when no seed is supplied
//! - [`generator`] -- The [`Generator`] handle and the [`generate`] entry point

pub mod entropy;
pub mod generator;
pub mod postprocess;
pub mod syllable;
pub mod tables;

pub use generator::{GeneratedWord, Generator, generate};
pub use phonetic_core::options::Options;

use phonetic_core::OptionsError;
use phonetic_hash::HashError;

use crate::entropy::EntropyError;

/// Error type for word generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The digest primitive violated its contract.
    #[error("numeric hashing failed: {0}")]
    Hash(#[from] HashError),

    /// No seed was supplied and none could be drawn.
    #[error("could not draw a random seed: {0}")]
    Entropy(#[from] EntropyError),

    /// The options document could not be parsed.
    #[error("invalid options: {0}")]
    Options(#[from] OptionsError),
}
