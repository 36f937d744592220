//! Shared types for the phonetic word generator.
//!
//! This crate holds the vocabulary that the hashing engine and the generator
//! both speak: generation options and their resolution rules, the fragment
//! slot enum, and the capitalization helper used by post-processing.
//!
//! # Modules
//!
//! - [`options`] -- Raw option overrides, defaults, clamping and seed fallback
//! - [`enums`] -- Fragment slots (PRE / MID / POST)
//! - [`case`] -- First-letter capitalization

pub mod case;
pub mod enums;
pub mod options;

/// Error type for option documents that cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("malformed options document: {0}")]
    Json(#[from] serde_json::Error),
}
