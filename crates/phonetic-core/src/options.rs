// Generation options: raw overrides, defaults, clamping and seed fallback
//
// Options are supplied as a set of optional overrides. Before any hashing
// takes place they are resolved into a `ResolvedOptions` value: defaults are
// filled in, simplicity values are clamped to at least 1, negative syllable
// counts collapse to zero, and a missing seed is obtained from a caller
// supplied fallback. Only resolved options drive generation, so two callers
// passing e.g. `phoneticSimplicity: 0` and `phoneticSimplicity: 1` get the
// same word.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::OptionsError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Number of syllables per word. Default: 3.
pub const DEFAULT_SYLLABLES: i64 = 3;

/// Inverse probability of a fragment being drawn from the complex part of
/// its table. Default: 5.
pub const DEFAULT_PHONETIC_SIMPLICITY: i64 = 5;

/// Inverse probability of a syllable being a compound. Default: 5.
pub const DEFAULT_COMPOUND_SIMPLICITY: i64 = 5;

/// Uppercase the first letter of the finished word. Default: true.
pub const DEFAULT_CAP_FIRST: bool = true;

/// Number of random bytes drawn for a seed when none is supplied.
pub const SEED_ENTROPY_BYTES: usize = 16;

// ---------------------------------------------------------------------------
// Raw options
// ---------------------------------------------------------------------------

/// Caller supplied option overrides. Every field is optional.
///
/// The serialized form uses the camelCase names `syllables`, `seed`,
/// `phoneticSimplicity`, `compoundSimplicity` and `capFirst`; unknown fields
/// are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Options {
    /// Number of syllables. Zero or negative yields an empty word.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syllables: Option<i64>,

    /// Seed string. When absent, a random seed is generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,

    /// Clamped to a minimum of 1. Higher values favour simple fragments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic_simplicity: Option<i64>,

    /// Clamped to a minimum of 1. Higher values make compound syllables rarer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compound_simplicity: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cap_first: Option<bool>,
}

impl Options {
    /// Create an empty set of overrides (every option at its default).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from a JSON object such as
    /// `{"seed": "Tom", "syllables": 2, "capFirst": false}`.
    pub fn from_json(document: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(document)?)
    }

    pub fn with_syllables(mut self, syllables: i64) -> Self {
        self.syllables = Some(syllables);
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn with_phonetic_simplicity(mut self, simplicity: i64) -> Self {
        self.phonetic_simplicity = Some(simplicity);
        self
    }

    pub fn with_compound_simplicity(mut self, simplicity: i64) -> Self {
        self.compound_simplicity = Some(simplicity);
        self
    }

    pub fn with_cap_first(mut self, cap_first: bool) -> Self {
        self.cap_first = Some(cap_first);
        self
    }

    /// Resolve the overrides into the options that drive generation.
    ///
    /// `fallback_seed` is only invoked when no seed was supplied; its error
    /// is passed through unchanged.
    pub fn resolve<E>(
        &self,
        fallback_seed: impl FnOnce() -> Result<String, E>,
    ) -> Result<ResolvedOptions, E> {
        let (seed, seed_source) = match &self.seed {
            Some(seed) => (seed.clone(), SeedSource::Supplied),
            None => (fallback_seed()?, SeedSource::Random),
        };

        Ok(ResolvedOptions {
            syllables: clamp_syllables(self.syllables.unwrap_or(DEFAULT_SYLLABLES)),
            seed,
            seed_source,
            phonetic_simplicity: clamp_simplicity(
                self.phonetic_simplicity
                    .unwrap_or(DEFAULT_PHONETIC_SIMPLICITY),
            ),
            compound_simplicity: clamp_simplicity(
                self.compound_simplicity
                    .unwrap_or(DEFAULT_COMPOUND_SIMPLICITY),
            ),
            cap_first: self.cap_first.unwrap_or(DEFAULT_CAP_FIRST),
        })
    }
}

// ---------------------------------------------------------------------------
// Resolved options
// ---------------------------------------------------------------------------

/// Where the seed of a resolved option set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedSource {
    /// The caller supplied the seed.
    Supplied,
    /// The seed was drawn from the entropy source.
    Random,
}

/// Fully resolved options. Read-only for the lifetime of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Number of syllables to emit. Negative requests resolve to 0.
    pub syllables: usize,
    pub seed: String,
    pub seed_source: SeedSource,
    pub phonetic_simplicity: NonZeroU64,
    pub compound_simplicity: NonZeroU64,
    pub cap_first: bool,
}

impl ResolvedOptions {
    /// Default options around an explicit seed.
    pub fn with_seed(seed: impl Into<String>) -> Self {
        Self {
            syllables: clamp_syllables(DEFAULT_SYLLABLES),
            seed: seed.into(),
            seed_source: SeedSource::Supplied,
            phonetic_simplicity: clamp_simplicity(DEFAULT_PHONETIC_SIMPLICITY),
            compound_simplicity: clamp_simplicity(DEFAULT_COMPOUND_SIMPLICITY),
            cap_first: DEFAULT_CAP_FIRST,
        }
    }
}

fn clamp_syllables(requested: i64) -> usize {
    usize::try_from(requested).unwrap_or(0)
}

fn clamp_simplicity(requested: i64) -> NonZeroU64 {
    u64::try_from(requested)
        .ok()
        .and_then(NonZeroU64::new)
        .unwrap_or(NonZeroU64::MIN)
}
