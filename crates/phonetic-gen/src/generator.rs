// Generator: top-level entry point for word generation.
//
// Owns the two collaborators (digest primitive and entropy source) and
// runs the pipeline for each call:
//   options -> resolved options -> initial state -> syllables -> post-process
//
// A `Generator` holds no per-call state. Every call builds its own
// `WordState`, so one generator can serve any number of threads as long as
// its collaborators are `Sync`.

use phonetic_core::options::{Options, ResolvedOptions, SeedSource};
use phonetic_hash::{Digest128, HashError, Md5Digest, NumericHasher};
use tracing::debug;

use crate::GenerateError;
use crate::entropy::{EntropyError, EntropySource, OsEntropy, random_seed};
use crate::postprocess::post_process;
use crate::syllable::{Fragment, SyllableBuilder, WordState};

/// Everything produced by one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedWord {
    /// The seed that drove the run, drawn at random if none was supplied.
    pub seed: String,
    pub seed_source: SeedSource,
    /// Every emitted fragment, in order.
    pub fragments: Vec<Fragment>,
    /// The word before post-processing: the concatenation of `fragments`.
    pub raw: String,
    /// The finished word.
    pub word: String,
}

/// Deterministic word generator.
#[derive(Debug, Clone, Default)]
pub struct Generator<D = Md5Digest, E = OsEntropy> {
    hasher: NumericHasher<D>,
    entropy: E,
}

impl Generator {
    /// A generator using MD5 and the operating system's entropy source.
    pub fn new() -> Self {
        Self::with_parts(Md5Digest, OsEntropy)
    }
}

impl<D: Digest128, E: EntropySource> Generator<D, E> {
    /// A generator over injected collaborators.
    pub fn with_parts(digest: D, entropy: E) -> Self {
        Self {
            hasher: NumericHasher::new(digest),
            entropy,
        }
    }

    /// Resolve option overrides, drawing a random seed if none is set.
    pub fn resolve(&self, options: &Options) -> Result<ResolvedOptions, EntropyError> {
        options.resolve(|| random_seed(&self.entropy))
    }

    /// Generate a word.
    pub fn generate(&self, options: &Options) -> Result<String, GenerateError> {
        Ok(self.trace(options)?.word)
    }

    /// Generate a word from a JSON options document.
    pub fn generate_json(&self, document: &str) -> Result<String, GenerateError> {
        self.generate(&Options::from_json(document)?)
    }

    /// Generate a word and report how it was built.
    pub fn trace(&self, options: &Options) -> Result<GeneratedWord, GenerateError> {
        let resolved = self.resolve(options)?;
        Ok(self.trace_resolved(&resolved)?)
    }

    /// Generate a word from already resolved options.
    pub fn generate_resolved(&self, options: &ResolvedOptions) -> Result<String, HashError> {
        Ok(self.trace_resolved(options)?.word)
    }

    /// Generate a word from already resolved options and report how it was
    /// built.
    pub fn trace_resolved(&self, options: &ResolvedOptions) -> Result<GeneratedWord, HashError> {
        debug!(
            syllables = options.syllables,
            phonetic_simplicity = options.phonetic_simplicity.get(),
            compound_simplicity = options.compound_simplicity.get(),
            random_seed = options.seed_source == SeedSource::Random,
            "generating word"
        );

        let mut state = WordState::new(self.hasher.hash_str(&options.seed)?);
        let builder = SyllableBuilder::new(&self.hasher, options);
        for _ in 0..options.syllables {
            builder.add_syllable(&mut state)?;
        }

        let word = post_process(&state.word, options.cap_first);
        Ok(GeneratedWord {
            seed: options.seed.clone(),
            seed_source: options.seed_source,
            fragments: state.fragments,
            raw: state.word,
            word,
        })
    }
}

/// Generate a word with MD5 and operating system entropy.
pub fn generate(options: &Options) -> Result<String, GenerateError> {
    Generator::new().generate(options)
}
