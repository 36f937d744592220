// Syllable state machine and fragment selection
//
// A syllable is built from at most one PRE, exactly one MID and at most one
// POST fragment. Two flags carried between syllables chain pronounceability
// across syllable boundaries: a syllable that ended without a closing
// consonant forces the next one to open with a consonant, and a syllable
// that opened without one forces a closing consonant.
//
// Each emitted fragment advances the numeric state. The order of operations
// per fragment is fixed:
//   1. choose the index from the current state
//   2. append the fragment to the word
//   3. re-hash `<old state as decimal><word including the new fragment>`
// Reordering any of these changes every word after the first fragment.

use std::num::NonZeroU64;

use phonetic_core::enums::Slot;
use phonetic_core::options::ResolvedOptions;
use phonetic_hash::{Digest128, HashError, Numeric, NumericHasher, derivative};
use tracing::trace;

use crate::tables::{MID, POST, PRE, PhoneticTable};

/// Divisor applied to the derivative when deciding whether the very first
/// syllable opens with a consonant.
const PRE_ON_FIRST_DIVISOR: Numeric = 6;

/// One fragment emitted into a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fragment {
    pub slot: Slot,
    /// Index into the slot's table.
    pub index: usize,
    pub text: &'static str,
}

/// Mutable state of a single generation run.
///
/// Created fresh for every word and never shared between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordState {
    /// The sole source of pseudo-randomness; re-derived after every fragment.
    pub numeric: Numeric,
    /// The raw word accumulated so far.
    pub word: String,
    /// Whether the previous syllable omitted its PRE fragment.
    pub last_skipped_pre: bool,
    /// Whether the previous syllable omitted its POST fragment.
    pub last_skipped_post: bool,
    /// Every fragment emitted so far, in order.
    pub fragments: Vec<Fragment>,
}

impl WordState {
    pub fn new(numeric: Numeric) -> Self {
        Self {
            numeric,
            word: String::new(),
            last_skipped_pre: false,
            last_skipped_post: false,
            fragments: Vec::new(),
        }
    }
}

/// Choose a fragment index for the given numeric state.
///
/// The fragment is drawn from the whole table unless the state selects
/// "simple" mode or `force_simple` is set, in which case only the simple
/// prefix of the table is reachable.
pub fn select_index(
    numeric: Numeric,
    table: &PhoneticTable,
    phonetic_simplicity: NonZeroU64,
    force_simple: bool,
) -> usize {
    let deriv = derivative(numeric);
    // widened so the sum is exact for any state
    let sum = u128::from(numeric) + u128::from(deriv);
    let simple = sum % u128::from(phonetic_simplicity.get()) > 0;
    let cap = if simple || force_simple {
        table.simple_len
    } else {
        table.len()
    };
    (numeric % cap as Numeric) as usize
}

/// Builds syllables into a [`WordState`] under a fixed option set.
pub struct SyllableBuilder<'a, D> {
    hasher: &'a NumericHasher<D>,
    options: &'a ResolvedOptions,
}

impl<'a, D: Digest128> SyllableBuilder<'a, D> {
    pub fn new(hasher: &'a NumericHasher<D>, options: &'a ResolvedOptions) -> Self {
        Self { hasher, options }
    }

    /// Append one syllable to `state`.
    pub fn add_syllable(&self, state: &mut WordState) -> Result<(), HashError> {
        let deriv = derivative(state.numeric);
        let compound = deriv % self.options.compound_simplicity.get() == 0;
        let first = state.word.is_empty();
        let pre_on_first = deriv % PRE_ON_FIRST_DIVISOR > 0;

        if (first && pre_on_first) || state.last_skipped_post || compound {
            self.emit(state, &PRE, false)?;
            state.last_skipped_pre = false;
        } else {
            state.last_skipped_pre = true;
        }

        // A word that starts without a consonant opens on a plain vowel.
        self.emit(state, &MID, first && state.last_skipped_pre)?;

        if state.last_skipped_pre || compound {
            self.emit(state, &POST, false)?;
            state.last_skipped_post = false;
        } else {
            state.last_skipped_post = true;
        }

        Ok(())
    }

    /// Select a fragment from `table`, append it and advance the state.
    fn emit(
        &self,
        state: &mut WordState,
        table: &PhoneticTable,
        force_simple: bool,
    ) -> Result<Fragment, HashError> {
        let index = select_index(
            state.numeric,
            table,
            self.options.phonetic_simplicity,
            force_simple,
        );
        let fragment = Fragment {
            slot: table.slot,
            index,
            text: table.fragments[index],
        };

        state.word.push_str(fragment.text);
        state.fragments.push(fragment);
        let previous = state.numeric;
        state.numeric = self.hasher.advance(previous, &state.word)?;

        trace!(
            slot = %fragment.slot,
            index,
            fragment = fragment.text,
            numeric = previous,
            "emitted fragment"
        );
        Ok(fragment)
    }
}
