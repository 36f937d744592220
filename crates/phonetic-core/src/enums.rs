// Shared enums: fragment slots within a syllable

use std::fmt;

/// Position of a fragment within a syllable.
///
/// Every syllable carries at most one `Pre`, exactly one `Mid` and at most
/// one `Post` fragment, emitted in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    /// Consonant opener, sounds best before a vowel.
    Pre,
    /// Vowel sound.
    Mid,
    /// Consonant closer, sounds best after a vowel.
    Post,
}

impl Slot {
    /// All slots in emission order.
    pub const ALL: [Slot; 3] = [Slot::Pre, Slot::Mid, Slot::Post];

    /// Lowercase name used in logs and traces.
    pub fn name(self) -> &'static str {
        match self {
            Slot::Pre => "pre",
            Slot::Mid => "mid",
            Slot::Post => "post",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
