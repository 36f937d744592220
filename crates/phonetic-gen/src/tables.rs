// Phonetic fragment tables
//
// Three fixed, ordered lists of letter sequences. Each list starts with a
// "simple" part (single letters or traditional sounds) followed by a
// "complex" part (letter clusters). The boundary index and the order of
// every entry are part of the output contract: changing either changes
// every generated word.

use phonetic_core::enums::Slot;

/// An ordered fragment table split into a simple prefix and complex rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneticTable {
    pub slot: Slot,
    pub fragments: &'static [&'static str],
    /// Number of leading fragments that count as simple.
    pub simple_len: usize,
}

impl PhoneticTable {
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.fragments.get(index).copied()
    }

    pub fn simple(&self) -> &'static [&'static str] {
        &self.fragments[..self.simple_len]
    }

    pub fn complex(&self) -> &'static [&'static str] {
        &self.fragments[self.simple_len..]
    }

    /// Index of `fragment` in the table, if present.
    pub fn position(&self, fragment: &str) -> Option<usize> {
        self.fragments.iter().position(|f| *f == fragment)
    }
}

/// Consonant openers, sound best before a vowel.
pub const PRE: PhoneticTable = PhoneticTable {
    slot: Slot::Pre,
    fragments: &[
        // simple
        "b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "n", "p", "qu", "r", "s", "t",
        // complex
        "bl", "ch", "cl", "cr", "dr", "fl", "fr", "gl", "gr", "kl", "kr", "ph", "pr", "pl", "sc",
        "sh", "sl", "sn", "sr", "st", "str", "sw", "th", "tr", "br", "v", "w", "y", "z",
    ],
    simple_len: 16,
};

/// Vowel sounds.
pub const MID: PhoneticTable = PhoneticTable {
    slot: Slot::Mid,
    fragments: &[
        // simple
        "a", "e", "i", "o", "u",
        // complex
        "ee", "ie", "io", "oo", "ou", "ue",
    ],
    simple_len: 5,
};

/// Consonant closers, sound best after a vowel.
pub const POST: PhoneticTable = PhoneticTable {
    slot: Slot::Post,
    fragments: &[
        // simple
        "b", "d", "f", "g", "k", "l", "m", "n", "p", "r", "s", "t", "y",
        // complex
        "ch", "ck", "ln", "nk", "ng", "rn", "sh", "sk", "st", "th", "x", "z",
    ],
    simple_len: 13,
};

/// The table serving `slot`.
pub fn table(slot: Slot) -> &'static PhoneticTable {
    match slot {
        Slot::Pre => &PRE,
        Slot::Mid => &MID,
        Slot::Post => &POST,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_boundaries() {
        assert_eq!(PRE.simple_len, 16);
        assert_eq!(MID.simple_len, 5);
        assert_eq!(POST.simple_len, 13);
    }

    #[test]
    fn table_sizes() {
        assert_eq!(PRE.len(), 45);
        assert_eq!(MID.len(), 11);
        assert_eq!(POST.len(), 25);
    }

    #[test]
    fn boundaries_lie_inside_tables() {
        for slot in Slot::ALL {
            let t = table(slot);
            assert_eq!(t.slot, slot);
            assert!(t.simple_len > 0 && t.simple_len < t.len());
            assert_eq!(t.simple().len() + t.complex().len(), t.len());
        }
    }

    #[test]
    fn simple_parts() {
        assert_eq!(MID.simple(), &["a", "e", "i", "o", "u"]);
        assert_eq!(PRE.simple().last(), Some(&"t"));
        assert_eq!(PRE.complex().first(), Some(&"bl"));
        assert_eq!(POST.simple().last(), Some(&"y"));
        assert_eq!(POST.complex().first(), Some(&"ch"));
    }

    #[test]
    fn fragments_are_lowercase_ascii_letters() {
        for slot in Slot::ALL {
            for fragment in table(slot).fragments {
                assert!(!fragment.is_empty());
                assert!(fragment.chars().all(|c| c.is_ascii_lowercase()), "{fragment}");
            }
        }
    }

    #[test]
    fn fragments_are_unique_within_table() {
        for slot in Slot::ALL {
            let t = table(slot);
            for (i, fragment) in t.fragments.iter().enumerate() {
                assert_eq!(t.position(fragment), Some(i), "duplicate {fragment} in {slot}");
            }
        }
    }

    #[test]
    fn get_out_of_range() {
        assert_eq!(MID.get(4), Some("u"));
        assert_eq!(MID.get(11), None);
    }
}
