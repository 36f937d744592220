// Post-processing: ordered replacement rules and capitalization
//
// The raw word is passed through a fixed, ordered list of regular
// expression rules. Each rule replaces at most its first match. Order is
// significant: an earlier rule can create or destroy a match for a later
// one, so the list is a slice rather than a map.

use std::borrow::Cow;
use std::sync::OnceLock;

use phonetic_core::case::apply_cap_first;
use regex::Regex;

/// A single pattern -> replacement rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement {
    /// Pattern in `regex` crate syntax.
    pub pattern: &'static str,
    /// Replacement template; `${n}` refers to capture group `n`.
    pub replacement: &'static str,
    /// Skip a match that reaches the end of the word. Stands in for a
    /// trailing `(?!$)` look-ahead, which the `regex` crate cannot express.
    pub not_at_end: bool,
}

const fn rule(pattern: &'static str, replacement: &'static str) -> Replacement {
    Replacement {
        pattern,
        replacement,
        not_at_end: false,
    }
}

/// The replacement rules, in application order.
pub const REPLACEMENTS: &[Replacement] = &[
    rule("quu", "que"),
    rule("qu([aeiou]){2}", "qu${1}"),
    rule("[iu]y", "ey"),
    rule("eye", "ye"),
    rule("(.)ye$", "${1}y"),
    Replacement {
        pattern: "(^|e)cie",
        replacement: "${1}cei",
        not_at_end: true,
    },
    rule("([vz])$", "${1}e"),
    rule("[iu]w", "ow"),
];

impl Replacement {
    /// Apply this rule to the first eligible match in `word`.
    pub fn apply<'w>(&self, word: &'w str) -> Cow<'w, str> {
        match compiled_rules().iter().find(|(rule, _)| rule == self) {
            Some((_, regex)) => self.apply_with(regex, word),
            None => self.apply_with(&compile(self.pattern), word),
        }
    }

    fn apply_with<'w>(&self, regex: &Regex, word: &'w str) -> Cow<'w, str> {
        let eligible = regex.captures_iter(word).find(|caps| {
            caps.get(0)
                .is_some_and(|m| !(self.not_at_end && m.end() == word.len()))
        });
        let Some(caps) = eligible else {
            return Cow::Borrowed(word);
        };
        let Some(whole) = caps.get(0) else {
            return Cow::Borrowed(word);
        };

        let mut out = String::with_capacity(word.len() + self.replacement.len());
        out.push_str(&word[..whole.start()]);
        caps.expand(self.replacement, &mut out);
        out.push_str(&word[whole.end()..]);
        Cow::Owned(out)
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|error| panic!("replacement pattern {pattern:?} failed to compile: {error}"))
}

/// The rules in [`REPLACEMENTS`], compiled once.
fn compiled_rules() -> &'static [(Replacement, Regex)] {
    static RULES: OnceLock<Vec<(Replacement, Regex)>> = OnceLock::new();
    RULES.get_or_init(|| {
        REPLACEMENTS
            .iter()
            .map(|rule| (*rule, compile(rule.pattern)))
            .collect()
    })
}

/// Apply every replacement rule once, in order.
pub fn apply_replacements(word: &str) -> String {
    compiled_rules()
        .iter()
        .fold(word.to_string(), |acc, (rule, regex)| {
            rule.apply_with(regex, &acc).into_owned()
        })
}

/// Apply the replacement rules, then capitalize the first letter if
/// `cap_first` is set.
pub fn post_process(word: &str, cap_first: bool) -> String {
    apply_cap_first(apply_replacements(word), cap_first)
}
