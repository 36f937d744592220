// First-letter capitalization for finished words

/// Uppercase the first character of `word`, leaving the rest untouched.
///
/// Unlike a title-case conversion, the remaining characters keep whatever
/// case they already have. An empty word is returned unchanged.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Apply [`capitalize_first`] only when `cap_first` is set.
pub fn apply_cap_first(word: String, cap_first: bool) -> String {
    if cap_first {
        capitalize_first(&word)
    } else {
        word
    }
}
