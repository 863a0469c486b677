/// Characters that may trail a keyword. No other character is stripped.
pub const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

pub fn is_trailing_punctuation(c: char) -> bool {
    TRAILING_PUNCTUATION.contains(&c)
}

/// Strip the maximal trailing run of punctuation.
///
/// Returns `None` when nothing is left, i.e. the word was empty or made
/// entirely of punctuation.
pub fn strip_trailing(word: &str) -> Option<&str> {
    let stripped = word.trim_end_matches(is_trailing_punctuation);
    if stripped.is_empty() {
        None
    } else {
        Some(stripped)
    }
}
