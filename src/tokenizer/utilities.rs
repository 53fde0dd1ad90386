use once_cell::sync::Lazy;
use regex::Regex;

/// A run of word characters: letters, numerics and underscore. Combining
/// marks and other connector punctuation end a word.
pub static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}_]+").unwrap()
});

/// Sentence-final punctuation followed by the whitespace run we split on
pub static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?](\s+)").unwrap()
});
