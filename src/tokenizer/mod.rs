mod method;
mod strategy;
pub mod utilities;

pub use method::TokenizationMethod;
pub use strategy::{ModelTokenizer, SentenceTokenizer, TokenizerStrategy, WordTokenizer};

use crate::error::{Result, TextError};
use crate::nlp::NlpEngine;
use utilities::{SENTENCE_BOUNDARY, WORD_PATTERN};

/// Every maximal run of word characters, left to right
pub fn tokenize_words(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Splits after `.`, `!` or `?` when followed by whitespace; segments are
/// trimmed and empty ones dropped.
pub fn tokenize_sentences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    for caps in SENTENCE_BOUNDARY.captures_iter(text) {
        // Group 1 always participates in a match
        let Some(gap) = caps.get(1) else { continue };
        sentences.push(&text[start..gap.start()]);
        start = gap.end();
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// A tokenizer bound to one method
pub struct Tokenizer {
    strategy: Box<dyn TokenizerStrategy>,
}

impl Tokenizer {
    /// Resolves the strategy for `method`. Fails for unknown methods and for
    /// model tokenization when no model is loaded.
    pub fn new(method: TokenizationMethod, engine: &NlpEngine) -> Result<Self> {
        let strategy: Box<dyn TokenizerStrategy> = match method {
            TokenizationMethod::Word => Box::new(WordTokenizer),
            TokenizationMethod::Sentence => Box::new(SentenceTokenizer),
            TokenizationMethod::Model => match engine.model() {
                Some(_) => Box::new(ModelTokenizer::new(engine.clone())),
                None => return Err(TextError::ModelUnavailable),
            },
            TokenizationMethod::Unrecognized(name) => {
                return Err(TextError::InvalidMethod(name))
            }
        };

        Ok(Self { strategy })
    }

    // Delegate to the strategy
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        self.strategy.tokenize(text)
    }
}
