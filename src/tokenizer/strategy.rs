use crate::error::{Result, TextError};
use crate::nlp::NlpEngine;

/// Trait defining the interface for all tokenizer implementations
pub trait TokenizerStrategy: Send + Sync {
    /// Split text into tokens
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

/// Pattern-based word tokenizer
pub struct WordTokenizer;

impl TokenizerStrategy for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(super::tokenize_words(text))
    }
}

/// Pattern-based sentence tokenizer
pub struct SentenceTokenizer;

impl TokenizerStrategy for SentenceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(super::tokenize_sentences(text))
    }
}

/// Tokenizer that defers to the loaded language model
pub struct ModelTokenizer {
    engine: NlpEngine,
}

impl ModelTokenizer {
    pub fn new(engine: NlpEngine) -> Self {
        Self { engine }
    }
}

impl TokenizerStrategy for ModelTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let model = self.engine.model().ok_or(TextError::ModelUnavailable)?;
        let tokens = model.tokenize(text)?;
        Ok(tokens.into_iter().map(|t| t.text).collect())
    }
}
