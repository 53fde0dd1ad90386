mod frequency;

pub use frequency::WordFrequency;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, TextError};
use crate::nlp::{EntitySpan, LanguageModel, NlpEngine, PosTag};
use crate::tokenizer::tokenize_words;

/// Notice attached to results produced without the language model
pub const DEGRADED_NOTICE: &str =
    "Language model is not available. Only basic analysis is provided.";

/// A token paired with its part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedToken {
    pub text: String,
    pub pos: PosTag,
}

/// Output of a text analysis
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisResult {
    pub entities: Vec<EntitySpan>,
    pub pos_tags: Vec<TaggedToken>,
    pub word_frequency: WordFrequency,
    /// True when the language model was not used
    pub degraded: bool,
}

impl AnalysisResult {
    /// The advisory message for degraded results
    pub fn notice(&self) -> Option<&'static str> {
        self.degraded.then_some(DEGRADED_NOTICE)
    }
}

/// Analyzes `text`, using the language model when the engine has one.
pub fn analyze(engine: &NlpEngine, text: &str) -> Result<AnalysisResult> {
    if text.is_empty() {
        return Err(TextError::EmptyInput);
    }

    match engine.model() {
        Some(model) => analyze_with_model(model, text),
        None => Ok(analyze_basic(text)),
    }
}

fn analyze_with_model(model: &dyn LanguageModel, text: &str) -> Result<AnalysisResult> {
    let tokens = model.tokenize(text)?;
    let entities = model.entities(text, &tokens)?;
    debug!(
        "Model {} produced {} tokens and {} entities",
        model.name(),
        tokens.len(),
        entities.len()
    );

    let pos_tags = tokens
        .iter()
        .map(|t| TaggedToken {
            text: t.text.clone(),
            pos: t.pos,
        })
        .collect();

    let word_frequency = WordFrequency::from_words(
        tokens
            .iter()
            .filter(|t| t.is_word())
            .map(|t| t.text.to_lowercase()),
    );

    Ok(AnalysisResult {
        entities,
        pos_tags,
        word_frequency,
        degraded: false,
    })
}

fn analyze_basic(text: &str) -> AnalysisResult {
    let words = tokenize_words(&text.to_lowercase());
    AnalysisResult {
        entities: Vec::new(),
        pos_tags: Vec::new(),
        word_frequency: WordFrequency::from_words(words),
        degraded: true,
    }
}
