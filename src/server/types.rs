use serde::{Deserialize, Serialize};

use crate::analyzer::{AnalysisResult, TaggedToken, WordFrequency};
use crate::error::TextError;
use crate::nlp::EntitySpan;

/// Request to tokenize text
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TokenizeRequest {
    /// Absent and `null` both count as no text
    #[serde(default)]
    pub text: Option<String>,
    /// Wire name of the method; the configured default applies when absent
    #[serde(default)]
    pub method: Option<String>,
}

/// Response for tokenization
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TokenizeResponse {
    pub tokens: Vec<String>,
    pub count: usize,
    pub error: Option<String>,
}

impl TokenizeResponse {
    pub fn success(tokens: Vec<String>) -> Self {
        Self {
            count: tokens.len(),
            tokens,
            error: None,
        }
    }

    pub fn failure(error: &TextError) -> Self {
        Self {
            tokens: Vec::new(),
            count: 0,
            error: Some(error.to_string()),
        }
    }
}

/// Request to analyze text
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl TokenizeRequest {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

impl AnalyzeRequest {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

/// Response for analysis
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AnalyzeResponse {
    pub entities: Vec<EntitySpan>,
    pub pos_tags: Vec<TaggedToken>,
    pub word_frequency: WordFrequency,
    pub error: Option<String>,
}

impl AnalyzeResponse {
    pub fn failure(error: &TextError) -> Self {
        Self {
            entities: Vec::new(),
            pos_tags: Vec::new(),
            word_frequency: WordFrequency::default(),
            error: Some(error.to_string()),
        }
    }
}

impl From<AnalysisResult> for AnalyzeResponse {
    fn from(result: AnalysisResult) -> Self {
        let error = result.notice().map(str::to_string);
        Self {
            entities: result.entities,
            pos_tags: result.pos_tags,
            word_frequency: result.word_frequency,
            error,
        }
    }
}

/// Response for the health endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_available: bool,
}
