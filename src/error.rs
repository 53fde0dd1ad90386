//! Error types for tokenization and analysis

use thiserror::Error;

/// Failures reported back to callers in the `error` field of a response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// The request carried no text
    #[error("No text provided")]
    EmptyInput,

    /// The tokenization method name is not one we know
    #[error("Invalid tokenization method")]
    InvalidMethod(String),

    /// A model-backed feature was requested but no model is loaded
    #[error("Language model is not available. Please install it for this feature.")]
    ModelUnavailable,

    /// The language model failed while processing the text
    #[error("{0}")]
    Model(String),

    /// The request body could not be read
    #[error("Invalid request body: {0}")]
    InvalidRequest(String),
}

/// Result type for tokenization and analysis
pub type Result<T> = std::result::Result<T, TextError>;
