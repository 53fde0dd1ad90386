//! Text tokenization and analysis over HTTP.
//!
//! Word and sentence tokenization are pattern based and always available.
//! Entity extraction and part-of-speech tagging need the optional language
//! model; without it the service runs in a basic mode.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod nlp;
pub mod server;
pub mod tokenizer;

pub use error::{Result, TextError};
