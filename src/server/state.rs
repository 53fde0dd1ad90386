use crate::config::Settings;
use crate::nlp::NlpEngine;
use crate::tokenizer::TokenizationMethod;

/// Read-only state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: NlpEngine,
    pub default_method: TokenizationMethod,
}

impl AppState {
    pub fn new(engine: NlpEngine, default_method: TokenizationMethod) -> Self {
        Self {
            engine,
            default_method,
        }
    }

    pub fn from_settings(settings: &Settings, engine: NlpEngine) -> Self {
        Self::new(engine, settings.default_method())
    }

    pub fn model_available(&self) -> bool {
        self.engine.is_available()
    }
}
