mod lexicon;
pub mod types;

pub use lexicon::LexiconModel;
pub use types::{EntitySpan, ModelToken, PosTag};

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::NlpConfig;
use crate::error::Result;

/// Trait defining the interface for an optional linguistic model
pub trait LanguageModel: Send + Sync {
    /// Short name used in logs and on the index page
    fn name(&self) -> &str;

    /// Segment text into tagged tokens
    fn tokenize(&self, text: &str) -> Result<Vec<ModelToken>>;

    /// Extract named entities from text previously segmented by `tokenize`
    fn entities(&self, text: &str, tokens: &[ModelToken]) -> Result<Vec<EntitySpan>>;
}

/// Handle to the language model, resolved once at startup.
///
/// An engine without a model is a valid, permanently degraded engine.
#[derive(Clone, Default)]
pub struct NlpEngine {
    model: Option<Arc<dyn LanguageModel>>,
}

impl NlpEngine {
    /// An engine running in degraded mode
    pub fn unavailable() -> Self {
        Self { model: None }
    }

    pub fn with_model<M: LanguageModel + 'static>(model: M) -> Self {
        Self {
            model: Some(Arc::new(model)),
        }
    }

    /// Loads the model described by the configuration. Load failures are
    /// logged and leave the engine degraded.
    pub fn from_config(config: &NlpConfig) -> Self {
        if !config.enabled {
            info!("Language model disabled by configuration");
            return Self::unavailable();
        }

        let path = match &config.lexicon {
            Some(path) => path,
            None => {
                warn!("No lexicon configured. Advanced NLP features will be disabled.");
                return Self::unavailable();
            }
        };

        match LexiconModel::load(path) {
            Ok(model) => {
                info!("Language model loaded from {}", path.display());
                Self::with_model(model)
            }
            Err(e) => {
                warn!("Language model not loaded, running in basic mode: {}", e);
                Self::unavailable()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    pub fn model(&self) -> Option<&dyn LanguageModel> {
        self.model.as_deref()
    }
}
