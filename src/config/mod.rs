// Required external crates for configuration management and serialization
use serde::Deserialize;
use std::path::{Path, PathBuf};
use config::{Config, ConfigError, Environment, File};

use crate::tokenizer::TokenizationMethod;

/// Configuration for the HTTP server
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port number to listen on
    pub port: u16,
    /// Maximum accepted request body size in bytes
    pub body_limit_bytes: usize,
}

/// Configuration for application logging
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    pub level: String,
    /// Optional log directory
    pub file: Option<PathBuf>,
}

/// Configuration for request tokenization
#[derive(Debug, Deserialize, Clone)]
pub struct TokenizerConfig {
    /// Method used when a request does not name one
    pub default_method: String,
}

/// Configuration for the optional language model
#[derive(Debug, Deserialize, Clone)]
pub struct NlpConfig {
    /// Whether to attempt loading the model at all
    pub enabled: bool,
    /// Path to the JSON lexicon backing the model
    pub lexicon: Option<PathBuf>,
}

/// Main settings struct that contains all configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Server-related settings
    pub server: ServerConfig,
    /// Logging-related settings
    pub logging: LoggingConfig,
    /// Tokenization settings
    pub tokenizer: TokenizerConfig,
    /// Language model settings
    pub nlp: NlpConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
                body_limit_bytes: 1024 * 1024,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file: None,
            },
            tokenizer: TokenizerConfig {
                default_method: "regex_word".to_string(),
            },
            nlp: NlpConfig {
                enabled: true,
                lexicon: None,
            },
        }
    }
}

/// Implementation for loading and parsing configuration
impl Settings {
    /// Creates a new Settings instance by loading config from multiple sources
    /// in the following order of precedence (highest to lowest):
    /// 1. Environment variables prefixed with TEXTKIT_
    /// 2. Local config file (local.toml) if present
    /// 3. Default config file (default.toml)
    pub fn from_dir(config_dir: &Path) -> Result<Self, ConfigError> {
        if !config_dir.exists() {
            return Err(ConfigError::Message(
                format!("Config directory not found at: {}", config_dir.display())
            ));
        }

        let default_config = config_dir.join("default.toml");
        if !default_config.exists() {
            return Err(ConfigError::Message(
                format!("Default configuration file not found at: {}", default_config.display())
            ));
        }

        let local_config = config_dir.join("local.toml");

        // Convert paths to strings and keep them alive
        let default_config_path = default_config.to_string_lossy();
        let local_config_path = local_config.to_string_lossy();

        let settings = Config::builder()
            .add_source(File::with_name(&default_config_path))
            .add_source(File::with_name(&local_config_path).required(false))
            .add_source(
                Environment::with_prefix("TEXTKIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;

        Ok(settings)
    }

    /// The method applied to requests that omit one.
    pub fn default_method(&self) -> TokenizationMethod {
        TokenizationMethod::parse(&self.tokenizer.default_method)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message(
                "Port must be between 1 and 65535, got: 0".to_string()
            ));
        }

        if self.server.body_limit_bytes == 0 {
            return Err(ConfigError::Message(
                "body_limit_bytes must be greater than 0".to_string()
            ));
        }

        if let TokenizationMethod::Unrecognized(name) = self.default_method() {
            return Err(ConfigError::Message(
                format!("Unknown default tokenization method: {}", name)
            ));
        }

        match self.logging.level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            _ => Err(ConfigError::Message(
                format!("Invalid logging level: {}. Must be one of: error, warn, info, debug, trace",
                    self.logging.level)
            )),
        }?;

        // Create log directory if configured and doesn't exist
        if let Some(log_dir) = &self.logging.file {
            if !log_dir.exists() {
                std::fs::create_dir_all(log_dir).map_err(|e| {
                    ConfigError::Message(format!(
                        "Failed to create log directory at {}: {}",
                        log_dir.display(), e
                    ))
                })?;
            }
        }

        Ok(())
    }
}
