//! Configuration for the move-hint service.

use crate::llm_client::{LlmConfig, LlmProvider};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Settings for the LLM that suggests moves.
///
/// Loaded from TOML; every field is optional. The API key itself is never
/// stored here, only the name of the environment variable that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HintConfig {
    /// LLM provider (gemini, openai or anthropic).
    #[serde(default)]
    provider: LlmProvider,

    /// Model name; defaults per provider.
    #[serde(default)]
    model: Option<String>,

    /// Maximum tokens for the hint text.
    #[serde(default = "default_max_tokens")]
    max_tokens: u32,

    /// Seconds to wait for the provider before giving up.
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,

    /// Environment variable holding the API key; defaults per provider.
    #[serde(default)]
    api_key_env: Option<String>,
}

#[instrument]
fn default_max_tokens() -> u32 {
    150
}

#[instrument]
fn default_timeout_secs() -> u64 {
    20
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            model: None,
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
            api_key_env: None,
        }
    }
}

impl HintConfig {
    /// Creates a configuration for `provider` with default settings.
    pub fn for_provider(provider: LlmProvider) -> Self {
        Self {
            provider,
            ..Self::default()
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading hint config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(provider = ?config.provider, "Hint config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Hint config not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Model to request, falling back to the provider default.
    pub fn model_name(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    /// Environment variable that holds the API key.
    pub fn key_var(&self) -> &str {
        self.api_key_env
            .as_deref()
            .unwrap_or_else(|| self.provider.default_key_var())
    }

    /// Provider timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Builds the LLM configuration from the process environment.
    ///
    /// Returns `None` when the key variable is unset or blank; a missing
    /// credential is an expected state, not an error.
    #[instrument(skip(self), fields(provider = ?self.provider, key_var = %self.key_var()))]
    pub fn llm_config(&self) -> Option<LlmConfig> {
        let api_key = match std::env::var(self.key_var()) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => {
                warn!("No API key in environment; hints disabled");
                return None;
            }
        };

        Some(LlmConfig::new(
            self.provider,
            api_key,
            self.model_name().to_string(),
            self.max_tokens,
        ))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
