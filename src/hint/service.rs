//! Move-hint service.
//!
//! Every outcome is a display string. Missing credentials, transport
//! failures and timeouts are turned into fixed advisory messages here so
//! that callers never see an error.

use super::prompt::HintRequest;
use crate::hint_config::HintConfig;
use crate::llm_client::{LlmClient, LlmError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Shown when no API key is configured.
pub const MISSING_KEY_MESSAGE: &str = "API Key missing. Cannot fetch hint.";

/// Shown when the provider fails or times out.
pub const FAILURE_MESSAGE: &str =
    "The AI is pondering too deeply and timed out. Rely on your instincts!";

/// Anything that can turn a prompt into advice text.
#[async_trait::async_trait]
pub trait HintProvider: Send + Sync {
    /// Generates a completion for the given prompts.
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String, LlmError>;
}

#[async_trait::async_trait]
impl HintProvider for LlmClient {
    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String, LlmError> {
        self.generate(system_prompt, user_message).await
    }
}

/// Advice for the request issued at `epoch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintResponse {
    /// Epoch of the originating request.
    pub epoch: u64,
    /// Text to show the player.
    pub text: String,
}

/// Requests move suggestions from an LLM.
#[derive(Clone)]
pub struct HintService {
    provider: Option<Arc<dyn HintProvider>>,
    timeout: Duration,
}

impl std::fmt::Debug for HintService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HintService")
            .field("configured", &self.provider.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HintService {
    /// Builds a service from configuration and the process environment.
    #[instrument(skip(config), fields(provider = ?config.provider()))]
    pub fn from_config(config: &HintConfig) -> Self {
        let provider = config
            .llm_config()
            .map(|llm| Arc::new(LlmClient::new(llm)) as Arc<dyn HintProvider>);
        info!(configured = provider.is_some(), "Hint service ready");
        Self {
            provider,
            timeout: config.timeout(),
        }
    }

    /// Builds a service around an existing provider.
    pub fn with_provider(provider: Arc<dyn HintProvider>, timeout: Duration) -> Self {
        Self {
            provider: Some(provider),
            timeout,
        }
    }

    /// Builds a service with no credential; every hint is the missing-key message.
    pub fn unconfigured() -> Self {
        Self {
            provider: None,
            timeout: Duration::ZERO,
        }
    }

    /// True if a provider is available.
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Asks the provider for advice. Never fails.
    #[instrument(skip(self, request), fields(epoch = request.epoch, player = %request.current))]
    pub async fn request_hint(&self, request: HintRequest) -> HintResponse {
        let text = match &self.provider {
            None => {
                debug!("No provider configured");
                MISSING_KEY_MESSAGE.to_string()
            }
            Some(provider) => {
                let system_prompt = request.system_prompt();
                let user_message = request.user_message();
                let call = provider.complete(&system_prompt, &user_message);

                match tokio::time::timeout(self.timeout, call).await {
                    Ok(Ok(text)) => {
                        info!(length = text.len(), "Hint received");
                        text.trim().to_string()
                    }
                    Ok(Err(e)) => {
                        warn!(error = %e, "Hint request failed");
                        FAILURE_MESSAGE.to_string()
                    }
                    Err(_) => {
                        warn!(timeout = ?self.timeout, "Hint request timed out");
                        FAILURE_MESSAGE.to_string()
                    }
                }
            }
        };

        HintResponse {
            epoch: request.epoch,
            text,
        }
    }
}
