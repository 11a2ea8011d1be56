//! Model provider trait and the Gemini implementation.

pub mod google;
pub mod http;

use async_trait::async_trait;

use crate::config::AssistConfig;
use crate::error::AssistError;
use crate::types::{FinishReason, GenerationSettings, ModelMessage, Usage};

/// A request sent to a model provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    pub messages: Vec<ModelMessage>,
    pub settings: GenerationSettings,
}

impl ProviderRequest {
    pub fn new(messages: Vec<ModelMessage>) -> Self {
        Self {
            messages,
            settings: GenerationSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// Response from a provider.
///
/// `text` is empty when the service answered without any text parts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderResponse {
    pub text: String,
    pub usage: Usage,
    pub finish_reason: Option<FinishReason>,
}

/// Core trait implemented by model providers.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Provider name (e.g., "google").
    fn provider_name(&self) -> &str;
    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Generate text (non-streaming).
    async fn generate_text(&self, request: &ProviderRequest)
        -> Result<ProviderResponse, AssistError>;
}

/// Build a fresh provider from `config`.
///
/// Called once per adapter invocation, so key changes take effect on the next
/// call.
pub fn create_provider(config: &AssistConfig) -> Result<Box<dyn ModelProvider>, AssistError> {
    let api_key = config
        .api_key()
        .ok_or_else(|| AssistError::Authentication("Missing GEMINI_API_KEY".into()))?;
    Ok(Box::new(google::GoogleProvider::new(
        config.model(),
        api_key,
        config.base_url(),
        config.timeout(),
    )?))
}
