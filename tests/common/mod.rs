//! Shared test helpers and mock provider.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use siteassist::error::AssistError;
use siteassist::provider::{ModelProvider, ProviderRequest, ProviderResponse};
use siteassist::types::*;

/// What the mock answers on every call.
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    Status(u16, String),
}

/// A deterministic provider: same reply every call, requests recorded.
pub struct MockProvider {
    reply: MockReply,
    calls: AtomicUsize,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl MockProvider {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(MockReply::Text(text.to_string()))
    }

    pub fn empty() -> Self {
        Self::replying("")
    }

    pub fn failing(status: u16) -> Self {
        Self::new(MockReply::Status(status, "mock failure".to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ProviderRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ModelProvider for MockProvider {
    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_id(&self) -> &str {
        "mock-model"
    }

    async fn generate_text(&self, request: &ProviderRequest) -> Result<ProviderResponse, AssistError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            MockReply::Text(text) => Ok(ProviderResponse {
                text: text.clone(),
                usage: Usage {
                    input_tokens: 10,
                    output_tokens: 20,
                    total_tokens: 30,
                },
                finish_reason: Some(FinishReason::Stop),
            }),
            MockReply::Status(status, message) => Err(AssistError::api(*status, message.clone())),
        }
    }
}

/// Gemini `generateContent` success body with a single text part.
pub fn gemini_text_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 12,
            "candidatesTokenCount": 7,
            "totalTokenCount": 19
        }
    })
}
