//! Google Gemini API provider.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::AssistError;
use crate::types::*;

use super::http::{build_client, status_to_error};
use super::{ModelProvider, ProviderRequest, ProviderResponse};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GoogleProvider {
    model: String,
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl GoogleProvider {
    /// Create a provider with its own HTTP client.
    pub fn new(
        model: impl Into<String>,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, AssistError> {
        Ok(Self {
            model: model.into(),
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: build_client(timeout)?,
        })
    }

    pub(crate) fn build_request_body(&self, request: &ProviderRequest) -> serde_json::Value {
        let mut system_instruction = None;
        let mut contents = Vec::new();

        for msg in &request.messages {
            match msg.role {
                Role::System => {
                    system_instruction = Some(serde_json::json!({
                        "parts": [{"text": msg.text()}]
                    }));
                }
                Role::User => {
                    contents.push(serde_json::json!({
                        "role": "user",
                        "parts": build_gemini_parts(&msg.content),
                    }));
                }
            }
        }

        let mut body = serde_json::Map::new();
        body.insert("contents".into(), serde_json::Value::Array(contents));

        if let Some(sys) = system_instruction {
            body.insert("systemInstruction".into(), sys);
        }

        let settings = &request.settings;
        if !settings.is_empty() {
            let mut gen_config = serde_json::Map::new();
            if let Some(max) = settings.max_tokens {
                gen_config.insert("maxOutputTokens".into(), max.into());
            }
            if let Some(temp) = settings.temperature {
                gen_config.insert("temperature".into(), temp.into());
            }
            if let Some(top_p) = settings.top_p {
                gen_config.insert("topP".into(), top_p.into());
            }
            body.insert("generationConfig".into(), serde_json::Value::Object(gen_config));
        }

        serde_json::Value::Object(body)
    }
}

#[async_trait]
impl ModelProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    async fn generate_text(&self, request: &ProviderRequest) -> Result<ProviderResponse, AssistError> {
        let body = self.build_request_body(request);
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        debug!(model = %self.model, "Google generate_text");

        // Key goes in a header: reqwest errors render the request URL.
        let resp = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: GeminiResponse = serde_json::from_str(&resp.text().await?)?;

        let usage = data
            .usage_metadata
            .map(|u| Usage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            })
            .unwrap_or_default();

        // Blocked prompts come back with no candidates at all.
        let Some(candidate) = data.candidates.into_iter().next() else {
            debug!(model = %self.model, "Gemini returned no candidates");
            return Ok(ProviderResponse {
                text: String::new(),
                usage,
                finish_reason: None,
            });
        };

        let text = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let finish_reason = candidate.finish_reason.as_deref().map(FinishReason::from_gemini);

        debug!(
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            finish_reason = finish_reason.map(|r| r.to_string()),
            "Google generate_text done"
        );

        Ok(ProviderResponse {
            text,
            usage,
            finish_reason,
        })
    }
}

fn build_gemini_parts(content: &[ContentPart]) -> Vec<serde_json::Value> {
    content
        .iter()
        .map(|part| match part {
            ContentPart::Text { text } => serde_json::json!({"text": text}),
            ContentPart::Image(img) => serde_json::json!({
                "inlineData": {
                    "mimeType": img.mime_type,
                    "data": img.data,
                }
            }),
        })
        .collect()
}

// Internal Gemini response types

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}
