//! Construction photo analysis.

use tracing::{debug, error, warn};

use crate::config::AssistConfig;
use crate::error::{AssistError, Result};
use crate::provider::{create_provider, ModelProvider, ProviderRequest};
use crate::types::{EncodedImage, GenerationSettings, ModelMessage};

use super::require_text;

/// Instruction sent alongside every photo.
pub const ANALYSIS_PROMPT: &str = "請分析這張工地照片：辨識目前的施工階段、使用的主要建材，\
    並指出任何潛在的安全隱患。請簡明扼要地回答。";

/// Returned when the service answered without text.
pub const NO_ANALYSIS_MESSAGE: &str = "無法分析圖片";

/// Returned when the call failed.
pub const ANALYSIS_FAILED_MESSAGE: &str = "分析失敗，請稍後再試。";

/// Output cap for an analysis; the prompt asks for a concise answer.
pub const ANALYSIS_MAX_TOKENS: u32 = 1024;

/// Generation settings sent with every photo.
pub fn analysis_settings() -> GenerationSettings {
    GenerationSettings::builder()
        .max_tokens(ANALYSIS_MAX_TOKENS)
        .temperature(0.4)
        .build()
}

/// Ask `provider` to analyze a site photo.
///
/// `image` is bare base64 or a data URL. Malformed input fails before any
/// request is made; blank answers fail with [`AssistError::EmptyResponse`].
pub async fn analyze_photo(provider: &dyn ModelProvider, image: &str) -> Result<String> {
    let image = EncodedImage::parse(image)?;
    debug!(
        media_type = image.media_type(),
        payload_len = image.data().len(),
        "analyze_photo"
    );

    let request = ProviderRequest::new(vec![ModelMessage::user_with_image(
        image.into_content(),
        ANALYSIS_PROMPT,
    )])
    .with_settings(analysis_settings());
    let response = provider.generate_text(&request).await?;
    require_text(response)
}

/// Fallback message for a failed analysis.
pub fn photo_fallback(err: &AssistError) -> &'static str {
    if err.is_empty_response() {
        NO_ANALYSIS_MESSAGE
    } else {
        ANALYSIS_FAILED_MESSAGE
    }
}

/// Analyze a site photo with a provider built from `config`.
///
/// Always returns display text; failures are logged and replaced with
/// [`photo_fallback`].
pub async fn analyze_construction_photo(config: &AssistConfig, image: &str) -> String {
    let result = match create_provider(config) {
        Ok(provider) => analyze_photo(provider.as_ref(), image).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(text) => text,
        Err(err) if err.is_empty_response() => {
            warn!(model = config.model(), "Photo analysis returned no text");
            photo_fallback(&err).to_string()
        }
        Err(err) => {
            error!(model = config.model(), error = %err, "Photo analysis failed");
            photo_fallback(&err).to_string()
        }
    }
}
