//! Interlinear bilingual rendering of project text.

use tracing::{debug, error, warn};

use crate::config::AssistConfig;
use crate::error::Result;
use crate::provider::{create_provider, ModelProvider, ProviderRequest};
use crate::types::{GenerationSettings, ModelMessage};

use super::require_text;

/// System-level instruction attached to every translation request.
pub const TRANSLATION_SYSTEM_INSTRUCTION: &str = "你是一位專精營建工程的雙語翻譯專家，\
    熟悉工地施工、建材、機電與工安相關術語，負責在繁體中文與英文之間進行準確、專業的對照翻譯。";

const TRANSLATION_RULES: &str = "\
請將以下工程內容整理成中英對照格式，並遵守下列規則：
1. 保留原文的每一行，不要改寫或刪除原文。
2. 在每一行或每一段原文的正下方，附上對應的翻譯。
3. 保留原本的條列、編號與段落結構。
4. 直接輸出對照結果，不要加入任何開場白、說明或結語。
5. 如果內容已經是雙語對照，請依照上述格式重新整理，不要重複翻譯。";

/// Generation settings sent with every translation request.
pub fn translation_settings() -> GenerationSettings {
    GenerationSettings::builder().temperature(0.2).build()
}

/// Full user prompt for `text`.
pub fn build_translation_prompt(text: &str) -> String {
    format!("{TRANSLATION_RULES}\n\n內容：\n{text}")
}

/// Ask `provider` for a bilingual version of `text`.
///
/// Blank input yields an empty string without contacting the provider.
pub async fn translate(provider: &dyn ModelProvider, text: &str) -> Result<String> {
    if text.trim().is_empty() {
        return Ok(String::new());
    }
    debug!(chars = text.chars().count(), "translate");

    let request = ProviderRequest::new(vec![
        ModelMessage::system(TRANSLATION_SYSTEM_INSTRUCTION),
        ModelMessage::user(build_translation_prompt(text)),
    ])
    .with_settings(translation_settings());
    let response = provider.generate_text(&request).await?;
    require_text(response)
}

/// Translate project text with a provider built from `config`.
///
/// Blank input returns `""`. On any failure the original `text` is returned
/// unchanged.
pub async fn translate_project_content(config: &AssistConfig, text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let result = match create_provider(config) {
        Ok(provider) => translate(provider.as_ref(), text).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(translated) => translated,
        Err(err) if err.is_empty_response() => {
            warn!(model = config.model(), "Translation returned no text, keeping original");
            text.to_string()
        }
        Err(err) => {
            error!(model = config.model(), error = %err, "Translation failed, keeping original");
            text.to_string()
        }
    }
}
