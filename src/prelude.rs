//! Convenience re-exports.

pub use crate::adapters::photo::{analyze_construction_photo, analyze_photo, photo_fallback};
pub use crate::adapters::translation::{translate, translate_project_content};
pub use crate::config::AssistConfig;
pub use crate::error::{AssistError, Result};
pub use crate::provider::{create_provider, ModelProvider, ProviderRequest, ProviderResponse};
pub use crate::types::*;
