//! Request/response adapters over a [`ModelProvider`](crate::provider::ModelProvider).
//!
//! Each adapter has a core returning [`Result`](crate::error::Result), usable
//! with any provider, and an entry point that builds a provider from config
//! and never fails: errors are logged and replaced with a fallback.

pub mod photo;
pub mod translation;

use crate::error::{AssistError, Result};
use crate::provider::ProviderResponse;

/// Treat blank response text as [`AssistError::EmptyResponse`].
pub(crate) fn require_text(response: ProviderResponse) -> Result<String> {
    if response.text.trim().is_empty() {
        return Err(AssistError::EmptyResponse);
    }
    Ok(response.text)
}
