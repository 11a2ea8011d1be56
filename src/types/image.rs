//! Encoded image input.

use base64::Engine;

use super::message::ImageContent;
use crate::error::{AssistError, Result};

/// Media type assumed when the input carries none.
pub const DEFAULT_IMAGE_MEDIA_TYPE: &str = "image/jpeg";

/// A base64 image payload with its media type.
///
/// Accepts either a bare base64 payload or a data URL
/// (`data:<media-type>;base64,<payload>`).
///
/// ```
/// use siteassist::types::EncodedImage;
///
/// let image = EncodedImage::parse("data:image/png;base64,XYZ")?;
/// assert_eq!(image.media_type(), "image/png");
/// assert_eq!(image.data(), "XYZ");
/// # Ok::<(), siteassist::error::AssistError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    media_type: String,
    data: String,
}

impl EncodedImage {
    /// Split an encoded image string into media type and payload.
    ///
    /// Everything after the first comma is the payload. When the prefix before
    /// it contains `;`, the media type is the text after the first `:`, cut at
    /// the next `:` or `;`. Otherwise it defaults to
    /// [`DEFAULT_IMAGE_MEDIA_TYPE`]. Input without a comma is taken whole as
    /// the payload.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(AssistError::InvalidImage("empty image input".into()));
        }

        let Some((prefix, payload)) = input.split_once(',') else {
            return Ok(Self {
                media_type: DEFAULT_IMAGE_MEDIA_TYPE.to_string(),
                data: input.to_string(),
            });
        };

        if payload.is_empty() {
            return Err(AssistError::InvalidImage(
                "no payload after data URL prefix".into(),
            ));
        }

        let media_type = match prefix.split_once(';') {
            Some((head, _)) => {
                let (_, rest) = head.split_once(':').ok_or_else(|| {
                    AssistError::InvalidImage(format!("missing ':' in prefix '{prefix}'"))
                })?;
                // Only the segment up to a second ':' names the type.
                let media_type = rest.split(':').next().unwrap_or_default();
                if media_type.is_empty() {
                    return Err(AssistError::InvalidImage(format!(
                        "empty media type in prefix '{prefix}'"
                    )));
                }
                media_type.to_string()
            }
            None => DEFAULT_IMAGE_MEDIA_TYPE.to_string(),
        };

        Ok(Self {
            media_type,
            data: payload.to_string(),
        })
    }

    /// Encode raw image bytes.
    pub fn from_bytes(bytes: &[u8], media_type: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    /// Render as `data:<media-type>;base64,<payload>`.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }

    pub fn into_content(self) -> ImageContent {
        ImageContent {
            data: self.data,
            mime_type: self.media_type,
        }
    }
}

impl std::str::FromStr for EncodedImage {
    type Err = AssistError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
