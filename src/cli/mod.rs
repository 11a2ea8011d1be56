//! CLI entry point for siteassist.

use std::io::Read;
use std::path::Path;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::config::AssistConfig;
use crate::error::Result;
use crate::types::EncodedImage;

/// siteassist CLI
#[derive(Parser, Debug)]
#[command(name = "siteassist", version, about = "Construction photo analysis and bilingual translation")]
pub struct Cli {
    /// Override the Gemini model id
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Request timeout in seconds (none by default)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a construction site photo
    Photo(PhotoArgs),
    /// Render project text as an interlinear bilingual document
    Translate(TranslateArgs),
}

/// Arguments for `siteassist photo`.
#[derive(Parser, Debug)]
pub struct PhotoArgs {
    /// Image file path, data URL, or bare base64 payload
    pub image: String,
}

/// Arguments for `siteassist translate`.
#[derive(Parser, Debug)]
pub struct TranslateArgs {
    /// Text to translate (read from stdin when omitted)
    pub text: Option<String>,
}

impl Cli {
    /// Layer command-line overrides on top of `config`.
    pub fn apply_overrides(&self, mut config: AssistConfig) -> AssistConfig {
        if let Some(model) = &self.model {
            config = config.with_model(model.clone());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

/// Turn the `photo` argument into an encoded image string.
///
/// Existing files are read and encoded as a data URL; anything else is passed
/// through for the adapter to parse.
pub fn resolve_image_arg(arg: &str) -> Result<String> {
    let path = Path::new(arg);
    if !path.is_file() {
        return Ok(arg.to_string());
    }
    let bytes = std::fs::read(path)?;
    Ok(EncodedImage::from_bytes(&bytes, media_type_for_path(path)).to_data_url())
}

/// Guess an image media type from a file extension.
pub fn media_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        Some("heif") => "image/heif",
        _ => crate::types::DEFAULT_IMAGE_MEDIA_TYPE,
    }
}

/// Text from the argument, or all of stdin.
pub fn read_translate_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
