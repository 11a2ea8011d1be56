//! Configuration system (layered: code > env > config file > defaults).

pub mod file;

pub use file::{default_config_path, ConfigFile};

use std::fmt;
use std::path::Path;
use std::time::Duration;

use tracing::warn;

use crate::error::Result;

/// Hosted model used when nothing else is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini REST endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables checked for the API key, in priority order.
pub const API_KEY_ENV_VARS: [&str; 3] = ["GEMINI_API_KEY", "GOOGLE_API_KEY", "API_KEY"];

pub const MODEL_ENV_VAR: &str = "SITEASSIST_MODEL";
pub const BASE_URL_ENV_VAR: &str = "SITEASSIST_BASE_URL";
pub const TIMEOUT_ENV_VAR: &str = "SITEASSIST_TIMEOUT_SECS";

/// Settings for reaching the generative service.
///
/// Passed explicitly to every adapter call. Nothing here is cached globally:
/// callers that want the freshest key call [`AssistConfig::load`] right before
/// each request.
#[derive(Clone, PartialEq, Eq)]
pub struct AssistConfig {
    api_key: Option<String>,
    model: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl fmt::Debug for AssistConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| ".."))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistConfig {
    /// Defaults only: no key, default model and endpoint, no timeout.
    pub fn new() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Full resolution: user config file (if any), then environment.
    ///
    /// An unreadable config file is logged and skipped.
    pub fn load() -> Self {
        let base = match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path).unwrap_or_else(|err| {
                warn!(path = %path.display(), error = %err, "Ignoring unreadable config file");
                Self::new()
            }),
            _ => Self::new(),
        };
        base.apply_env()
    }

    /// Load from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        Self::new().apply_env()
    }

    /// Load from a TOML config file, defaults filling the gaps.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = ConfigFile::read(path)?;
        Ok(Self::new().merge_file(file))
    }

    /// Overlay environment variables onto this config.
    pub fn apply_env(mut self) -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        if let Some(key) = API_KEY_ENV_VARS.iter().find_map(|var| non_empty_env(var)) {
            self.api_key = Some(key);
        }
        if let Some(model) = non_empty_env(MODEL_ENV_VAR) {
            self.model = model;
        }
        if let Some(url) = non_empty_env(BASE_URL_ENV_VAR) {
            self.base_url = url;
        }
        if let Some(raw) = non_empty_env(TIMEOUT_ENV_VAR) {
            match raw.parse::<u64>() {
                Ok(secs) => self.timeout = Some(Duration::from_secs(secs)),
                Err(_) => warn!(value = %raw, "Ignoring non-numeric SITEASSIST_TIMEOUT_SECS"),
            }
        }
        self
    }

    fn merge_file(mut self, file: ConfigFile) -> Self {
        if let Some(key) = file.api_key.filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(model) = file.model {
            self.model = model;
        }
        if let Some(url) = file.base_url {
            self.base_url = url;
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout = Some(Duration::from_secs(secs));
        }
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Endpoint root without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Check if an API key is configured.
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }
}

fn non_empty_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}
