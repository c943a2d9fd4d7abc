//! Load request files by extension (`.toml` or `.json`).

use quote_domain::{OptionUpdate, QuoteOptions, VocalMixForm, WebCreateForm};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading a request file
#[derive(Error, Debug)]
pub enum RequestLoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported request file format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),
}

/// Vocal-mix request: the form fields plus option updates applied in order.
///
/// ```toml
/// name = "山田太郎"
/// video_url = "https://youtu.be/abc123"
/// options = ["vocal:selected=true", "vocal:quantity=2", "encode:selected=true"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VocalMixRequest {
    #[serde(flatten)]
    pub form: VocalMixForm,
    #[serde(default)]
    pub options: Vec<OptionUpdate>,
}

impl VocalMixRequest {
    /// Replay the option updates on top of `start`.
    pub fn apply_options(&self, start: &QuoteOptions) -> QuoteOptions {
        self.options.iter().fold(*start, |acc, update| update.apply(&acc))
    }
}

/// Reads request files for either service
pub struct RequestLoader;

impl RequestLoader {
    pub fn load_vocal_mix(path: &Path) -> Result<VocalMixRequest, RequestLoadError> {
        Self::load(path)
    }

    pub fn load_web_create(path: &Path) -> Result<WebCreateForm, RequestLoadError> {
        Self::load(path)
    }

    fn load<T: DeserializeOwned>(path: &Path) -> Result<T, RequestLoadError> {
        let display = path.display().to_string();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        if extension != "toml" && extension != "json" {
            return Err(RequestLoadError::UnsupportedFormat(display));
        }

        let text = std::fs::read_to_string(path).map_err(|source| RequestLoadError::Io {
            path: display.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "Loaded request file");

        if extension == "toml" {
            toml::from_str(&text).map_err(|source| RequestLoadError::Toml {
                path: display,
                source,
            })
        } else {
            serde_json::from_str(&text).map_err(|source| RequestLoadError::Json {
                path: display,
                source,
            })
        }
    }
}
