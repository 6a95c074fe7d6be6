//! Explorer configuration — TOML file with serde defaults.
//!
//! Every field is optional in the file; a missing file means all defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::link::{DocLinks, DEFAULT_DOC_BASE_URL, DEFAULT_DOC_SUFFIX};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Path or URL of the JSON mapping document.
    pub mapping: String,
    /// Path or URL of the JSON list of custom component names.
    pub customs: String,
    /// Path or URL of the spreadsheet CSV export used when `mapping` fails.
    pub fallback_csv: Option<String>,
    pub doc_base_url: String,
    pub doc_suffix: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            mapping: "data/components.json".to_string(),
            customs: "data/custom-components.json".to_string(),
            fallback_csv: Some("data/component-breakdown.csv".to_string()),
            doc_base_url: DEFAULT_DOC_BASE_URL.to_string(),
            doc_suffix: DEFAULT_DOC_SUFFIX.to_string(),
        }
    }
}

impl ExplorerConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a config file. Errors if the file is missing or malformed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Load a config file if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn doc_links(&self) -> DocLinks {
        DocLinks::new(self.doc_base_url.clone(), self.doc_suffix.clone())
    }
}
