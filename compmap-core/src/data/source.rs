//! Source locations and structured load errors.
//!
//! A location is either a filesystem path or an `http(s)://` URL. Remote
//! sources are fetched with a blocking client; the explorer only loads once
//! at startup, off the UI thread.

use std::path::Path;
use std::time::Duration;

use thiserror::Error;

/// Structured errors for data loading.
///
/// Displayable in both CLI and TUI contexts. The explorer never treats these
/// as fatal; see [`crate::data::load_dataset`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source not found: {0}")]
    NotFound(String),

    #[error("I/O error reading {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("network error fetching {location}: {message}")]
    Network { location: String, message: String },

    #[error("HTTP {status} fetching {location}")]
    HttpStatus { location: String, status: u16 },

    #[error("invalid JSON in {location}: {source}")]
    Json {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid spreadsheet export in {location}: {source}")]
    Csv {
        location: String,
        #[source]
        source: csv::Error,
    },
}

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Read the whole source as text.
pub fn read_source(location: &str) -> Result<String, LoadError> {
    if is_remote(location) {
        fetch_remote(location)
    } else {
        read_local(Path::new(location))
    }
}

fn read_local(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }
    std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        location: path.display().to_string(),
        source: e,
    })
}

fn fetch_remote(url: &str) -> Result<String, LoadError> {
    let network = |e: reqwest::Error| LoadError::Network {
        location: url.to_string(),
        message: e.to_string(),
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(network)?;

    let resp = client.get(url).send().map_err(network)?;
    let status = resp.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(LoadError::NotFound(url.to_string()));
    }
    if !status.is_success() {
        return Err(LoadError::HttpStatus {
            location: url.to_string(),
            status: status.as_u16(),
        });
    }
    resp.text().map_err(network)
}
