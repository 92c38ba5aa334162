use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Identity used for every upstream request. Read from a local file that is
/// kept out of source control.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub credentials: Credentials,
}

impl ApiConfig {
    pub fn new(base_url: &str, credentials: Credentials) -> Self {
        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read credentials from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed credentials file: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load_credentials(path: &Path) -> Result<Credentials, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let credentials = serde_json::from_str(&contents)?;
    log::info!("Loaded credentials from {}", path.display());
    Ok(credentials)
}
