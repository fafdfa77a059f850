//! Configuration for the Safe MCP server
//!
//! Values are layered: built-in defaults, then an optional TOML file. The
//! binary applies `--base-url` (or `SAFE_API_URL`) last via [`ServerConfig::with_base_url`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Safe transaction service used when nothing else is configured
pub const DEFAULT_SAFE_API_URL: &str = "https://safe-transaction-mainnet.safe.global/api/v1";

/// Config files probed when no path is given
pub const DEFAULT_CONFIG_PATHS: &[&str] = &["safe-mcp.toml", "config/safe-mcp.toml"];

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub safe: SafeApiSection,
}

/// Server identity reported during the MCP handshake
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerSection {
    /// Name reported in `serverInfo`
    #[serde(default = "default_server_name")]
    pub name: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            name: default_server_name(),
        }
    }
}

fn default_server_name() -> String {
    "safe-mcp".to_string()
}

/// Safe transaction service section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SafeApiSection {
    /// Base URL including the API version path
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SafeApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_SAFE_API_URL.to_string()
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Invalid Safe API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ServerConfig {
    /// Load configuration from a TOML file; missing sections take defaults
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&content)?;
        config.validated()
    }

    /// Resolve configuration from an explicit path, a default location, or defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => match Self::find_default_file() {
                Some(path) => Self::load_from_file(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// First existing file among [`DEFAULT_CONFIG_PATHS`]
    pub fn find_default_file() -> Option<PathBuf> {
        DEFAULT_CONFIG_PATHS
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Replace the Safe API base URL
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Result<Self, ConfigError> {
        self.safe.base_url = base_url.into();
        self.validated()
    }

    /// Validate and normalize the base URL
    fn validated(mut self) -> Result<Self, ConfigError> {
        self.safe.base_url = normalize_base_url(&self.safe.base_url)?;
        Ok(self)
    }
}

/// Check that the base URL is absolute http(s) and strip trailing slashes
fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');

    let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(trimmed.to_string())
}
