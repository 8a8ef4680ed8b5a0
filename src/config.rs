use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// Network-related constants
// =============================================================================

/// Default base URL for GitHub API
pub const DEFAULT_GITHUB_BASE_URL: &str = "https://api.github.com";

/// Timeout for each HTTP request in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Environment variable read for a GitHub token unless configured otherwise
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Missing required config field: {0}")]
    MissingField(&'static str),
}

/// Wrapper package configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct WrapperConfig {
    /// Repository in `owner/repo` form
    pub repository: String,
    pub github: GitHubConfig,
    /// Platform label -> asset file name template (`{version}`, `{tag}`)
    pub assets: IndexMap<String, String>,
    /// Platform label -> command name -> path inside the install dir
    pub executables: IndexMap<String, IndexMap<String, String>>,
    /// Tag prefix stripped before normalization, e.g. "v"
    pub version_prefix: Option<String>,
    /// Extraction directory, relative to the manifest
    pub install_dir: String,
    /// Manifest path, relative to the config file
    pub manifest: String,
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self {
            repository: String::new(),
            github: GitHubConfig::default(),
            assets: IndexMap::new(),
            executables: IndexMap::new(),
            version_prefix: None,
            install_dir: "bin".to_string(),
            manifest: "package.json".to_string(),
        }
    }
}

/// GitHub API configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GitHubConfig {
    pub base_url: String,
    /// Name of the environment variable holding an API token
    pub token_env: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GITHUB_BASE_URL.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
        }
    }
}

impl GitHubConfig {
    /// Reads the token from the configured environment variable
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.token_env).ok()
    }
}

impl WrapperConfig {
    /// Parses and validates a config from JSON text
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: WrapperConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.repository.trim().is_empty() {
            return Err(ConfigError::MissingField("repository"));
        }
        Ok(())
    }
}

/// Returns the path to the data directory for binrelease.
/// Uses $XDG_DATA_HOME/binrelease if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/binrelease,
/// or ./binrelease if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("binrelease.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("binrelease")
}
