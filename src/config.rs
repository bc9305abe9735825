//! Configuration loading
//!
//! Reads `config.toml` from the user config directory (or an explicit path),
//! applies command-line overrides and validates the API base URL.

mod types;

use std::path::{Path, PathBuf};

use crate::error::BookfindError;

pub use types::{
    ApiConfig, Config, DEFAULT_BASE_URL, DEFAULT_DEBOUNCE_MS, DEFAULT_TIMEOUT_SECS, SearchConfig,
};

/// Location of the config file when `--config` is not given
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bookfind").join("config.toml"))
}

/// Load configuration
///
/// An explicit path must exist. The default path is optional: when it is
/// missing the built-in defaults are used.
pub fn load_config(path: Option<&Path>) -> Result<Config, BookfindError> {
    match path {
        Some(path) => read_config_file(path),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config_file(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        },
    }
}

fn read_config_file(path: &Path) -> Result<Config, BookfindError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        BookfindError::Config(format!("cannot read {}: {}", path.display(), e))
    })?;
    log::debug!("Loaded config from {}", path.display());
    parse_config(&content)
}

/// Parse TOML configuration text
pub fn parse_config(content: &str) -> Result<Config, BookfindError> {
    toml::from_str(content).map_err(|e| BookfindError::Config(e.to_string()))
}

impl Config {
    /// Apply command-line overrides on top of file values
    pub fn with_overrides(mut self, base_url: Option<String>, debounce_ms: Option<u64>) -> Self {
        if let Some(base_url) = base_url {
            self.api.base_url = base_url;
        }
        if let Some(debounce_ms) = debounce_ms {
            self.search.debounce_ms = debounce_ms;
        }
        self
    }

    /// Validate values and normalize the base URL
    pub fn validated(mut self) -> Result<Self, BookfindError> {
        self.api.base_url = normalize_base_url(&self.api.base_url)?;
        if self.api.timeout_secs == 0 {
            return Err(BookfindError::Config(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Trim whitespace and trailing slashes, and require an http(s) URL
pub fn normalize_base_url(raw: &str) -> Result<String, BookfindError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = reqwest::Url::parse(trimmed)
        .map_err(|e| BookfindError::Config(format!("invalid base_url {:?}: {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(BookfindError::Config(format!(
            "base_url must use http or https, got {:?}",
            url.scheme()
        )));
    }

    Ok(trimmed.to_string())
}
