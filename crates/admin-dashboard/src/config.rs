//! Dashboard configuration.
//!
//! Loaded from TOML. Resolution order for the file: explicit path, then the
//! `ADMIN_DASHBOARD_CONFIG` env var, then `config/default.toml`; if none exists the
//! defaults below apply. `ADMIN_API_URL` and `ADMIN_API_TOKEN` override the file.
//!
//! ```toml
//! [api]
//! base_url = "https://shop.example.com/api"
//! token = "..."
//! timeout_secs = 10
//! id_path_style = "slash"
//! ```

use crate::operations::IdPathStyle;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Env var naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "ADMIN_DASHBOARD_CONFIG";
/// Env var overriding `api.base_url`.
pub const API_URL_ENV: &str = "ADMIN_API_URL";
/// Env var overriding `api.token`.
pub const API_TOKEN_ENV: &str = "ADMIN_API_TOKEN";

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Admin API connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every operation path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token for authenticated requests.
    #[serde(default)]
    pub token: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// How ids are appended to id-bearing endpoint paths.
    #[serde(default)]
    pub id_path_style: IdPathStyle,
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
            id_path_style: IdPathStyle::default(),
        }
    }
}

impl DashboardConfig {
    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Resolves and loads configuration, then applies env overrides.
    ///
    /// An explicitly given path must exist; the env var and default paths fall back to
    /// built-in defaults when missing.
    pub fn load(explicit_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = std::env::var(CONFIG_PATH_ENV)
                    .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
                if Path::new(&path).exists() {
                    Self::from_file(&path)?
                } else {
                    warn!(path = %path, "Config file not found, using defaults");
                    Self::default()
                }
            }
        };
        config.apply_overrides(
            std::env::var(API_URL_ENV).ok(),
            std::env::var(API_TOKEN_ENV).ok(),
        );
        Ok(config)
    }

    /// Replaces the base URL and token when values are given.
    pub fn apply_overrides(&mut self, base_url: Option<String>, token: Option<String>) {
        if let Some(base_url) = base_url.filter(|u| !u.is_empty()) {
            self.api.base_url = base_url;
        }
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.api.token = Some(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = DashboardConfig::from_toml("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:3000/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.id_path_style, IdPathStyle::Concatenate);
    }

    #[test]
    fn test_partial_api_section() {
        let config = DashboardConfig::from_toml(
            r#"
            [api]
            base_url = "https://shop.example.com/api"
            id_path_style = "slash"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://shop.example.com/api");
        assert_eq!(config.api.id_path_style, IdPathStyle::Slash);
        assert_eq!(config.api.token, None);
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result = DashboardConfig::from_toml("[api\nbase_url = 1");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_explicit_file_is_read_error() {
        let result = DashboardConfig::load(Some("/nonexistent/admin-dashboard.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_overrides_ignore_empty_values() {
        let mut config = DashboardConfig::default();
        config.apply_overrides(Some(String::new()), Some("secret".to_string()));
        assert_eq!(config.api.base_url, "http://localhost:3000/api");
        assert_eq!(config.api.token.as_deref(), Some("secret"));

        config.apply_overrides(Some("http://api.internal".to_string()), None);
        assert_eq!(config.api.base_url, "http://api.internal");
        assert_eq!(config.api.token.as_deref(), Some("secret"));
    }
}
