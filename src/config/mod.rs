//! Configuration file loading and parsing.
//!
//! This module handles loading the configuration file from disk and parsing
//! it into validated, type-safe structures, plus resolving the renderer base
//! URL across its three override layers.
//!
//! # Configuration File Locations
//!
//! The configuration file is searched in the following order:
//!
//! 1. Path specified via `--config` CLI flag
//! 2. Default location:
//!    - **Linux/macOS:** `~/.mermaid-renderer-mcp/config.json`
//!    - **Windows:** `%USERPROFILE%\.mermaid-renderer-mcp\config.json`
//!
//! A missing file is not an error: the adapter runs against
//! `http://localhost:5000` with no setup at all.
//!
//! # Base URL Precedence
//!
//! `--api-url` flag > `MERMAID_API_URL` environment variable > config file >
//! built-in default.

mod settings;

pub use settings::{validate_api_url, Config, LoggingConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable holding the renderer base URL.
pub const API_URL_ENV: &str = "MERMAID_API_URL";

/// Returns the default configuration directory.
///
/// - **Linux/macOS:** `~/.mermaid-renderer-mcp/`
/// - **Windows:** `%USERPROFILE%\.mermaid-renderer-mcp\`
#[must_use]
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".mermaid-renderer-mcp"))
}

/// Returns the platform-specific default configuration file path.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    default_config_dir().map(|p| p.join("config.json"))
}

/// Loads and parses the configuration file.
///
/// If `path` is `None`, uses the platform-specific default location and
/// falls back to defaults when no file exists there. An explicitly given
/// path must exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly specified file cannot be found
/// - The file cannot be read
/// - The JSON is malformed
/// - Field values fail validation
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::NotFound {
                    path: p.to_path_buf(),
                });
            }
            p.to_path_buf()
        }
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    let contents = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;

    let config: Config = serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: config_path.clone(),
        source: e,
    })?;

    config.validate()?;

    Ok(config)
}

/// Resolves the renderer base URL across the override layers.
///
/// Precedence: CLI flag, then environment variable, then config file, then
/// the built-in default.
///
/// # Errors
///
/// Returns an error if the winning value is not an HTTP(S) URL.
pub fn resolve_api_url(
    cli: Option<&str>,
    env: Option<&str>,
    config: &Config,
) -> Result<String, ConfigError> {
    let url = cli
        .or(env)
        .or(config.api_url.as_deref())
        .unwrap_or(DEFAULT_API_URL);

    validate_api_url(url)?;

    Ok(url.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_dir_exists() {
        assert!(default_config_dir().is_some());
    }

    #[test]
    fn default_config_path_exists() {
        let path = default_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("config.json"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let result = load_config(Some(Path::new("/nonexistent/config.json")));
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{ "api_url": "http://10.0.0.2:5000", "timeout_secs": 5 }}"#
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.api_url.as_deref(), Some("http://10.0.0.2:5000"));
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn api_url_precedence() {
        let config: Config =
            serde_json::from_str(r#"{ "api_url": "http://from-file:5000" }"#).unwrap();

        let url = resolve_api_url(
            Some("http://from-cli:5000"),
            Some("http://from-env:5000"),
            &config,
        )
        .unwrap();
        assert_eq!(url, "http://from-cli:5000");

        let url = resolve_api_url(None, Some("http://from-env:5000"), &config).unwrap();
        assert_eq!(url, "http://from-env:5000");

        let url = resolve_api_url(None, None, &config).unwrap();
        assert_eq!(url, "http://from-file:5000");

        let url = resolve_api_url(None, None, &Config::default()).unwrap();
        assert_eq!(url, DEFAULT_API_URL);
    }

    #[test]
    fn api_url_trailing_slash_trimmed() {
        let url = resolve_api_url(Some("http://localhost:5000/"), None, &Config::default());
        assert_eq!(url.unwrap(), "http://localhost:5000");
    }

    #[test]
    fn api_url_without_scheme_rejected() {
        let result = resolve_api_url(Some("localhost:5000"), None, &Config::default());
        assert!(result.is_err());
    }
}
