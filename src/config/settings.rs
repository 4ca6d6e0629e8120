//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use serde::Deserialize;

use crate::error::ConfigError;

/// Default renderer API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
/// Every field is optional; a missing file yields the defaults.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Base URL of the renderer API.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            _schema: None,
            _comment: None,
            api_url: None,
            timeout_secs: default_timeout_secs(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.api_url {
            validate_api_url(url)?;
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                message: "timeout_secs must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

/// Checks that a base URL is plausibly reachable over HTTP.
pub fn validate_api_url(url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            message: format!("api_url '{url}' must start with http:// or https://"),
        })
    }
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.logging.level, "warn");
        assert!(config.api_url.is_none());
    }

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "api_url": "http://renderer.internal:5000",
            "timeout_secs": 10,
            "logging": { "level": "debug" }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.api_url.as_deref(),
            Some("http://renderer.internal:5000")
        );
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn reject_unknown_fields() {
        let json = r#"{ "api_urll": "http://localhost:5000" }"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn reject_bad_api_url() {
        let config: Config =
            serde_json::from_str(r#"{ "api_url": "localhost:5000" }"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_zero_timeout() {
        let config: Config = serde_json::from_str(r#"{ "timeout_secs": 0 }"#).unwrap();
        assert!(config.validate().is_err());
    }
}
