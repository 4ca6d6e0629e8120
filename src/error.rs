//! Error types for mermaid-renderer-mcp.
//!
//! Tool failures fall into exactly three kinds, and every failed tool result
//! carries the kind as a stable tag so the calling assistant can tell a bad
//! argument from an unreachable renderer:
//!
//! - **validation**: rejected locally, before any network traffic
//! - **connectivity**: the renderer could not be reached or timed out
//! - **rendering**: the renderer received the request and rejected the diagram

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while handling a single tool call.
///
/// A `ToolError` never crosses call boundaries; each invocation either fully
/// succeeds or returns exactly one of these.
#[derive(Error, Debug)]
pub enum ToolError {
    /// Arguments failed local validation; no request was sent.
    #[error("invalid arguments: {0}")]
    Validation(String),

    /// The renderer endpoint was unreachable, refused the connection, or
    /// timed out.
    #[error("renderer unreachable: {0}")]
    Connectivity(String),

    /// The renderer received the request but reported a problem with the
    /// diagram source. The renderer's own message is carried unaltered.
    #[error("rendering failed: {0}")]
    Rendering(String),
}

impl ToolError {
    /// Returns the stable kind tag used in failed tool results.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Connectivity(_) => "connectivity",
            Self::Rendering(_) => "rendering",
        }
    }

    /// Returns the error message without the kind prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::Connectivity(msg) | Self::Rendering(msg) => msg,
        }
    }
}

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}
