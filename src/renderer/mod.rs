//! HTTP client for the external Mermaid renderer API.
//!
//! The renderer owns all parsing, layout, and encoding. This client maps one
//! tool call to exactly one `POST` against the corresponding endpoint and
//! translates the outcome:
//!
//! - 2xx → the response body, verbatim (text for SVG, bytes for PNG)
//! - any other status → [`ToolError::Rendering`] carrying the renderer's
//!   own error message
//! - connection failure or timeout → [`ToolError::Connectivity`]
//!
//! No retries, no caching. Identical inputs always produce structurally
//! identical requests.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::analysis::Theme;
use crate::error::{ConfigError, ToolError};

/// Endpoint path for SVG rendering.
const SVG_PATH: &str = "/api/render/svg";
/// Endpoint path for PNG rendering.
const PNG_PATH: &str = "/api/render/png";
/// Endpoint path for the health probe.
const HEALTH_PATH: &str = "/api/health";

/// Request body for the render endpoints.
#[derive(Debug, Serialize)]
struct RenderRequest<'a> {
    code: &'a str,
    theme: Theme,
    #[serde(skip_serializing_if = "Option::is_none")]
    scale: Option<u8>,
}

/// Error body shape returned by the renderer on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the Mermaid renderer API.
///
/// Holds no mutable state; safe to share across concurrent tool calls.
pub struct RendererClient {
    http: reqwest::Client,
    base_url: String,
}

impl RendererClient {
    /// Creates a client for the renderer at `base_url`.
    ///
    /// The timeout applies to each whole request, so a hung renderer cannot
    /// block the calling assistant indefinitely.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::ValidationError {
                message: format!("failed to construct HTTP client: {e}"),
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the configured base URL (without trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Renders diagram source to an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Rendering`] when the renderer rejects the
    /// diagram, [`ToolError::Connectivity`] when it cannot be reached.
    pub async fn render_svg(&self, code: &str, theme: Theme) -> Result<String, ToolError> {
        let response = self
            .post_render(SVG_PATH, &RenderRequest {
                code,
                theme,
                scale: None,
            })
            .await?;

        response.text().await.map_err(connectivity)
    }

    /// Renders diagram source to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Rendering`] when the renderer rejects the
    /// diagram, [`ToolError::Connectivity`] when it cannot be reached.
    pub async fn render_png(
        &self,
        code: &str,
        theme: Theme,
        scale: u8,
    ) -> Result<Vec<u8>, ToolError> {
        let response = self
            .post_render(PNG_PATH, &RenderRequest {
                code,
                theme,
                scale: Some(scale),
            })
            .await?;

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(connectivity)
    }

    /// Probes the renderer's health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Connectivity`] when the renderer is unreachable,
    /// [`ToolError::Rendering`] when it answers with a non-success status.
    pub async fn health(&self) -> Result<(), ToolError> {
        let url = format!("{}{HEALTH_PATH}", self.base_url);
        let response = self.http.get(&url).send().await.map_err(connectivity)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }

    /// Sends one render request and checks the status.
    async fn post_render(
        &self,
        path: &str,
        body: &RenderRequest<'_>,
    ) -> Result<reqwest::Response, ToolError> {
        let url = format!("{}{path}", self.base_url);

        tracing::debug!(url = %url, theme = %body.theme, "Forwarding render request");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(connectivity)?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(error_from_response(response).await)
        }
    }
}

/// Maps a transport-level failure (refused connection, timeout, DNS) to the
/// connectivity kind.
fn connectivity(e: reqwest::Error) -> ToolError {
    if e.is_timeout() {
        ToolError::Connectivity(format!("request timed out: {e}"))
    } else {
        ToolError::Connectivity(e.to_string())
    }
}

/// Extracts the renderer's error message from a non-success response.
async fn error_from_response(response: reqwest::Response) -> ToolError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ToolError::Rendering(extract_error_message(status.as_u16(), &body))
}

/// Pulls the `error` field out of a JSON error body, falling back to the raw
/// body text, then to the bare status code.
fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    if body.trim().is_empty() {
        format!("renderer returned HTTP {status}")
    } else {
        body.to_string()
    }
}
