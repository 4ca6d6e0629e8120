//! Tool dispatcher for the Mermaid renderer.
//!
//! Each tool lives in its own file with a typed argument struct, a JSON
//! Schema declaration for `tools/list`, and an async `call` entry point.
//! Dispatch is a pure request → validate → forward → translate pipeline with
//! no cross-call state: argument validation happens entirely locally, and
//! only a fully validated call produces an outbound HTTP request.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ToolError;
use crate::renderer::RendererClient;

pub mod render_png;
pub mod render_svg;
pub mod suggest_improvements;
pub mod validate;

/// Tool name for SVG rendering.
pub const TOOL_RENDER_SVG: &str = "render_mermaid_svg";
/// Tool name for PNG rendering.
pub const TOOL_RENDER_PNG: &str = "render_mermaid_png";
/// Tool name for syntax validation.
pub const TOOL_VALIDATE: &str = "validate_mermaid";
/// Tool name for improvement suggestions.
pub const TOOL_SUGGEST: &str = "suggest_mermaid_improvements";

/// A tool definition for the tools/list response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// Unique tool name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// JSON Schema for the tool's input parameters.
    pub input_schema: Value,
}

/// Content item in a tool call response.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Text content.
    Text {
        /// The text content.
        text: String,
    },
    /// Binary content, base64-encoded.
    Image {
        /// Base64-encoded payload.
        data: String,
        /// MIME type of the payload.
        #[serde(rename = "mimeType")]
        mime_type: String,
    },
}

/// Result of a tool call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    /// Content returned by the tool.
    pub content: Vec<ToolContent>,
    /// Whether the tool call resulted in an error.
    #[serde(skip_serializing_if = "is_false")]
    pub is_error: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde's skip_serializing_if requires a predicate fn(&T) -> bool, so we must take &bool here
const fn is_false(b: &bool) -> bool {
    !*b
}

impl ToolCallResult {
    /// Creates a successful text result.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Creates a successful image result from a base64 payload.
    #[must_use]
    pub fn image(data: String, mime_type: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Image {
                data,
                mime_type: mime_type.into(),
            }],
            is_error: false,
        }
    }

    /// Translates a [`ToolError`] into the uniform failed-result shape.
    ///
    /// Every failure carries the same JSON body so the assistant can branch
    /// on `kind` without parsing prose.
    #[must_use]
    pub fn failure(error: &ToolError) -> Self {
        let body = json!({
            "status": "error",
            "kind": error.kind(),
            "message": error.message(),
        });

        Self {
            content: vec![ToolContent::Text {
                text: pretty(&body),
            }],
            is_error: true,
        }
    }
}

/// Returns the definitions of all registered tools, in registration order.
#[must_use]
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        render_svg::definition(),
        render_png::definition(),
        validate::definition(),
        suggest_improvements::definition(),
    ]
}

/// Dispatches a tool call by name.
///
/// Unknown names are rejected here, before any argument parsing or network
/// access.
pub async fn dispatch(client: &RendererClient, name: &str, arguments: &Value) -> ToolCallResult {
    match name {
        TOOL_RENDER_SVG => render_svg::call(client, arguments).await,
        TOOL_RENDER_PNG => render_png::call(client, arguments).await,
        TOOL_VALIDATE => validate::call(client, arguments).await,
        TOOL_SUGGEST => suggest_improvements::call(client, arguments).await,
        _ => ToolCallResult::failure(&ToolError::Validation(format!("unknown tool: {name}"))),
    }
}

/// Deserialises tool arguments into their typed struct.
pub(crate) fn parse_args<T: DeserializeOwned>(arguments: &Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments.clone()).map_err(|e| ToolError::Validation(e.to_string()))
}

/// Rejects empty or whitespace-only diagram source.
pub(crate) fn require_code(code: &str) -> Result<(), ToolError> {
    if code.trim().is_empty() {
        Err(ToolError::Validation(
            "parameter 'code' must not be empty".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Pretty-prints a JSON value for text content.
pub(crate) fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_tools_registered() {
        let defs = definitions();
        let names: Vec<&str> = defs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec![TOOL_RENDER_SVG, TOOL_RENDER_PNG, TOOL_VALIDATE, TOOL_SUGGEST]
        );
    }

    #[test]
    fn every_schema_requires_code() {
        for def in definitions() {
            let required = def.input_schema["required"]
                .as_array()
                .unwrap_or_else(|| panic!("{} schema missing required list", def.name));
            assert!(
                required.iter().any(|v| v == "code"),
                "{} must require 'code'",
                def.name
            );
        }
    }

    #[tokio::test]
    async fn unknown_tool_rejected_locally() {
        let client = test_support::unreachable_client();
        let result = dispatch(&client, "render_mermaid_pdf", &json!({})).await;
        test_support::assert_failure_kind(&result, "validation");
    }

    #[test]
    fn failure_shape_is_uniform() {
        let result = ToolCallResult::failure(&ToolError::Connectivity("refused".to_string()));
        assert!(result.is_error);
        let body: Value = serde_json::from_str(test_support::first_text(&result)).unwrap();
        assert_eq!(body["kind"], "connectivity");
        assert_eq!(body["message"], "refused");
    }

    #[test]
    fn image_content_serialises_mime_type() {
        let result = ToolCallResult::image("aGVsbG8=".to_string(), "image/png");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["content"][0]["type"], "image");
        assert_eq!(json["content"][0]["mimeType"], "image/png");
        assert!(json.get("isError").is_none());
    }
}
