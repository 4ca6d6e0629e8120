//! The `render_mermaid_png` tool.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::analysis::Theme;
use crate::error::ToolError;
use crate::renderer::RendererClient;
use crate::tools::{parse_args, require_code, ToolCallResult, ToolDefinition, TOOL_RENDER_PNG};

/// Smallest accepted scale factor.
const SCALE_MIN: i64 = 1;
/// Largest accepted scale factor.
const SCALE_MAX: i64 = 4;
/// Scale applied when the caller omits one.
const SCALE_DEFAULT: i64 = 2;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Args {
    code: String,
    #[serde(default)]
    theme: Theme,
    #[serde(default = "default_scale")]
    scale: i64,
}

const fn default_scale() -> i64 {
    SCALE_DEFAULT
}

/// Returns the tool definition for `tools/list`.
#[must_use]
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: TOOL_RENDER_PNG.to_string(),
        description: "Generate a PNG image from Mermaid code".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "code": {
                    "type": "string",
                    "description": "The Mermaid diagram code to render"
                },
                "theme": {
                    "type": "string",
                    "description": "Theme for the diagram",
                    "enum": Theme::NAMES,
                    "default": "modern"
                },
                "scale": {
                    "type": "integer",
                    "description": "PNG scale factor (1-4)",
                    "minimum": SCALE_MIN,
                    "maximum": SCALE_MAX,
                    "default": SCALE_DEFAULT
                }
            },
            "required": ["code"],
            "additionalProperties": false
        }),
    }
}

/// Renders diagram source to PNG via the renderer API.
///
/// The PNG bytes come back base64-encoded as MCP image content.
pub async fn call(client: &RendererClient, arguments: &Value) -> ToolCallResult {
    let args: Args = match parse_args(arguments) {
        Ok(args) => args,
        Err(e) => return ToolCallResult::failure(&e),
    };

    if let Err(e) = require_code(&args.code) {
        return ToolCallResult::failure(&e);
    }

    if !(SCALE_MIN..=SCALE_MAX).contains(&args.scale) {
        return ToolCallResult::failure(&ToolError::Validation(format!(
            "parameter 'scale' must be between {SCALE_MIN} and {SCALE_MAX}, got {}",
            args.scale
        )));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // range-checked above
    let scale = args.scale as u8;

    match client.render_png(&args.code, args.theme, scale).await {
        Ok(png) => ToolCallResult::image(BASE64_STANDARD.encode(png), "image/png"),
        Err(e) => ToolCallResult::failure(&e),
    }
}
