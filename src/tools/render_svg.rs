//! The `render_mermaid_svg` tool.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::analysis::Theme;
use crate::renderer::RendererClient;
use crate::tools::{parse_args, require_code, ToolCallResult, ToolDefinition, TOOL_RENDER_SVG};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Args {
    code: String,
    #[serde(default)]
    theme: Theme,
}

/// Returns the tool definition for `tools/list`.
#[must_use]
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: TOOL_RENDER_SVG.to_string(),
        description: "Generate an SVG diagram from Mermaid code".to_string(),
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
                }
            },
            "required": ["code"],
            "additionalProperties": false
        }),
    }
}

/// Renders diagram source to SVG via the renderer API.
///
/// The SVG document is returned verbatim as text content; the adapter never
/// touches the markup.
pub async fn call(client: &RendererClient, arguments: &Value) -> ToolCallResult {
    let args: Args = match parse_args(arguments) {
        Ok(args) => args,
        Err(e) => return ToolCallResult::failure(&e),
    };

    if let Err(e) = require_code(&args.code) {
        return ToolCallResult::failure(&e);
    }

    match client.render_svg(&args.code, args.theme).await {
        Ok(svg) => ToolCallResult::text(svg),
        Err(e) => ToolCallResult::failure(&e),
    }
}
