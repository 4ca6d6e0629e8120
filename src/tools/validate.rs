//! The `validate_mermaid` tool.
//!
//! Syntax is checked by asking the renderer for an SVG render with the
//! default theme, the cheapest probe it offers. A rejected diagram is a
//! SUCCESSFUL tool result with `valid: false` and the renderer's message in
//! `issues`; only an unreachable renderer produces an error result.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::analysis::{Complexity, DiagramType, Theme, SYNTAX_HINTS};
use crate::error::ToolError;
use crate::renderer::RendererClient;
use crate::tools::{parse_args, pretty, require_code, ToolCallResult, ToolDefinition, TOOL_VALIDATE};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Args {
    code: String,
}

/// Returns the tool definition for `tools/list`.
#[must_use]
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: TOOL_VALIDATE.to_string(),
        description: "Validate Mermaid diagram syntax by attempting to render it".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "code": {
                    "type": "string",
                    "description": "The Mermaid diagram code to validate"
                }
            },
            "required": ["code"],
            "additionalProperties": false
        }),
    }
}

/// Validates diagram source against the renderer.
pub async fn call(client: &RendererClient, arguments: &Value) -> ToolCallResult {
    let args: Args = match parse_args(arguments) {
        Ok(args) => args,
        Err(e) => return ToolCallResult::failure(&e),
    };

    if let Err(e) = require_code(&args.code) {
        return ToolCallResult::failure(&e);
    }

    let outcome = client.render_svg(&args.code, Theme::default()).await;

    let (valid, issues, hints) = match outcome {
        Ok(_) => (true, Vec::new(), Vec::new()),
        Err(ToolError::Rendering(message)) => (
            false,
            vec![message],
            SYNTAX_HINTS.iter().map(ToString::to_string).collect(),
        ),
        Err(e) => return ToolCallResult::failure(&e),
    };

    ToolCallResult::text(pretty(&report(&args.code, valid, &issues, &hints)))
}

/// Builds the structured validation report.
fn report(code: &str, valid: bool, issues: &[String], hints: &[String]) -> Value {
    json!({
        "valid": valid,
        "diagram_type": DiagramType::detect(code),
        "metrics": {
            "lines": code.lines().count(),
            "chars": code.chars().count(),
            "complexity": Complexity::estimate(code),
        },
        "issues": issues,
        "hints": hints,
    })
}
