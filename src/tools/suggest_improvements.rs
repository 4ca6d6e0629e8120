//! The `suggest_mermaid_improvements` tool.
//!
//! One probe render surfaces any syntax error as the leading suggestion;
//! the rest come from local pattern heuristics over the source.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::analysis::{self, Complexity, DiagramType, Theme};
use crate::error::ToolError;
use crate::renderer::RendererClient;
use crate::tools::{parse_args, pretty, require_code, ToolCallResult, ToolDefinition, TOOL_SUGGEST};

/// Diagram types the caller may name explicitly.
const DIAGRAM_TYPE_NAMES: [&str; 8] = [
    "flowchart", "sequence", "class", "state", "gantt", "pie", "journey", "git",
];

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Args {
    code: String,
    #[serde(default)]
    diagram_type: Option<DiagramType>,
}

/// Returns the tool definition for `tools/list`.
#[must_use]
pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: TOOL_SUGGEST.to_string(),
        description: "Analyze Mermaid code and suggest improvements or fixes".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "code": {
                    "type": "string",
                    "description": "The Mermaid diagram code to analyze"
                },
                "diagram_type": {
                    "type": "string",
                    "description": "Expected diagram type",
                    "enum": DIAGRAM_TYPE_NAMES
                }
            },
            "required": ["code"],
            "additionalProperties": false
        }),
    }
}

/// Analyses diagram source and returns an ordered suggestion list.
pub async fn call(client: &RendererClient, arguments: &Value) -> ToolCallResult {
    let args: Args = match parse_args(arguments) {
        Ok(args) => args,
        Err(e) => return ToolCallResult::failure(&e),
    };

    if let Err(e) = require_code(&args.code) {
        return ToolCallResult::failure(&e);
    }

    let diagram_type = args
        .diagram_type
        .unwrap_or_else(|| DiagramType::detect(&args.code));

    // Syntax problems lead the list; the renderer is the authority on those
    let mut suggestions = match client.render_svg(&args.code, Theme::default()).await {
        Ok(_) => Vec::new(),
        Err(ToolError::Rendering(message)) => {
            vec![format!("fix the reported syntax error: {message}")]
        }
        Err(e) => return ToolCallResult::failure(&e),
    };

    suggestions.extend(analysis::suggest(&args.code, diagram_type));

    if suggestions.is_empty() {
        suggestions.push(
            "code looks good; consider experimenting with themes for different visual styles"
                .to_string(),
        );
    }

    let report = json!({
        "diagram_type": diagram_type,
        "complexity": Complexity::estimate(&args.code),
        "lines": args.code.trim().lines().count(),
        "suggestions": suggestions,
    });

    ToolCallResult::text(pretty(&report))
}
