//! Integration tests for MCP protocol handling.
//!
//! These tests verify the JSON-RPC 2.0 protocol implementation and the
//! advertised tool surface: four tools, fixed names, schemas that demand
//! `code` everywhere and constrain `scale`.

use mermaid_renderer_mcp::mcp::protocol::{parse_message, IncomingMessage, RequestId};
use mermaid_renderer_mcp::tools;

// =============================================================================
// Protocol Parsing Tests
// =============================================================================

#[test]
fn test_parse_initialize_request() {
    let json = r#"{
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": {
                "name": "test-client",
                "version": "1.0.0"
            }
        }
    }"#;

    let result = parse_message(json);
    assert!(result.is_ok());

    if let IncomingMessage::Request(req) = result.unwrap() {
        assert_eq!(req.method, "initialize");
        assert_eq!(req.id, RequestId::Number(1));
    } else {
        panic!("Expected Request");
    }
}

#[test]
fn test_parse_tools_call_request() {
    let json = r#"{
        "jsonrpc": "2.0",
        "id": 2,
        "method": "tools/call",
        "params": {
            "name": "render_mermaid_svg",
            "arguments": { "code": "graph TD; A-->B", "theme": "dark" }
        }
    }"#;

    let result = parse_message(json);
    assert!(result.is_ok());

    if let IncomingMessage::Request(req) = result.unwrap() {
        assert_eq!(req.method, "tools/call");
        let params = req.params.unwrap();
        assert_eq!(params["name"], "render_mermaid_svg");
        assert_eq!(params["arguments"]["theme"], "dark");
    } else {
        panic!("Expected Request");
    }
}

#[test]
fn test_parse_notification() {
    let json = r#"{
        "jsonrpc": "2.0",
        "method": "notifications/initialized"
    }"#;

    let result = parse_message(json);
    assert!(result.is_ok());

    if let IncomingMessage::Notification(notif) = result.unwrap() {
        assert_eq!(notif.method, "notifications/initialized");
    } else {
        panic!("Expected Notification");
    }
}

#[test]
fn test_parse_invalid_json() {
    let result = parse_message("not valid json");
    assert!(result.is_err());
}

#[test]
fn test_parse_missing_jsonrpc_version() {
    let json = r#"{
        "id": 1,
        "method": "test"
    }"#;

    let result = parse_message(json);
    assert!(result.is_err());
}

// =============================================================================
// Tool Surface Tests
// =============================================================================

#[test]
fn test_tool_names_are_contract() {
    let names: Vec<String> = tools::definitions().iter().map(|d| d.name.clone()).collect();
    assert_eq!(
        names,
        vec![
            "render_mermaid_svg",
            "render_mermaid_png",
            "validate_mermaid",
            "suggest_mermaid_improvements",
        ]
    );
}

#[test]
fn test_schemas_declare_theme_enum() {
    for def in tools::definitions() {
        let Some(theme) = def.input_schema["properties"].get("theme") else {
            continue;
        };
        let values = theme["enum"].as_array().unwrap();
        assert_eq!(values.len(), 4, "{} theme enum", def.name);
        assert!(values.iter().any(|v| v == "modern"));
        assert_eq!(theme["default"], "modern");
    }
}

#[test]
fn test_png_schema_constrains_scale() {
    let defs = tools::definitions();
    let png = defs
        .iter()
        .find(|d| d.name == "render_mermaid_png")
        .unwrap();

    let scale = &png.input_schema["properties"]["scale"];
    assert_eq!(scale["minimum"], 1);
    assert_eq!(scale["maximum"], 4);
    assert_eq!(scale["default"], 2);
    // scale stays optional: only code is required
    let required = png.input_schema["required"].as_array().unwrap();
    assert_eq!(required.len(), 1);
    assert_eq!(required[0], "code");
}

#[test]
fn test_definitions_serialise_with_camel_case_schema_key() {
    let defs = tools::definitions();
    let value = serde_json::to_value(&defs).unwrap();
    assert!(value[0].get("inputSchema").is_some());
    assert!(value[0].get("input_schema").is_none());
}
