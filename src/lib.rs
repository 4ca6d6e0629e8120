//! mermaid-renderer-mcp: MCP server for the Mermaid diagram renderer API
//!
//! This library exposes a small set of diagram operations (render to SVG,
//! render to PNG, validate syntax, suggest improvements) as tools that AI
//! assistants can call over the Model Context Protocol. Every tool call is
//! translated into a single HTTP request against a separately running
//! renderer service; the adapter itself holds no diagram logic and no state
//! across calls.
//!
//! The renderer (not this tool) handles:
//! - Mermaid parsing and layout
//! - SVG/PNG encoding, themes, scaling
//!
//! # Modules
//!
//! - [`analysis`] — Local inspection of diagram source (type, complexity, heuristics)
//! - [`config`] — Configuration loading and base URL resolution
//! - [`error`] — Error types
//! - [`mcp`] — MCP protocol implementation
//! - [`renderer`] — HTTP client for the renderer API
//! - [`tools`] — Tool definitions and dispatch

pub mod analysis;
pub mod config;
pub mod error;
pub mod mcp;
pub mod renderer;
pub mod tools;
