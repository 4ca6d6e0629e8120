//! Local analysis of Mermaid diagram source.
//!
//! Everything here is pure string inspection: detecting the diagram type from
//! the leading keyword, estimating complexity from line/character counts, and
//! producing improvement suggestions from known patterns. Actual parsing and
//! rendering belong to the external renderer API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rendering theme accepted by the renderer API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// The renderer's default theme.
    #[default]
    Modern,
    /// Traditional Mermaid styling.
    Classic,
    /// Dark background variant.
    Dark,
    /// Reduced-ornament variant.
    Minimal,
}

impl Theme {
    /// All accepted theme names, as declared in the tool schemas.
    pub const NAMES: [&'static str; 4] = ["modern", "classic", "dark", "minimal"];
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Modern => "modern",
            Self::Classic => "classic",
            Self::Dark => "dark",
            Self::Minimal => "minimal",
        };
        f.write_str(name)
    }
}

/// Mermaid diagram families this adapter knows how to talk about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramType {
    /// `graph` / `flowchart` diagrams.
    Flowchart,
    /// `sequenceDiagram`.
    Sequence,
    /// `classDiagram`.
    Class,
    /// `stateDiagram` / `stateDiagram-v2`.
    State,
    /// `gantt` charts.
    Gantt,
    /// `pie` charts.
    Pie,
    /// `journey` maps.
    Journey,
    /// `gitGraph`.
    Git,
    /// No recognised declaration keyword.
    Unknown,
}

impl DiagramType {
    /// Detects the diagram type from the leading declaration keyword.
    #[must_use]
    pub fn detect(code: &str) -> Self {
        let head = code.trim_start().to_lowercase();

        if head.starts_with("sequencediagram") {
            Self::Sequence
        } else if head.starts_with("classdiagram") {
            Self::Class
        } else if head.starts_with("statediagram") {
            Self::State
        } else if head.starts_with("gantt") {
            Self::Gantt
        } else if head.starts_with("pie") {
            Self::Pie
        } else if head.starts_with("journey") {
            Self::Journey
        } else if head.starts_with("gitgraph") {
            Self::Git
        } else if head.starts_with("graph") || head.starts_with("flowchart") {
            Self::Flowchart
        } else {
            Self::Unknown
        }
    }
}

impl fmt::Display for DiagramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Flowchart => "flowchart",
            Self::Sequence => "sequence",
            Self::Class => "class",
            Self::State => "state",
            Self::Gantt => "gantt",
            Self::Pie => "pie",
            Self::Journey => "journey",
            Self::Git => "git",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Rough size classification of a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// At most 10 lines and 500 characters.
    Low,
    /// More than 10 lines or 500 characters.
    Medium,
    /// More than 20 lines or 1000 characters.
    High,
}

impl Complexity {
    /// Estimates complexity from line and character counts.
    #[must_use]
    pub fn estimate(code: &str) -> Self {
        let lines = code.lines().count();
        let chars = code.chars().count();

        if lines > 20 || chars > 1000 {
            Self::High
        } else if lines > 10 || chars > 500 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(name)
    }
}

/// Keywords that open a valid diagram declaration.
const DECLARATION_KEYWORDS: [&str; 9] = [
    "graph",
    "flowchart",
    "sequenceDiagram",
    "classDiagram",
    "stateDiagram",
    "gantt",
    "pie",
    "journey",
    "gitGraph",
];

/// Fixed hints surfaced when the renderer rejects a diagram.
pub const SYNTAX_HINTS: [&str; 4] = [
    "check the diagram type declaration (graph, sequenceDiagram, etc.)",
    "check arrow syntax (-->, ->>)",
    "check for balanced brackets and quotes",
    "check node and edge definitions",
];

/// Produces ordered improvement suggestions for the given diagram source.
///
/// Each suggestion names the pattern or construct in the source it refers
/// to. An empty result means nothing was flagged; callers substitute a
/// "looks good" message.
#[must_use]
pub fn suggest(code: &str, diagram_type: DiagramType) -> Vec<String> {
    let mut suggestions = Vec::new();
    let lines: Vec<&str> = code.trim().lines().collect();

    if lines.is_empty() {
        suggestions.push("code is empty; add a diagram type declaration".to_string());
        return suggestions;
    }

    let has_declaration = lines.iter().any(|line| {
        let trimmed = line.trim_start();
        DECLARATION_KEYWORDS
            .iter()
            .any(|kw| trimmed.starts_with(kw))
    });
    if !has_declaration {
        suggestions.push(
            "missing diagram type declaration; start with 'graph TD', 'sequenceDiagram', etc."
                .to_string(),
        );
    }

    // graph without a direction renders top-down implicitly
    if code.contains("graph")
        && !["TD", "LR", "TB", "RL"].iter().any(|dir| code.contains(dir))
    {
        suggestions.push(
            "consider specifying graph direction: TD (top-down), LR (left-right), etc."
                .to_string(),
        );
    }

    if lines.len() > 5 && !code.contains("class") && !code.contains("style") {
        suggestions.push(
            "consider adding styling with classes or style definitions for better visual appeal"
                .to_string(),
        );
    }

    if Complexity::estimate(code) == Complexity::High {
        suggestions.push(
            "high complexity detected; consider breaking into multiple smaller diagrams"
                .to_string(),
        );
    }

    match diagram_type {
        DiagramType::Flowchart => {
            if !code.contains("-->") && !code.contains("---") {
                suggestions.push("use arrows (-->) to connect flowchart nodes".to_string());
            }
            if !code.contains('{') && !code.contains('[') && !code.contains('(') {
                suggestions.push(
                    "use different node shapes: [] for rectangles, {} for diamonds, () for circles"
                        .to_string(),
                );
            }
        }
        DiagramType::Sequence => {
            if !code.contains("participant") {
                suggestions.push(
                    "define participants explicitly for cleaner sequence diagrams".to_string(),
                );
            }
            if !code.contains("note") {
                suggestions
                    .push("consider adding notes to clarify important interactions".to_string());
            }
        }
        _ => {}
    }

    suggestions
}
