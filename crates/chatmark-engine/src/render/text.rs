//! Plain-text rendition of output nodes.
//!
//! Used for message previews, clipboard copy and terminal output, where no
//! widget layer is available to style headings or spans.

use super::{ListKind, OutputNode};
use crate::parsing::inline::InlineToken;

/// Presentation options for [`to_plain_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    /// Glyph printed before unordered list items.
    pub bullet: String,
    /// Number of `-` characters printed for a rule.
    pub rule_width: usize,
    /// Prefix printed before each quoted line.
    pub quote_prefix: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            bullet: "•".to_string(),
            rule_width: 40,
            quote_prefix: "> ".to_string(),
        }
    }
}

/// Flattens nodes into plain text, one blank line between blocks.
///
/// Bold spans lose their markers; code spans keep their backticks so the
/// code stays distinguishable.
pub fn to_plain_text(nodes: &[OutputNode], style: &TextStyle) -> String {
    nodes
        .iter()
        .map(|node| node_lines(node, style).join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn node_lines(node: &OutputNode, style: &TextStyle) -> Vec<String> {
    match node {
        OutputNode::Heading { content, .. } | OutputNode::Paragraph { content } => {
            vec![flatten(content)]
        }
        OutputNode::List { kind, items } => items
            .iter()
            .map(|item| {
                let marker = match (kind, item.number) {
                    (ListKind::Ordered, Some(n)) => format!("{n}."),
                    _ => style.bullet.clone(),
                };
                format!("{marker} {}", flatten(&item.content))
            })
            .collect(),
        OutputNode::Quote { lines } => lines
            .iter()
            .map(|line| format!("{}{}", style.quote_prefix, flatten(line)))
            .collect(),
        OutputNode::Rule => vec!["-".repeat(style.rule_width)],
    }
}

fn flatten(tokens: &[InlineToken]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            InlineToken::PlainText(s) | InlineToken::Bold(s) => s.clone(),
            InlineToken::Code(s) => format!("`{s}`"),
        })
        .collect()
}
