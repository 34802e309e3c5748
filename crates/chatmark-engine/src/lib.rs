//! # chatmark-engine
//!
//! Turns the raw text of an assistant chat reply into structured, renderable
//! content: headings, paragraphs, lists, quotes, rules, and inline bold/code
//! spans.
//!
//! The pipeline is pure and total:
//!
//! ```text
//! raw &str ─ split_lines ─> assemble ─> Document ─ render ─> Vec<OutputNode>
//! ```
//!
//! No input is rejected; unmatched delimiters degrade to plain text.

pub mod parsing;
pub mod render;

pub use parsing::{
    Block, Document, InlineToken, LineKind, assemble, classify, parse_document, split_lines,
    tokenize,
};
pub use render::{ListItem, ListKind, OutputNode, TextStyle, render, to_plain_text};

/// Formats one raw chat message into output nodes.
pub fn format_message(raw: &str) -> Vec<OutputNode> {
    render(&parse_document(raw))
}
