//! # Rendering
//!
//! Maps each assembled [`Block`] to a UI-agnostic [`OutputNode`], running the
//! inline tokenizer over every text line. Presentation layers map each node
//! kind to a concrete widget; [`text`] provides a plain-text rendition.

pub mod text;

use serde::Serialize;

use crate::parsing::{
    Block, Document,
    inline::{InlineToken, tokenize},
};

pub use text::{TextStyle, to_plain_text};

/// Whether a list is bulleted or numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// One rendered list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Display number for ordered lists, counted from 1. Source numerals are
    /// never carried over. `None` for unordered lists.
    pub number: Option<usize>,
    pub content: Vec<InlineToken>,
}

/// A structured node ready for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputNode {
    Heading {
        level: u8,
        content: Vec<InlineToken>,
    },
    Paragraph {
        content: Vec<InlineToken>,
    },
    List {
        kind: ListKind,
        items: Vec<ListItem>,
    },
    Quote {
        lines: Vec<Vec<InlineToken>>,
    },
    Rule,
}

/// Renders a document, one node per block, in block order.
pub fn render(document: &Document) -> Vec<OutputNode> {
    document.blocks.iter().map(render_block).collect()
}

fn render_block(block: &Block) -> OutputNode {
    match block {
        Block::Heading { level, text } => OutputNode::Heading {
            level: *level,
            content: tokenize(text),
        },
        Block::Paragraph { text } => OutputNode::Paragraph {
            content: tokenize(text),
        },
        Block::UnorderedList { items } => render_list(ListKind::Unordered, items),
        Block::OrderedList { items } => render_list(ListKind::Ordered, items),
        Block::Blockquote { lines } => OutputNode::Quote {
            lines: lines.iter().map(|l| tokenize(l)).collect(),
        },
        Block::HorizontalRule => OutputNode::Rule,
    }
}

fn render_list(kind: ListKind, items: &[String]) -> OutputNode {
    let items = items
        .iter()
        .enumerate()
        .map(|(i, item)| ListItem {
            number: match kind {
                ListKind::Ordered => Some(i + 1),
                ListKind::Unordered => None,
            },
            content: tokenize(item),
        })
        .collect();
    OutputNode::List { kind, items }
}
