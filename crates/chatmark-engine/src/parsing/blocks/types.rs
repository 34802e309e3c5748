use serde::Serialize;

/// One structural unit of a parsed message.
///
/// Text-bearing variants hold raw text; inline tokenization happens at
/// render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A single-line heading.
    Heading {
        /// 1, 2 or 3.
        level: u8,
        text: String,
    },
    /// Consecutive text lines joined with a single space.
    Paragraph { text: String },
    /// A run of `-` / `*` items.
    UnorderedList { items: Vec<String> },
    /// A run of numbered items. Source numerals are not kept.
    OrderedList { items: Vec<String> },
    /// A run of `>` lines, prefix stripped.
    Blockquote { lines: Vec<String> },
    /// A `---` rule.
    HorizontalRule,
}

impl Block {
    /// The renderable text lines this block carries, in order.
    ///
    /// Headings and paragraphs carry one line, lists one per item, quotes
    /// one per quoted line, rules none.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Block::Heading { text, .. } | Block::Paragraph { text } => vec![text.as_str()],
            Block::UnorderedList { items } | Block::OrderedList { items } => {
                items.iter().map(String::as_str).collect()
            }
            Block::Blockquote { lines } => lines.iter().map(String::as_str).collect(),
            Block::HorizontalRule => vec![],
        }
    }
}

/// An assembled message: blocks in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
