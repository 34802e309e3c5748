use super::kinds::{BlockQuote, BulletItem, Heading, OrderedItem, ThematicBreak};

/// The kind of a single line, decided without reference to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty after trimming. Separates blocks.
    Blank,
    /// Three or more `-`.
    Rule,
    /// `#`, `##` or `###` followed by text.
    Heading {
        /// Count of `#` markers (1..=3).
        level: u8,
    },
    /// Starts with `>`.
    Quote,
    /// Starts with `- ` or `* `.
    UnorderedItem,
    /// Starts with digits, `.` and a space.
    OrderedItem,
    /// Anything else.
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    /// What kind of line this is.
    pub kind: LineKind,
    /// Text after the kind's prefix has been stripped. For [`LineKind::Text`]
    /// this is the whole line; for `Blank` and `Rule` it is empty.
    pub content: &'a str,
}

impl<'a> ClassifiedLine<'a> {
    fn new(kind: LineKind, content: &'a str) -> Self {
        Self { kind, content }
    }
}

/// Classifies one already-trimmed line.
///
/// Rules are checked in priority order and the first match wins:
/// blank, rule, heading, quote, bullet item, ordered item, text.
pub fn classify(trimmed: &str) -> ClassifiedLine<'_> {
    if trimmed.is_empty() {
        return ClassifiedLine::new(LineKind::Blank, "");
    }
    if ThematicBreak::matches(trimmed) {
        return ClassifiedLine::new(LineKind::Rule, "");
    }
    if let Some((level, text)) = Heading::parse(trimmed) {
        return ClassifiedLine::new(LineKind::Heading { level }, text);
    }
    if let Some(content) = BlockQuote::strip_prefix(trimmed) {
        return ClassifiedLine::new(LineKind::Quote, content);
    }
    if let Some(content) = BulletItem::content(trimmed) {
        return ClassifiedLine::new(LineKind::UnorderedItem, content);
    }
    if let Some(content) = OrderedItem::content(trimmed) {
        return ClassifiedLine::new(LineKind::OrderedItem, content);
    }
    ClassifiedLine::new(LineKind::Text, trimmed)
}
