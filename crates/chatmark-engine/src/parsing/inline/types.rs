use serde::Serialize;

/// One fragment of inline formatting within a block's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum InlineToken {
    /// Text outside any span, including unmatched delimiters.
    PlainText(String),
    /// Content between a pair of `**`.
    Bold(String),
    /// Content between a pair of backticks.
    Code(String),
}

impl InlineToken {
    /// The token's text without delimiters.
    pub fn text(&self) -> &str {
        match self {
            InlineToken::PlainText(t) | InlineToken::Bold(t) | InlineToken::Code(t) => t,
        }
    }
}
