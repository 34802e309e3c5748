use crate::parsing::{
    blocks::{Block, Document},
    inline::{InlineToken, tokenize},
};

/// Converts a document into one outline line per block.
///
/// Inline spans are shown as `<b>..</b>` and `<code>..</code>`; multi-line
/// blocks list their lines separated by ` | `.
pub fn normalize(doc: &Document) -> Vec<String> {
    doc.blocks
        .iter()
        .map(|b| {
            let label = match b {
                Block::Heading { level, .. } => format!("h{level}"),
                Block::Paragraph { .. } => "p".to_string(),
                Block::UnorderedList { .. } => "ul".to_string(),
                Block::OrderedList { .. } => "ol".to_string(),
                Block::Blockquote { .. } => "quote".to_string(),
                Block::HorizontalRule => return "hr".to_string(),
            };
            let body = b
                .texts()
                .into_iter()
                .map(inline_outline)
                .collect::<Vec<_>>()
                .join(" | ");
            format!("{label}: {body}")
        })
        .collect()
}

fn inline_outline(text: &str) -> String {
    tokenize(text)
        .iter()
        .map(|t| match t {
            InlineToken::PlainText(s) => s.clone(),
            InlineToken::Bold(s) => format!("<b>{s}</b>"),
            InlineToken::Code(s) => format!("<code>{s}</code>"),
        })
        .collect()
}
