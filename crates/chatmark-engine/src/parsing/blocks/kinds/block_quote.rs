/// Blockquote block type with owned delimiter constant.
///
/// Quotes do not nest: only one `>` prefix is stripped, anything after it
/// is quote content.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the quote prefix (`>` or `> `) from a trimmed line.
    ///
    /// Returns `None` if the line is not a quote. The content may be empty.
    pub fn strip_prefix(s: &str) -> Option<&str> {
        let rest = s.strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
