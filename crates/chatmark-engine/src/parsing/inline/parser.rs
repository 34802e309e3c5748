use super::{
    cursor::Cursor,
    kinds::{BoldSpan, CodeSpan},
    types::InlineToken,
};

/// Splits one line of text into [`InlineToken`]s.
///
/// Scans left to right; at each position a bold span and a code span are
/// both tried. Delimiters that cannot close are kept as plain text, and empty
/// plain runs between adjacent spans are not emitted.
pub fn tokenize(s: &str) -> Vec<InlineToken> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineToken>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(InlineToken::PlainText(s[start..end].to_string()));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(token) = try_parse_bold(&mut cur).or_else(|| try_parse_code_span(&mut cur)) {
            flush_text(&mut out, s, text_start, start);
            text_start = cur.pos();
            out.push(token);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, s, text_start, cur.pos());
    out
}

/// Attempts to parse a bold span starting at the current position.
///
/// The span closes at the next `**`; an empty span does not match.
/// On failure, cursor position is restored.
fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    if !cur.starts_with(BoldSpan::DELIM) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(BoldSpan::DELIM.len());
    let inner_start = cur.pos();

    while !cur.eof() && !cur.starts_with(BoldSpan::DELIM) {
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.eof() || inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump_n(BoldSpan::DELIM.len());

    Some(InlineToken::Bold(cur.slice(inner_start, inner_end).to_string()))
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span isn't closed, or if it
/// is empty. On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let inner_start = cur.pos();

    while !cur.eof() && cur.peek() != Some(CodeSpan::TICK) {
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.eof() || inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(InlineToken::Code(cur.slice(inner_start, inner_end).to_string()))
}
