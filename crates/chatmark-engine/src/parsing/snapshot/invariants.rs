use crate::parsing::blocks::{Block, Document, kinds::ThematicBreak};

/// Validates that `doc` accounts for every non-blank line of `lines`.
///
/// Asserts that:
/// - Each non-blank line is consumed by exactly one block, in source order
/// - Each list item, quote line and heading is the tail of its source line
/// - Paragraph text is the space-join of the lines it consumed
/// - No non-blank line is left over
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(lines: &[&str], doc: &Document) {
    let mut source = lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty());

    for (idx, b) in doc.blocks.iter().enumerate() {
        let mut next_line = || {
            source
                .next()
                .unwrap_or_else(|| panic!("block {idx} consumed past end of input: {b:?}"))
        };

        match b {
            Block::HorizontalRule => {
                let line = next_line();
                assert!(
                    ThematicBreak::matches(line),
                    "rule block {idx} built from non-rule line {line:?}"
                );
            }
            Block::Paragraph { text } => {
                let mut joined = next_line().to_string();
                while joined.len() < text.len() {
                    joined.push(' ');
                    joined.push_str(next_line());
                }
                assert_eq!(
                    &joined, text,
                    "paragraph block {idx} does not match its source lines"
                );
            }
            _ => {
                for content in b.texts() {
                    let line = next_line();
                    assert!(
                        line.ends_with(content),
                        "block {idx} content {content:?} is not the tail of line {line:?}"
                    );
                }
            }
        }
    }

    let leftover: Vec<&str> = source.collect();
    assert!(
        leftover.is_empty(),
        "lines not consumed by any block: {leftover:?}"
    );
}
