//! Tests for the parsing pipeline as a whole.
//!
//! Uses inline `insta` snapshots of the normalized outline, plus invariant
//! checks on every parsed input.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    Block, InlineToken, inline_for_block, parse_document, snapshot, split_lines,
};

fn parse_checked(md: &str) -> Vec<Block> {
    let doc = parse_document(md);
    snapshot::invariants(&split_lines(md), &doc);
    doc.blocks
}

fn strings(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|s| s.to_string()).collect()
}

#[rstest]
#[case::heading_then_paragraph(
    "# Title\n\nSome text",
    vec![
        Block::Heading { level: 1, text: "Title".into() },
        Block::Paragraph { text: "Some text".into() },
    ]
)]
#[case::two_lists(
    "- a\n- b\n\n1. x\n2. y",
    vec![
        Block::UnorderedList { items: strings(&["a", "b"]) },
        Block::OrderedList { items: strings(&["x", "y"]) },
    ]
)]
#[case::quote(
    "> line1\n> line2",
    vec![Block::Blockquote { lines: strings(&["line1", "line2"]) }]
)]
#[case::rule("---", vec![Block::HorizontalRule])]
#[case::mixed_markers("- a\n* b", vec![Block::UnorderedList { items: strings(&["a", "b"]) }])]
#[case::crlf(
    "# Title\r\n\r\nSome text\r\n",
    vec![
        Block::Heading { level: 1, text: "Title".into() },
        Block::Paragraph { text: "Some text".into() },
    ]
)]
fn parses_examples(#[case] md: &str, #[case] expected: Vec<Block>) {
    assert_eq!(parse_checked(md), expected);
}

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("   \n\t\n  ")]
fn blank_input_has_no_blocks(#[case] md: &str) {
    assert!(parse_checked(md).is_empty());
}

#[test]
fn paragraph_inline_tokens() {
    let blocks = parse_checked("plain **bold** and `code`");
    assert_eq!(blocks.len(), 1);
    assert_eq!(
        inline_for_block(&blocks[0]),
        vec![vec![
            InlineToken::PlainText("plain ".into()),
            InlineToken::Bold("bold".into()),
            InlineToken::PlainText(" and ".into()),
            InlineToken::Code("code".into()),
        ]]
    );
}

#[test]
fn rule_has_no_inline_content() {
    let blocks = parse_checked("---");
    assert!(inline_for_block(&blocks[0]).is_empty());
}

#[test]
fn typical_assistant_reply() {
    let md = "## Enrollment steps\n\
              Here is what you need to do:\n\
              1. Open the **Courses** tab\n\
              2. Pick a section\n\
              3. Press `Enroll`\n\
              \n\
              > Deadlines are strict.\n\
              ---\n\
              Questions? Just ask.";
    let doc = parse_document(md);
    snapshot::invariants(&split_lines(md), &doc);

    insta::assert_debug_snapshot!(snapshot::normalize(&doc), @r#"
    [
        "h2: Enrollment steps",
        "p: Here is what you need to do:",
        "ol: Open the <b>Courses</b> tab | Pick a section | Press <code>Enroll</code>",
        "quote: Deadlines are strict.",
        "hr",
        "p: Questions? Just ask.",
    ]
    "#);
}

#[test]
fn runs_never_swallow_the_next_kind() {
    let md = "text one\n> quote\n- bullet\n1. number\n# head\n---\nmore text\nand more";
    let doc = parse_document(md);
    snapshot::invariants(&split_lines(md), &doc);

    insta::assert_debug_snapshot!(snapshot::normalize(&doc), @r#"
    [
        "p: text one",
        "quote: quote",
        "ul: bullet",
        "ol: number",
        "h1: head",
        "hr",
        "p: more text and more",
    ]
    "#);
}

#[test]
fn parsing_is_repeatable() {
    let md = "# A\n- x\n* y\n\n> q\n\ntext `c` **b**";
    assert_eq!(parse_document(md), parse_document(md));
}
