/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default block when no
/// other kind matches. Consecutive text lines are joined into one.
pub struct Paragraph;

impl Paragraph {
    /// Separator placed between joined source lines.
    pub const LINE_SEPARATOR: &'static str = " ";

    /// Joins the collected lines of a paragraph run.
    pub fn join(lines: &[String]) -> String {
        lines.join(Self::LINE_SEPARATOR)
    }
}
