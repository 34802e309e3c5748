/// Horizontal rule (`---`) with owned delimiter constants.
pub struct ThematicBreak;

impl ThematicBreak {
    /// The only character a rule line may contain.
    pub const MARKER: u8 = b'-';
    /// Minimum number of markers for a rule.
    pub const MIN_LEN: usize = 3;

    /// Returns true if the trimmed line is three or more `-` and nothing else.
    pub fn matches(line: &str) -> bool {
        line.len() >= Self::MIN_LEN && line.bytes().all(|b| b == Self::MARKER)
    }
}
