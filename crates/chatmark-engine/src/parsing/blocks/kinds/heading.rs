/// ATX-style heading (`#`, `##`, `###`) with owned delimiter constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: u8 = b'#';
    /// Deepest heading level recognised. `####` and beyond are plain text.
    pub const MAX_LEVEL: u8 = 3;

    /// Parses a trimmed heading line into `(level, text)`.
    ///
    /// Requires one to three markers, at least one space, and non-empty text.
    /// The returned text starts after the whole run of spaces.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let markers = line.bytes().take_while(|&b| b == Self::MARKER).count();
        let level = u8::try_from(markers).ok()?;
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }

        let rest = &line[markers..];
        let text = rest.trim_start_matches(' ');
        if text.len() == rest.len() || text.is_empty() {
            return None;
        }
        Some((level, text))
    }
}
