/// Splits a raw message into lines, treating `\r\n` the same as `\n`.
///
/// The returned slices borrow from `raw` and carry no line terminators.
/// An empty message yields a single empty line, which the assembler
/// consumes as a blank separator.
pub fn split_lines(raw: &str) -> Vec<&str> {
    raw.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
