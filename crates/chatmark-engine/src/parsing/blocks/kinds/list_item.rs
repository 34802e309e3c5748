/// Unordered list item (`- ` or `* `).
///
/// Both markers belong to the same kind, so a run mixing them is one list.
pub struct BulletItem;

impl BulletItem {
    /// Accepted bullet markers.
    pub const MARKERS: [char; 2] = ['-', '*'];

    /// Returns the item content after the marker and its single space.
    pub fn content(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKERS)?.strip_prefix(' ')
    }
}

/// Ordered list item (`1. `, `42. `).
///
/// The numeral is discarded; only the item content is kept.
pub struct OrderedItem;

impl OrderedItem {
    /// The character terminating the numeral.
    pub const DELIMITER: char = '.';

    /// Returns the item content after the numeral, `.`, and single space.
    pub fn content(line: &str) -> Option<&str> {
        let digits = line.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        line[digits..]
            .strip_prefix(Self::DELIMITER)?
            .strip_prefix(' ')
    }
}
