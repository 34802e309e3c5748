/// Bold span inline type with owned delimiter constant.
pub struct BoldSpan;

impl BoldSpan {
    /// Opens and closes a bold span.
    pub const DELIM: &'static [u8; 2] = b"**";
}
