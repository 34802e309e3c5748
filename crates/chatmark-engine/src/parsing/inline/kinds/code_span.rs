/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: a `**` inside backticks is code, not bold.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
