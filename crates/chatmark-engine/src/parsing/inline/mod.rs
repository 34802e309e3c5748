//! # Inline Tokenization
//!
//! Cursor-based tokenization of one line of block text into plain text,
//! bold spans and code spans.
//!
//! ## Modules
//!
//! - **`types`**: `InlineToken` enum (PlainText, Bold, Code)
//! - **`kinds`**: inline types with owned delimiters (BoldSpan, CodeSpan)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `tokenize()` entry point with `try_parse_*` helpers
//!
//! Tokenization is lossless: re-wrapping each span in its delimiters and
//! concatenating reproduces the input exactly.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::InlineToken;
