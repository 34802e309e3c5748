//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`BoldSpan`**: `DELIM = b"**"`
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses bold inside it

pub mod bold_span;
pub mod code_span;

pub use bold_span::BoldSpan;
pub use code_span::CodeSpan;
