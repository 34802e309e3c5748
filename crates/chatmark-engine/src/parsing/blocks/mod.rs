//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line gets a
//!    [`LineKind`] and its content with the kind's prefix stripped.
//!
//! 2. **Block Construction** (`builder`): a [`BlockBuilder`] walks the
//!    classified lines with one forward pointer and groups runs of the same
//!    kind into [`Block`]s.
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `Document`
//! - **`kinds`**: block-specific types owning their delimiters and predicates
//! - **`classify`**: `classify` and `LineKind`
//! - **`builder`**: `BlockBuilder` state machine and `assemble`
//!
//! ## Key Invariants
//!
//! - No nesting: quotes, lists and paragraphs contain plain text only
//! - Every non-blank line lands in exactly one block, in source order
//! - Blank lines only separate blocks

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::{BlockBuilder, assemble};
pub use classify::{ClassifiedLine, LineKind, classify};
pub use types::{Block, Document};
