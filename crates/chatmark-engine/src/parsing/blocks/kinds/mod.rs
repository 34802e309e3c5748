//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. Classification
//! calls these predicates; it never hardcodes `#`, `>`, or list markers.

pub mod block_quote;
pub mod heading;
pub mod list_item;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use heading::Heading;
pub use list_item::{BulletItem, OrderedItem};
pub use paragraph::Paragraph;
pub use thematic_break::ThematicBreak;
