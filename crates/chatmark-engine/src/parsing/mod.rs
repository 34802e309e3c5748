pub mod blocks;
pub mod inline;
pub mod lines;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use blocks::{Block, Document, LineKind, assemble, classify};
pub use inline::{InlineToken, tokenize};
pub use lines::split_lines;

/// Parses a raw chat message into a [`Document`].
pub fn parse_document(raw: &str) -> Document {
    assemble(&split_lines(raw))
}

/// Tokenizes every text line a block carries (see [`Block::texts`]).
pub fn inline_for_block(b: &Block) -> Vec<Vec<InlineToken>> {
    b.texts().into_iter().map(tokenize).collect()
}
