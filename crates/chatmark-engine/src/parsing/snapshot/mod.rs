//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: converts a [`Document`](super::Document) into a compact,
//!   one-line-per-block outline for `insta` snapshots
//! - **`invariants`**: runtime checks that every non-blank source line was
//!   consumed exactly once, in order

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
