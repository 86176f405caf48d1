//! Markdown parsing and plain-text projection.
//!
//! The pipeline is deliberately small:
//!
//! - [`scanner`] owns the twelve grammar rules and finds the earliest,
//!   highest-priority match in a span.
//! - [`parser`] consumes matches left to right and builds the element tree,
//!   recursing into the delimiter-stripped content of container kinds.
//! - [`clear`] walks a finished tree and concatenates the visible text.
//! - [`search`] locates occurrences inside the cleared text for indexing.
//!
//! Offsets in cleared text are not source offsets: markup characters are
//! removed, so callers mapping search hits back to the source must re-derive
//! positions from the tree, not assume a 1:1 mapping.

pub mod clear;
pub mod elements;
pub mod parser;
pub mod scanner;
pub mod search;

pub use clear::{clear, flatten};
pub use elements::{Element, MarkdownText};
pub use parser::parse;
