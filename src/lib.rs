//! # markdown-tree
//!
//! A single-pass, precedence-ordered markup parser that converts a raw text
//! document into a typed element tree, plus a flattening operation that strips
//! all markup and recovers plain text.
//!
//! The grammar is twelve rules with a fixed priority order. Where more than one
//! rule could match at the same offset, the rule with the lower priority number
//! wins; everything no rule touches degrades to literal text, so parsing never
//! fails.
//!
//! ```text
//! let document = markdown_tree::parse("# Title\nplain *em* text");
//! let plain = markdown_tree::clear("# Title\nplain *em* text");
//! // plain == "Title\nplain em text"
//! ```

pub mod markdown;

pub use markdown::{clear, flatten, parse, Element, MarkdownText};
