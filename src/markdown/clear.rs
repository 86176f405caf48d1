//! Plain-text projection of a parsed tree.
//!
//! List items, quotes and the emphasis kinds re-expand from their children,
//! whose delimiters were already stripped during the build. Every other kind
//! appends its stored text verbatim. Block code, ordered list items and
//! images keep their stored span even though the builder re-parsed them; the
//! asymmetry is deliberate.

use super::elements::{Element, MarkdownText};
use super::parser::parse;

/// Strip all markup from a document: parse it, then flatten the tree.
///
/// Offsets into the result do not line up with offsets into `source`; callers
/// highlighting hits must re-derive positions from the tree.
pub fn clear(source: &str) -> String {
    flatten(&parse(source))
}

/// Concatenate the visible text of an already-parsed tree.
pub fn flatten(document: &MarkdownText) -> String {
    let mut out = String::new();
    for element in &document.elements {
        flatten_into(element, &mut out);
    }
    out
}

fn flatten_into(element: &Element, out: &mut String) {
    match element {
        Element::Text { text }
        | Element::Header { text, .. }
        | Element::InlineCode { text }
        | Element::Link { text, .. }
        | Element::OrderedListItem { text, .. }
        | Element::BlockCode { text, .. }
        | Element::Image { text, .. } => out.push_str(text),
        Element::Rule => {}
        Element::UnorderedListItem { children, .. }
        | Element::Quote { children, .. }
        | Element::Italic { children, .. }
        | Element::Bold { children, .. }
        | Element::Strike { children, .. } => {
            for child in children {
                flatten_into(child, out);
            }
        }
    }
}
