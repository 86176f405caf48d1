//! Typed element tree produced by the parser.
//!
//! [`Element`] is a closed set of variants; every traversal in this crate
//! matches on it exhaustively, so adding a kind forces each consumer to be
//! updated. Container kinds own children produced by recursively parsing their
//! delimiter-stripped content; leaf kinds store only their text and derived
//! fields.

use serde::Serialize;

/// One node of the parsed document tree.
///
/// The stored text is always the content after delimiters are stripped. For
/// `Link` the text is the bracket title; for `Image` it is the optional quoted
/// title (empty when none was supplied); `Rule` carries no text at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Element {
    /// Literal text no rule touched.
    Text { text: String },
    /// `* item`, `+ item` or `- item`.
    UnorderedListItem { text: String, children: Vec<Element> },
    /// `#{1,6} title`; the level is the number of `#` characters.
    Header { level: u8, text: String },
    /// `> quoted line`.
    Quote { text: String, children: Vec<Element> },
    /// Single `*` or `_` pair.
    Italic { text: String, children: Vec<Element> },
    /// Doubled `**` or `__` pair.
    Bold { text: String, children: Vec<Element> },
    /// Doubled `~~` pair.
    Strike { text: String, children: Vec<Element> },
    /// Horizontal rule: three identical `-`, `_` or `*` alone on a line.
    Rule,
    /// Single-backtick span.
    InlineCode { text: String },
    /// `[title](url)`.
    Link { url: String, text: String },
    /// `1. item`; the marker keeps the digit and whatever character follows it.
    OrderedListItem {
        marker: String,
        text: String,
        children: Vec<Element>,
    },
    /// Triple-backtick fenced span. The content is re-parsed into children,
    /// but flattening appends the raw span (see [`clear`](super::clear)).
    BlockCode { text: String, children: Vec<Element> },
    /// `![alt](url "title")`; an empty alt is normalized to `None`.
    Image {
        url: String,
        alt: Option<String>,
        text: String,
    },
}

impl Element {
    /// The delimiter-stripped text span this element stores.
    pub fn text(&self) -> &str {
        match self {
            Element::Text { text }
            | Element::UnorderedListItem { text, .. }
            | Element::Header { text, .. }
            | Element::Quote { text, .. }
            | Element::Italic { text, .. }
            | Element::Bold { text, .. }
            | Element::Strike { text, .. }
            | Element::InlineCode { text }
            | Element::Link { text, .. }
            | Element::OrderedListItem { text, .. }
            | Element::BlockCode { text, .. }
            | Element::Image { text, .. } => text,
            Element::Rule => "",
        }
    }

    /// Children produced by the recursive parse; empty for leaf kinds.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::UnorderedListItem { children, .. }
            | Element::Quote { children, .. }
            | Element::Italic { children, .. }
            | Element::Bold { children, .. }
            | Element::Strike { children, .. }
            | Element::OrderedListItem { children, .. }
            | Element::BlockCode { children, .. } => children,
            Element::Text { .. }
            | Element::Header { .. }
            | Element::Rule
            | Element::InlineCode { .. }
            | Element::Link { .. }
            | Element::Image { .. } => &[],
        }
    }

    /// Whether this kind recursively re-parses its content.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Element::UnorderedListItem { .. }
                | Element::Quote { .. }
                | Element::Italic { .. }
                | Element::Bold { .. }
                | Element::Strike { .. }
                | Element::OrderedListItem { .. }
                | Element::BlockCode { .. }
        )
    }

    /// Short kind name used by the CLI summary output.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Text { .. } => "text",
            Element::UnorderedListItem { .. } => "unordered-list-item",
            Element::Header { .. } => "header",
            Element::Quote { .. } => "quote",
            Element::Italic { .. } => "italic",
            Element::Bold { .. } => "bold",
            Element::Strike { .. } => "strike",
            Element::Rule => "rule",
            Element::InlineCode { .. } => "inline-code",
            Element::Link { .. } => "link",
            Element::OrderedListItem { .. } => "ordered-list-item",
            Element::BlockCode { .. } => "block-code",
            Element::Image { .. } => "image",
        }
    }
}

/// A parsed document: the ordered sequence of top-level elements.
///
/// The tree is built fresh on every [`parse`](super::parser::parse) call and
/// is read-only afterwards; consumers traverse it for rendering, flattening or
/// type-filtered extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct MarkdownText {
    pub elements: Vec<Element>,
}

impl MarkdownText {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Depth-first pre-order traversal over every element in the tree.
    pub fn iter_depth_first(&self) -> DepthFirst<'_> {
        DepthFirst {
            stack: self.elements.iter().rev().collect(),
        }
    }

    /// All header elements, in document order.
    pub fn headers(&self) -> Box<dyn Iterator<Item = &Element> + '_> {
        Box::new(
            self.iter_depth_first()
                .filter(|element| matches!(element, Element::Header { .. })),
        )
    }

    /// All link URLs, in document order.
    pub fn link_urls(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter_depth_first().filter_map(|element| match element {
            Element::Link { url, .. } => Some(url.as_str()),
            _ => None,
        }))
    }
}

/// Iterator behind [`MarkdownText::iter_depth_first`].
pub struct DepthFirst<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        let element = self.stack.pop()?;
        for child in element.children().iter().rev() {
            self.stack.push(child);
        }
        Some(element)
    }
}
