//! Tree builder: consumes scanner matches left to right and produces the
//! element tree.
//!
//! Parsing never fails. Gaps between matches become literal [`Element::Text`]
//! leaves, container matches recurse on their delimiter-stripped content, and
//! an input no rule touches comes back as a single text leaf. The only panics
//! are internal-invariant faults: a sub-extraction inside an already-matched
//! span (link or image title/url) has no failure mode that user input is
//! supposed to reach.

use once_cell::sync::Lazy;
use regex::Regex;

use super::elements::{Element, MarkdownText};
use super::scanner::{self, Rule};

/// Containers nested past this depth stop recursing and keep their content as
/// a single text leaf, bounding stack use on adversarial inputs.
const MAX_DEPTH: usize = 64;

/// Splits an already-matched link or image span into bracket and parenthesis
/// text.
static LINK_PARTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*)]\((.*)\)").unwrap());

/// Splits a parenthesis text with a quoted title suffix into url and title.
static QUOTED_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(.*)(".*?")"#).unwrap());

/// Parse a whole document into its element tree.
///
/// Worst case the result is a single [`Element::Text`] equal to the input.
pub fn parse(source: &str) -> MarkdownText {
    MarkdownText::new(find_elements(source, 0))
}

fn find_elements(text: &str, depth: usize) -> Vec<Element> {
    let mut elements = Vec::new();
    let mut consumed = 0;

    while let Some(found) = scanner::next_match(text, consumed) {
        if consumed < found.start {
            elements.push(text_leaf(&text[consumed..found.start]));
        }

        let matched = &text[found.start..found.end];
        elements.push(build_element(found.rule, matched, depth));
        consumed = found.end;
    }

    if consumed < text.len() {
        elements.push(text_leaf(&text[consumed..]));
    }

    elements
}

fn build_element(rule: Rule, matched: &str, depth: usize) -> Element {
    match rule {
        Rule::UnorderedListItem => {
            let content = &matched[2..];
            Element::UnorderedListItem {
                text: content.to_string(),
                children: child_elements(content, depth),
            }
        }
        Rule::Header => {
            let level = matched.bytes().take_while(|&b| b == b'#').count();
            Element::Header {
                level: level as u8,
                text: matched[level + 1..].to_string(),
            }
        }
        Rule::Quote => {
            let content = &matched[2..];
            Element::Quote {
                text: content.to_string(),
                children: child_elements(content, depth),
            }
        }
        Rule::Italic => {
            let content = &matched[1..matched.len() - 1];
            Element::Italic {
                text: content.to_string(),
                children: child_elements(content, depth),
            }
        }
        Rule::Bold => {
            let content = &matched[2..matched.len() - 2];
            Element::Bold {
                text: content.to_string(),
                children: child_elements(content, depth),
            }
        }
        Rule::Strike => {
            let content = &matched[2..matched.len() - 2];
            Element::Strike {
                text: content.to_string(),
                children: child_elements(content, depth),
            }
        }
        Rule::HorizontalRule => Element::Rule,
        Rule::InlineCode => Element::InlineCode {
            text: matched[1..matched.len() - 1].to_string(),
        },
        Rule::Link => {
            let (title, url) = split_link(matched);
            Element::Link { url, text: title }
        }
        Rule::OrderedListItem => {
            // Marker: the digit plus whatever single character follows it;
            // the space after the marker is not part of the content.
            let space = matched
                .char_indices()
                .nth(2)
                .map(|(at, _)| at)
                .expect("ordered list match is at least three characters");
            let content = &matched[space + 1..];
            Element::OrderedListItem {
                marker: matched[..space].to_string(),
                text: content.to_string(),
                children: child_elements(content, depth),
            }
        }
        Rule::BlockCode => {
            let content = &matched[3..matched.len() - 3];
            Element::BlockCode {
                text: content.to_string(),
                children: child_elements(content, depth),
            }
        }
        Rule::Image => build_image(matched),
    }
}

fn child_elements(content: &str, depth: usize) -> Vec<Element> {
    if depth >= MAX_DEPTH {
        return vec![text_leaf(content)];
    }
    find_elements(content, depth + 1)
}

fn text_leaf(text: &str) -> Element {
    Element::Text {
        text: text.to_string(),
    }
}

/// Extract the bracket and parenthesis text from a matched link or image span.
///
/// A failure here is a scanner bug, not a user-input error, and surfaces as an
/// unrecoverable fault.
fn split_link(matched: &str) -> (String, String) {
    let caps = LINK_PARTS
        .captures(matched)
        .expect("matched link span must contain bracket and parenthesis groups");
    (caps[1].to_string(), caps[2].to_string())
}

fn build_image(matched: &str) -> Element {
    let (alt, target) = split_link(matched);
    let alt = if alt.is_empty() { None } else { Some(alt) };

    match QUOTED_TITLE.captures(&target) {
        Some(caps) => {
            // Drop the character separating the url from the quoted title.
            let mut url = caps[1].chars();
            url.next_back();
            let quoted = &caps[2];
            Element::Image {
                url: url.as_str().to_string(),
                alt,
                text: quoted[1..quoted.len() - 1].to_string(),
            }
        }
        None => Element::Image {
            url: target,
            alt,
            text: String::new(),
        },
    }
}
