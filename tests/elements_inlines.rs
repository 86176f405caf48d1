//! Integration tests for delimiter-pair elements
//!
//! Italic, bold, strikethrough and inline code all pair a delimiter run with
//! a matching closer; the guards around adjacent delimiters and whitespace
//! edges decide which spans fire.

use markdown_tree::{parse, Element};

#[test]
fn italic_with_either_delimiter() {
    for source in ["an *em* span", "an _em_ span"] {
        let doc = parse(source);
        assert_eq!(doc.elements.len(), 3, "{source}");
        assert_eq!(doc.elements[0].text(), "an ");
        match &doc.elements[1] {
            Element::Italic { text, children } => {
                assert_eq!(text, "em");
                assert_eq!(children, &vec![Element::Text { text: "em".to_string() }]);
            }
            other => panic!("expected italic, got {other:?}"),
        }
        assert_eq!(doc.elements[2].text(), " span");
    }
}

#[test]
fn bold_wraps_a_nested_italic() {
    let doc = parse("**bold *and* nested**");
    assert_eq!(doc.elements.len(), 1);
    match &doc.elements[0] {
        Element::Bold { text, children } => {
            assert_eq!(text, "bold *and* nested");
            assert_eq!(children.len(), 3);
            assert_eq!(children[0].text(), "bold ");
            match &children[1] {
                Element::Italic { text, .. } => assert_eq!(text, "and"),
                other => panic!("expected italic child, got {other:?}"),
            }
            assert_eq!(children[2].text(), " nested");
        }
        other => panic!("expected bold, got {other:?}"),
    }
}

#[test]
fn doubled_delimiters_are_bold_not_italic() {
    let doc = parse("**strong**");
    assert_eq!(doc.elements.len(), 1);
    assert_eq!(doc.elements[0].kind(), "bold");
    assert_eq!(doc.elements[0].text(), "strong");
}

#[test]
fn strike_uses_doubled_tildes_only() {
    let doc = parse("a ~~gone~~ b");
    assert_eq!(doc.elements.len(), 3);
    match &doc.elements[1] {
        Element::Strike { text, .. } => assert_eq!(text, "gone"),
        other => panic!("expected strike, got {other:?}"),
    }

    let doc = parse("a ~alone~ b");
    assert_eq!(doc.elements.len(), 1);
    assert_eq!(doc.elements[0].kind(), "text");
}

#[test]
fn inline_code_is_a_leaf() {
    let doc = parse("use `code` here");
    match &doc.elements[1] {
        Element::InlineCode { text } => assert_eq!(text, "code"),
        other => panic!("expected inline code, got {other:?}"),
    }
    // Leaves expose no children.
    assert!(doc.elements[1].children().is_empty());
}

#[test]
fn inline_code_content_is_not_reparsed() {
    let doc = parse("`*not em*`");
    assert_eq!(doc.elements.len(), 1);
    match &doc.elements[0] {
        Element::InlineCode { text } => assert_eq!(text, "*not em*"),
        other => panic!("expected inline code, got {other:?}"),
    }
}

#[test]
fn inline_code_with_whitespace_edges_stays_text() {
    let doc = parse("a ` padded ` b");
    assert_eq!(doc.elements.len(), 1);
    assert_eq!(doc.elements[0].kind(), "text");
}

#[test]
fn emphasis_does_not_cross_line_breaks() {
    let doc = parse("*left\nright*");
    assert_eq!(doc.elements.len(), 1);
    assert_eq!(doc.elements[0].kind(), "text");
}

#[test]
fn unclosed_delimiter_stays_literal() {
    let doc = parse("an *unclosed span");
    assert_eq!(doc.elements.len(), 1);
    assert_eq!(doc.elements[0].kind(), "text");
}

#[test]
fn adjacent_spans_each_match() {
    let doc = parse("*a* *b*");
    assert_eq!(doc.elements.len(), 3);
    assert_eq!(doc.elements[0].text(), "a");
    assert_eq!(doc.elements[1].text(), " ");
    assert_eq!(doc.elements[2].text(), "b");
}
