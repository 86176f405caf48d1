//! End-to-end tests for the plain-text projection
//!
//! `clear` parses and flattens in one call; these cases cover one document
//! per element kind plus the mixed documents the projection exists for.

use markdown_tree::{clear, flatten, parse};

#[test]
fn mixed_document_loses_all_markup() {
    assert_eq!(clear("# Title\nplain *em* text"), "Title\nplain em text");
}

#[test]
fn plain_text_round_trips() {
    assert_eq!(clear("nothing to strip here"), "nothing to strip here");
    assert_eq!(clear(""), "");
}

#[test]
fn header_keeps_only_its_text() {
    assert_eq!(clear("### Deep title"), "Deep title");
}

#[test]
fn emphasis_kinds_flatten_to_their_content() {
    assert_eq!(clear("*a* **b** ~~c~~"), "a b c");
}

#[test]
fn link_keeps_title_and_drops_url() {
    assert_eq!(clear("see [docs](https://e.io) now"), "see docs now");
}

#[test]
fn image_keeps_title_text_only() {
    assert_eq!(clear("![photo](pic.png \"A pic\")"), "A pic");
    assert_eq!(clear("![photo](pic.png)"), "");
}

#[test]
fn rule_leaves_an_empty_gap() {
    assert_eq!(clear("before\n---\nafter"), "before\n\nafter");
}

#[test]
fn inline_and_block_code_keep_their_content() {
    assert_eq!(clear("run `cargo` now"), "run cargo now");
    assert_eq!(clear("```let x = 1;```"), "let x = 1;");
}

#[test]
fn list_items_keep_raw_content() {
    // Item content is appended as stored, nested markup included.
    assert_eq!(clear("1. has *em* inside"), "has *em* inside");
    // Unordered items flatten through their children instead.
    assert_eq!(clear("* has *em* inside"), "has em inside");
}

#[test]
fn quote_flattens_through_nesting() {
    assert_eq!(clear("> > **deep** words"), "deep words");
}

#[test]
fn flatten_matches_clear_on_a_parsed_tree() {
    let source = "## Head\n* item with `code`";
    assert_eq!(flatten(&parse(source)), clear(source));
}
