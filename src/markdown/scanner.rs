//! Ordered rule table and earliest-match scanning.
//!
//! The grammar is a fixed list of twelve rules. Rather than one combined
//! alternation whose tie-break is an artifact of a particular engine's
//! backtracking order, every rule owns an independent finder; the scan returns
//! the match with the smallest start offset and breaks ties by rule priority.
//!
//! Line-anchored rules are compiled once into `(?mR)` regexes, so CRLF line
//! endings anchor the same way plain LF does. The delimiter
//! pair rules need the negative look-around guards of the grammar, which the
//! regex crate does not support, so they are explicit byte scanners: candidate
//! openers are guarded on the byte just before them, and closing delimiters
//! are tried left to right until one passes the shape and following-byte
//! guards. All matching stays within the scanned span's original positions.

use once_cell::sync::Lazy;
use regex::Regex;

/// Grammar rules in priority order; a lower variant wins ties at equal start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    UnorderedListItem,
    Header,
    Quote,
    Italic,
    Bold,
    Strike,
    HorizontalRule,
    InlineCode,
    Link,
    OrderedListItem,
    BlockCode,
    Image,
}

/// The fixed priority order the scan walks.
pub const RULES: [Rule; 12] = [
    Rule::UnorderedListItem,
    Rule::Header,
    Rule::Quote,
    Rule::Italic,
    Rule::Bold,
    Rule::Strike,
    Rule::HorizontalRule,
    Rule::InlineCode,
    Rule::Link,
    Rule::OrderedListItem,
    Rule::BlockCode,
    Rule::Image,
];

/// A fired rule and the byte span of the full match, delimiters included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    pub rule: Rule,
    pub start: usize,
    pub end: usize,
}

// CRLF mode keeps a trailing carriage return out of line-anchored content.
static UNORDERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?mR)^[*+-] .+$").unwrap());
static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?mR)^#{1,6} .+?$").unwrap());
static QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?mR)^> .+?$").unwrap());
// No backreferences in the regex crate, so "three identical characters" is an
// explicit alternation.
static HORIZONTAL_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^(?:---|___|\*\*\*)$").unwrap());
// The character after the digit is unconstrained; "1x item" is a list item
// with marker "1x".
static ORDERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?mR)^[0-9]. .+$").unwrap());

/// Find the earliest match of any rule at or after `from`.
///
/// Returns `None` when no rule matches anywhere in the remaining span.
pub fn next_match(text: &str, from: usize) -> Option<RuleMatch> {
    let mut best: Option<RuleMatch> = None;
    for rule in RULES {
        if let Some((start, end)) = find_rule(rule, text, from) {
            let better = match best {
                None => true,
                Some(current) => start < current.start,
            };
            if better {
                best = Some(RuleMatch { rule, start, end });
                // Nothing can start earlier than `from` itself.
                if start == from {
                    break;
                }
            }
        }
    }
    best
}

/// Earliest match of a single rule at or after `from`.
pub fn find_rule(rule: Rule, text: &str, from: usize) -> Option<(usize, usize)> {
    match rule {
        Rule::UnorderedListItem => find_regex(&UNORDERED, text, from),
        Rule::Header => find_regex(&HEADER, text, from),
        Rule::Quote => find_regex(&QUOTE, text, from),
        Rule::Italic => earliest(
            find_delimited(text, from, b'*', 1),
            find_delimited(text, from, b'_', 1),
        ),
        Rule::Bold => earliest(
            find_delimited(text, from, b'*', 2),
            find_delimited(text, from, b'_', 2),
        ),
        Rule::Strike => find_delimited(text, from, b'~', 2),
        Rule::HorizontalRule => find_regex(&HORIZONTAL_RULE, text, from),
        Rule::InlineCode => find_inline_code(text, from),
        Rule::Link => earliest(find_bracket_link(text, from), find_line_start_link(text, from)),
        Rule::OrderedListItem => find_regex(&ORDERED, text, from),
        Rule::BlockCode => find_block_code(text, from),
        Rule::Image => earliest(find_image_link(text, from), find_line_start_link(text, from)),
    }
}

fn find_regex(pattern: &Regex, text: &str, from: usize) -> Option<(usize, usize)> {
    pattern.find_at(text, from).map(|m| (m.start(), m.end()))
}

/// Earlier of two candidate spans; the first argument wins ties, preserving
/// the left-to-right order of grammar alternatives.
fn earliest(a: Option<(usize, usize)>, b: Option<(usize, usize)>) -> Option<(usize, usize)> {
    match (a, b) {
        (Some(a), Some(b)) => {
            if b.0 < a.0 {
                Some(b)
            } else {
                Some(a)
            }
        }
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

fn is_run(bytes: &[u8], at: usize, run: usize, delim: u8) -> bool {
    at + run <= bytes.len() && bytes[at..at + run].iter().all(|&b| b == delim)
}

/// Scan for a `run`-wide delimiter pair.
///
/// An opener must not be preceded by the delimiter, its first content byte
/// must not be the delimiter, and a closer must not be followed by the
/// delimiter. Between the first content byte and the closer, only the final
/// byte may be a line break; closers are tried left to right, so a closer
/// rejected by its following-byte guard extends the span to the next one.
fn find_delimited(text: &str, from: usize, delim: u8, run: usize) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    let mut i = from;
    while i + run < len {
        if !is_run(bytes, i, run, delim)
            || (i > 0 && bytes[i - 1] == delim)
            || bytes[i + run] == delim
        {
            i += 1;
            continue;
        }

        let content = i + run;
        let mut j = content + 1;
        while j + run <= len {
            if is_run(bytes, j, run, delim) {
                let rest = &bytes[content + 1..j];
                if interior_line_break(rest) {
                    // A break this far in stays interior for every longer
                    // span, so no later closer can match from this opener.
                    break;
                }
                if j + run >= len || bytes[j + run] != delim {
                    return Some((i, j + run));
                }
            }
            j += 1;
        }

        i += 1;
    }

    None
}

/// True when any byte but the last is a line break.
fn interior_line_break(rest: &[u8]) -> bool {
    rest.len() > 1 && rest[..rest.len() - 1].contains(&b'\n')
}

/// Single-backtick span; content stays on one line and must not begin or end
/// with whitespace or another backtick.
fn find_inline_code(text: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    let mut i = from;
    while i + 1 < len {
        if bytes[i] != b'`' || (i > 0 && bytes[i - 1] == b'`') {
            i += 1;
            continue;
        }
        let first = bytes[i + 1];
        if first == b'`' || first.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        let mut j = i + 2;
        while j < len {
            if bytes[j] == b'\n' {
                break;
            }
            if bytes[j] == b'`' {
                let last = bytes[j - 1];
                let closed = last != b'`'
                    && !last.is_ascii_whitespace()
                    && (j + 1 >= len || bytes[j + 1] != b'`');
                if closed {
                    return Some((i, j + 1));
                }
            }
            j += 1;
        }

        i += 1;
    }

    None
}

/// Triple-backtick span; content must not begin with a backtick and the
/// closing fence must directly follow a non-whitespace byte.
fn find_block_code(text: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    let mut i = from;
    while i + 3 < len {
        if !is_run(bytes, i, 3, b'`') || (i >= 3 && is_run(bytes, i - 3, 3, b'`')) {
            i += 1;
            continue;
        }
        let content = i + 3;
        if bytes[content] == b'`' {
            i += 1;
            continue;
        }

        let mut j = content + 1;
        while j + 3 <= len {
            if is_run(bytes, j, 3, b'`')
                && !bytes[j - 1].is_ascii_whitespace()
                && !is_run(bytes, j + 3, 3, b'`')
            {
                return Some((i, j + 3));
            }
            j += 1;
        }

        i += 1;
    }

    None
}

/// `[title](url)` starting exactly at `start`; the bracket text may be empty
/// but must contain no brackets, the parenthesis text is non-empty and stays
/// on one line. Returns the end of the whole form.
fn bracket_pair_at(bytes: &[u8], start: usize) -> Option<usize> {
    let len = bytes.len();
    debug_assert_eq!(bytes[start], b'[');

    let mut close = start + 1;
    loop {
        if close >= len || bytes[close] == b'[' {
            return None;
        }
        if bytes[close] == b']' {
            break;
        }
        close += 1;
    }

    paren_end(bytes, close + 1, true)
}

/// `(...)` starting exactly at `open`. With `require_content` the first `)`
/// cannot close an empty pair; it is consumed as content instead.
fn paren_end(bytes: &[u8], open: usize, require_content: bool) -> Option<usize> {
    let len = bytes.len();
    if open >= len || bytes[open] != b'(' {
        return None;
    }

    let content = open + 1;
    let mut m = content;
    while m < len {
        match bytes[m] {
            b'\n' => return None,
            b')' if !(require_content && m == content) => return Some(m + 1),
            _ => {}
        }
        m += 1;
    }

    None
}

fn find_bracket_link(text: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        if bytes[i] == b'[' {
            if let Some(end) = bracket_pair_at(bytes, i) {
                return Some((i, end));
            }
        }
        i += 1;
    }
    None
}

fn find_image_link(text: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i + 1 < bytes.len() {
        if bytes[i] == b'!' && bytes[i + 1] == b'[' {
            if let Some(end) = bracket_pair_at(bytes, i + 1) {
                return Some((i, end));
            }
        }
        i += 1;
    }
    None
}

/// Secondary link/image form: at a line start, a run of `[` (possibly empty)
/// closed by `]`, then a parenthesis pair that may be empty.
fn find_line_start_link(text: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    let mut ls = from;
    while ls < len {
        if ls == 0 || bytes[ls - 1] == b'\n' {
            let mut t = ls;
            while t < len && bytes[t] == b'[' {
                t += 1;
            }
            if t < len && bytes[t] == b']' {
                if let Some(end) = paren_end(bytes, t + 1, false) {
                    return Some((ls, end));
                }
            }
        }
        ls += 1;
    }

    None
}
