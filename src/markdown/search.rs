//! Occurrence search over cleared text.
//!
//! The search indexer runs [`clear`](super::clear::clear) over a corpus and
//! looks up query hits with [`indexes_of`]; the offsets it returns are offsets
//! into the cleared text, not into the original markup source.

use regex::RegexBuilder;

/// Byte offsets of every non-overlapping occurrence of `needle` in
/// `haystack`, in order. An empty needle has no occurrences.
pub fn indexes_of(haystack: &str, needle: &str, ignore_case: bool) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }

    if ignore_case {
        let pattern = RegexBuilder::new(&regex::escape(needle))
            .case_insensitive(true)
            .build()
            .expect("escaped needle is a valid pattern");
        pattern.find_iter(haystack).map(|m| m.start()).collect()
    } else {
        haystack.match_indices(needle).map(|(at, _)| at).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_every_occurrence_in_order() {
        assert_eq!(indexes_of("abc abc abc", "abc", false), vec![0, 4, 8]);
    }

    #[test]
    fn case_insensitive_matches_mixed_case() {
        assert_eq!(indexes_of("Rust and RUST and rust", "rust", true), vec![0, 9, 18]);
        assert_eq!(indexes_of("Rust and RUST and rust", "rust", false), vec![18]);
    }

    #[test]
    fn empty_needle_has_no_hits() {
        assert_eq!(indexes_of("anything", "", true), Vec::<usize>::new());
    }

    #[test]
    fn needle_with_regex_metacharacters_is_literal() {
        assert_eq!(indexes_of("a.c abc a.c", "a.c", true), vec![0, 8]);
    }

    #[test]
    fn occurrences_do_not_overlap() {
        assert_eq!(indexes_of("aaaa", "aa", false), vec![0, 2]);
    }
}
