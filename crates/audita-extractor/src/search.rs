//! Term search over page text

use crate::types::SearchHit;
use regex::{Regex, RegexBuilder};
use std::ops::Range;

fn term_regex(term: &str) -> Option<Regex> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Byte ranges of every case-insensitive occurrence of `term`
///
/// The term is matched literally; a blank term matches nothing.
pub fn find_occurrences(text: &str, term: &str) -> Vec<Range<usize>> {
    match term_regex(term) {
        Some(re) => re.find_iter(text).map(|m| m.range()).collect(),
        None => Vec::new(),
    }
}

/// Search every page for `term`
///
/// Each hit carries up to `context_chars` characters of surrounding text on
/// either side, flattened to a single line.
pub fn search_pages<S: AsRef<str>>(pages: &[S], term: &str, context_chars: usize) -> Vec<SearchHit> {
    let Some(re) = term_regex(term) else {
        return Vec::new();
    };

    pages
        .iter()
        .enumerate()
        .flat_map(|(index, page)| {
            let text = page.as_ref();
            re.find_iter(text)
                .map(|m| SearchHit {
                    page: index + 1,
                    start: m.start(),
                    end: m.end(),
                    snippet: snippet(text, m.range(), context_chars),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Wrap each occurrence of `term` in `open` and `close`
///
/// # Examples
///
/// ```
/// use audita_extractor::highlight;
///
/// assert_eq!(highlight("Dolor y DOLOR", "dolor", "[", "]"), "[Dolor] y [DOLOR]");
/// ```
pub fn highlight(text: &str, term: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for range in find_occurrences(text, term) {
        out.push_str(&text[last..range.start]);
        out.push_str(open);
        out.push_str(&text[range.clone()]);
        out.push_str(close);
        last = range.end;
    }
    out.push_str(&text[last..]);
    out
}

fn snippet(text: &str, range: Range<usize>, context_chars: usize) -> String {
    let before = &text[..range.start];
    let start = before
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map_or(range.start, |(i, _)| i);

    let after = &text[range.end..];
    let end = after
        .char_indices()
        .nth(context_chars)
        .map_or(text.len(), |(i, _)| range.end + i);

    text[start..end].split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_occurrences_case_insensitive() {
        let text = "Angina estable. ANGINA inestable";
        assert_eq!(find_occurrences(text, "angina"), vec![0..6, 16..22]);
    }

    #[test]
    fn test_term_is_literal() {
        assert_eq!(find_occurrences("dosis 1.5 mg (oral)", "(oral)"), vec![13..19]);
        assert!(find_occurrences("dosis 105 mg", "1.5").is_empty());
    }

    #[test]
    fn test_blank_term_matches_nothing() {
        assert!(find_occurrences("texto", "").is_empty());
        assert!(find_occurrences("texto", "   ").is_empty());
        assert_eq!(highlight("texto", " ", "<", ">"), "texto");
    }

    #[test]
    fn test_search_pages_snippet() {
        let pages = ["Motivo:\ncefalea intensa", "sin hallazgos", "Cefalea resuelta"];
        let hits = search_pages(&pages, "cefalea", 10);

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].page, 1);
        assert_eq!((hits[0].start, hits[0].end), (8, 15));
        assert_eq!(hits[0].snippet, "Motivo: cefalea intensa");
        assert_eq!(hits[1].page, 3);
        assert_eq!(hits[1].snippet, "Cefalea resuelta");
    }

    #[test]
    fn test_snippet_respects_char_boundaries() {
        let hits = search_pages(&["ñññññ dolor ááááá"], "dolor", 3);
        assert_eq!(hits[0].snippet, "ññ dolor áá");
    }
}
