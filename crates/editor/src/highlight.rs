//! Keyword Highlighting
//!
//! Flat reserved-word scan over the full buffer. This is deliberately not a
//! parser: keywords match case-sensitively as plain substrings wherever they
//! occur, including inside longer tokens ("divider" contains "div"). The
//! scan produces spans; rendering them is entirely the caller's concern.

use tracing::debug;

use crate::search::occurrences;

/// The HTML reserved words recognized by the default keyword set
pub const RESERVED_WORDS: [&str; 13] = [
    "html", "head", "title", "body", "div", "p", "span", "h1", "h2", "h3", "h4", "h5", "h6",
];

/// A fixed, ordered list of keywords to highlight
///
/// The order is significant: spans are produced keyword by keyword in list
/// order, and a consumer applying marks in that order reproduces the
/// later-overwrites-earlier layering of overlapping keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    words: Vec<String>,
}

impl KeywordSet {
    /// Create a keyword set from an ordered word list
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// The words in list order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Get a keyword by its index in the set
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Number of keywords in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set has no keywords
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(RESERVED_WORDS)
    }
}

/// A highlighted region of the buffer
///
/// `start` and `len` are in character offsets; `keyword` is the index of the
/// matched word in the [`KeywordSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub len: usize,
    pub keyword: usize,
}

impl HighlightSpan {
    /// Char offset one past the end of the span
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Scan the buffer for every keyword occurrence
///
/// For each keyword, in set order, every non-overlapping occurrence is
/// reported left to right (the scan resumes at match offset + keyword
/// length). Spans from different keywords may overlap each other in the
/// output; ordering is by keyword, then position. An empty buffer or a
/// buffer with no matches yields an empty span set. Always recompute after
/// a buffer mutation; spans are a pure function of buffer and keywords and
/// must never be carried across an edit.
pub fn scan(buffer: &str, keywords: &KeywordSet) -> Vec<HighlightSpan> {
    let mut spans = Vec::new();

    for (keyword, word) in keywords.words().iter().enumerate() {
        let len = word.chars().count();
        for occ in occurrences(buffer, word) {
            spans.push(HighlightSpan {
                start: occ.char_idx,
                len,
                keyword,
            });
        }
    }

    debug!(
        "Highlight scan: {} spans across {} keywords",
        spans.len(),
        keywords.len()
    );
    spans
}

/// Resolve overlapping spans to a per-character keyword attribution
///
/// Applies spans in output order, later spans overwriting earlier ones where
/// they intersect, which is exactly how the marks layer visually. The result
/// has one entry per character of the scanned buffer.
pub fn keyword_marks(buffer: &str, spans: &[HighlightSpan]) -> Vec<Option<usize>> {
    let mut marks = vec![None; buffer.chars().count()];

    for span in spans {
        for mark in marks.iter_mut().skip(span.start).take(span.len) {
            *mark = Some(span.keyword);
        }
    }

    marks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_reference_document() {
        let buffer = "<html><div>hi</div></html>";
        let keywords = KeywordSet::new(["html", "div"]);
        let spans = scan(buffer, &keywords);

        let html: Vec<usize> = spans.iter().filter(|s| s.keyword == 0).map(|s| s.start).collect();
        let div: Vec<usize> = spans.iter().filter(|s| s.keyword == 1).map(|s| s.start).collect();

        assert_eq!(html, vec![1, 21]);
        assert_eq!(div, vec![7, 15]);
    }

    #[test]
    fn test_scan_default_keywords() {
        let buffer = "<html><head><title>t</title></head><body><p>x</p></body></html>";
        let spans = scan(buffer, &KeywordSet::default());
        assert!(!spans.is_empty());

        // Every span lies within the buffer
        let chars = buffer.chars().count();
        assert!(spans.iter().all(|s| s.end() <= chars));
    }

    #[test]
    fn test_scan_is_idempotent() {
        let buffer = "<div><div></div>";
        let keywords = KeywordSet::default();
        assert_eq!(scan(buffer, &keywords), scan(buffer, &keywords));
    }

    #[test]
    fn test_scan_matches_substrings() {
        // Knowingly naive: "div" matches inside "divider"
        let spans = scan("divider", &KeywordSet::new(["div"]));
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, 0);
    }

    #[test]
    fn test_scan_is_case_sensitive() {
        assert!(scan("<DIV>", &KeywordSet::new(["div"])).is_empty());
    }

    #[test]
    fn test_scan_empty_buffer() {
        assert!(scan("", &KeywordSet::default()).is_empty());
    }

    #[test]
    fn test_scan_char_offsets() {
        // Multibyte character before the keyword
        let spans = scan("é<p>", &KeywordSet::new(["p"]));
        assert_eq!(spans[0].start, 2);
    }

    #[test]
    fn test_keyword_marks_later_overwrites_earlier() {
        // "tm" lies inside the "html" span; the later keyword's mark wins
        // where the two intersect
        let buffer = "html";
        let keywords = KeywordSet::new(["html", "tm"]);
        let spans = scan(buffer, &keywords);
        let marks = keyword_marks(buffer, &spans);

        assert_eq!(marks, vec![Some(0), Some(1), Some(1), Some(0)]);
    }

    #[test]
    fn test_keyword_marks_unmatched_chars() {
        let buffer = "x<p>y";
        let spans = scan(buffer, &KeywordSet::new(["p"]));
        let marks = keyword_marks(buffer, &spans);

        assert_eq!(marks[0], None);
        assert_eq!(marks[2], Some(0));
        assert_eq!(marks[4], None);
    }
}
