//! Search and Replace
//!
//! Plain-substring text operations: first-match find and replace-all.
//! Matching is case-sensitive, left-to-right and non-overlapping; there is
//! no regex support and no wraparound. The same occurrence scanner drives
//! find, replace-all and the keyword highlighter.

use std::ops::Range;
use tracing::debug;

/// A single non-overlapping occurrence of a needle in a haystack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Occurrence {
    /// Start of the match in character offsets
    pub char_idx: usize,
    /// Start of the match in byte offsets
    pub byte_idx: usize,
}

/// Iterator over non-overlapping occurrences, leftmost first
///
/// After each match the scan resumes at match start + needle length, so a
/// needle never matches inside a previous match. An empty needle yields
/// nothing.
pub(crate) struct Occurrences<'h, 'n> {
    haystack: &'h str,
    needle: &'n str,
    needle_chars: usize,
    byte_pos: usize,
    char_pos: usize,
}

pub(crate) fn occurrences<'h, 'n>(haystack: &'h str, needle: &'n str) -> Occurrences<'h, 'n> {
    Occurrences {
        haystack,
        needle,
        needle_chars: needle.chars().count(),
        byte_pos: 0,
        char_pos: 0,
    }
}

impl<'h, 'n> Iterator for Occurrences<'h, 'n> {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Occurrence> {
        if self.needle.is_empty() || self.byte_pos > self.haystack.len() {
            return None;
        }

        let rel = self.haystack[self.byte_pos..].find(self.needle)?;
        let byte_idx = self.byte_pos + rel;
        let char_idx = self.char_pos + self.haystack[self.byte_pos..byte_idx].chars().count();

        self.byte_pos = byte_idx + self.needle.len();
        self.char_pos = char_idx + self.needle_chars;

        Some(Occurrence { char_idx, byte_idx })
    }
}

/// Outcome of a find request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindOutcome {
    /// Leftmost match; the caller selects `[start, end)` in the buffer view
    Found {
        /// Char offset of the first matched character
        start: usize,
        /// Char offset one past the last matched character
        end: usize,
    },
    /// The query does not occur in the buffer; reportable as "text not found"
    NotFound,
    /// Empty query; a no-op, not a failed search
    EmptyQuery,
}

impl FindOutcome {
    /// Selection range for a successful find
    pub fn selection(&self) -> Option<Range<usize>> {
        match self {
            FindOutcome::Found { start, end } => Some(*start..*end),
            _ => None,
        }
    }
}

/// Find the first occurrence of `query` in `buffer`
pub fn find(buffer: &str, query: &str) -> FindOutcome {
    if query.is_empty() {
        return FindOutcome::EmptyQuery;
    }

    match occurrences(buffer, query).next() {
        Some(occ) => {
            let len = query.chars().count();
            FindOutcome::Found {
                start: occ.char_idx,
                end: occ.char_idx + len,
            }
        }
        None => FindOutcome::NotFound,
    }
}

/// Result of a replace-all pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceOutcome {
    /// The full new buffer text; the caller assigns it back wholesale
    pub buffer: String,
    /// Number of occurrences replaced
    pub count: usize,
}

/// Replace every occurrence of `search` with `replacement`
///
/// Occurrences are found with the same non-overlapping leftmost scan as the
/// highlighter. An empty search string returns the buffer unchanged; it
/// never inserts the replacement between every character.
pub fn replace_all(buffer: &str, search: &str, replacement: &str) -> ReplaceOutcome {
    if search.is_empty() {
        return ReplaceOutcome {
            buffer: buffer.to_owned(),
            count: 0,
        };
    }

    let mut out = String::with_capacity(buffer.len());
    let mut last = 0;
    let mut count = 0;

    for occ in occurrences(buffer, search) {
        out.push_str(&buffer[last..occ.byte_idx]);
        out.push_str(replacement);
        last = occ.byte_idx + search.len();
        count += 1;
    }
    out.push_str(&buffer[last..]);

    debug!("Replaced {} occurrences of {:?}", count, search);

    ReplaceOutcome { buffer: out, count }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_match() {
        let outcome = find("foo bar foo", "foo");
        assert_eq!(outcome, FindOutcome::Found { start: 0, end: 3 });
        assert_eq!(outcome.selection(), Some(0..3));
    }

    #[test]
    fn test_find_not_found() {
        assert_eq!(find("foo bar", "baz"), FindOutcome::NotFound);
        assert_eq!(find("", "baz"), FindOutcome::NotFound);
    }

    #[test]
    fn test_find_empty_query_is_noop() {
        assert_eq!(find("foo bar", ""), FindOutcome::EmptyQuery);
        assert_eq!(find("", ""), FindOutcome::EmptyQuery);
    }

    #[test]
    fn test_find_is_case_sensitive() {
        assert_eq!(find("Foo", "foo"), FindOutcome::NotFound);
    }

    #[test]
    fn test_find_reports_char_offsets() {
        // "é" is two bytes but one character
        let outcome = find("é<div>", "div");
        assert_eq!(outcome, FindOutcome::Found { start: 2, end: 5 });
    }

    #[test]
    fn test_replace_all() {
        let outcome = replace_all("foo bar foo", "foo", "baz");
        assert_eq!(outcome.buffer, "baz bar baz");
        assert_eq!(outcome.count, 2);
    }

    #[test]
    fn test_replace_all_empty_search_unchanged() {
        let outcome = replace_all("foo bar", "", "x");
        assert_eq!(outcome.buffer, "foo bar");
        assert_eq!(outcome.count, 0);
    }

    #[test]
    fn test_replace_all_empty_replacement() {
        let outcome = replace_all("a-b-c", "-", "");
        assert_eq!(outcome.buffer, "abc");
        assert_eq!(outcome.count, 2);
    }

    #[test]
    fn test_replace_all_removes_every_occurrence() {
        let outcome = replace_all("xxxx", "xx", "y");
        assert_eq!(outcome.buffer, "yy");
        assert_eq!(outcome.count, 2);

        // Idempotent once no occurrences remain
        let again = replace_all(&outcome.buffer, "xx", "y");
        assert_eq!(again.buffer, "yy");
        assert_eq!(again.count, 0);
    }

    #[test]
    fn test_replace_all_replacement_containing_search() {
        // The scan runs over the original text, so a replacement that
        // contains the search string does not recurse
        let outcome = replace_all("aba", "a", "aa");
        assert_eq!(outcome.buffer, "aabaa");
        assert_eq!(outcome.count, 2);
    }

    #[test]
    fn test_occurrences_are_non_overlapping() {
        let hits: Vec<usize> = occurrences("aaa", "aa").map(|o| o.char_idx).collect();
        assert_eq!(hits, vec![0]);
    }
}
