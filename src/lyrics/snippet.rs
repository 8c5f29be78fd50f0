//! Relevant-span locator
//!
//! Picks the window of lyric lines to preview for a search query:
//! the first line containing the query (case-insensitive) plus `radius`
//! lines of context on each side. When nothing matches, the window starts
//! at line 0 and has the same size a matched window would have.

/// Lines of context shown before and after the matched line.
pub const DEFAULT_CONTEXT_RADIUS: usize = 2;

/// A contiguous window of lyric lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// Index of the first line of the window in the source lyrics.
    pub start: usize,
    /// The lines of the window, in order.
    pub lines: Vec<String>,
    /// Index of the line that matched the query, if any.
    pub matched: Option<usize>,
}

impl Snippet {
    fn empty() -> Self {
        Self {
            start: 0,
            lines: Vec::new(),
            matched: None,
        }
    }

    /// Inclusive index of the last line. Equals `start` for an empty window.
    pub fn end(&self) -> usize {
        self.start + self.lines.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether `index` (in source line numbering) falls inside the window.
    pub fn contains(&self, index: usize) -> bool {
        !self.is_empty() && index >= self.start && index <= self.end()
    }
}

/// Index of the first line containing `query`, ignoring case.
///
/// An empty or whitespace-only query never matches.
pub fn find_match<S: AsRef<str>>(text: &[S], query: &str) -> Option<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    text.iter()
        .position(|line| line.as_ref().to_lowercase().contains(&needle))
}

/// Locate the snippet of `text` to show for `query`.
pub fn locate<S: AsRef<str>>(text: &[S], query: &str, radius: usize) -> Snippet {
    if text.is_empty() {
        return Snippet::empty();
    }
    let last = text.len() - 1;

    let matched = find_match(text, query);
    let (start, end) = match matched {
        Some(i) => (i.saturating_sub(radius), i.saturating_add(radius).min(last)),
        None => (0, radius.saturating_mul(2).min(last)),
    };

    Snippet {
        start,
        lines: text[start..=end]
            .iter()
            .map(|l| l.as_ref().to_string())
            .collect(),
        matched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("line {i}")).collect()
    }

    #[test]
    fn test_matches_first_line_and_clamps_start() {
        let text = [
            "I walk alone",
            "Thinking of you",
            "Love is all I need",
            "Night falls again",
        ];
        let s = locate(&text, "love", 2);
        assert_eq!(s.start, 0);
        assert_eq!(s.matched, Some(2));
        assert_eq!(s.lines, text.to_vec());
        assert_eq!(s.end(), 3);
    }

    #[test]
    fn test_empty_text() {
        let text: [&str; 0] = [];
        let s = locate(&text, "anything", 2);
        assert_eq!(s.start, 0);
        assert!(s.is_empty());
        assert_eq!(s.matched, None);
        assert_eq!(s.end(), 0);
    }

    #[test]
    fn test_empty_query_falls_back_to_head() {
        let text = numbered(10);
        let s = locate(&text, "", 2);
        assert_eq!(s.start, 0);
        assert_eq!(s.lines, text[0..5].to_vec());
        assert_eq!(s.matched, None);

        let blank = locate(&text, "   ", 2);
        assert_eq!(blank, s);
    }

    #[test]
    fn test_no_match_falls_back_to_head() {
        let text = numbered(10);
        let s = locate(&text, "chorus", 1);
        assert_eq!(s.start, 0);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_fallback_shorter_than_window() {
        let text = numbered(2);
        let s = locate(&text, "nope", 3);
        assert_eq!(s.start, 0);
        assert_eq!(s.end(), 1);
    }

    #[test]
    fn test_case_insensitive() {
        let text = ["hello", "i love you", "bye"];
        let s = locate(&text, "LOVE", 0);
        assert_eq!(s.matched, Some(1));
        assert_eq!(s.lines, vec!["i love you".to_string()]);
    }

    #[test]
    fn test_first_match_wins() {
        let text = ["a", "x stay", "b", "c", "stay", "d"];
        assert_eq!(find_match(&text, "stay"), Some(1));
    }

    #[test]
    fn test_centered_in_middle() {
        let text = numbered(20);
        let s = locate(&text, "line 10", 2);
        assert_eq!(s.start, 8);
        assert_eq!(s.end(), 12);
        assert_eq!(s.matched, Some(10));
    }

    #[test]
    fn test_clamps_at_end() {
        let text = numbered(6);
        let s = locate(&text, "line 5", 2);
        assert_eq!(s.start, 3);
        assert_eq!(s.end(), 5);
    }

    #[test]
    fn test_zero_radius_and_huge_radius() {
        let text = numbered(4);
        assert_eq!(locate(&text, "", 0).len(), 1);
        let s = locate(&text, "line 2", usize::MAX);
        assert_eq!(s.start, 0);
        assert_eq!(s.end(), 3);
    }

    #[test]
    fn test_window_always_in_bounds() {
        let queries = ["", "line", "line 0", "line 7", "missing", "LINE 3"];
        for n in 0..9 {
            let text = numbered(n);
            for q in queries {
                for radius in 0..5 {
                    let s = locate(&text, q, radius);
                    assert!(s.start <= s.end());
                    if n > 0 {
                        assert!(s.end() < n);
                        assert!(s.len() <= 2 * radius + 1);
                        assert_eq!(s.lines, text[s.start..=s.end()].to_vec());
                    }
                    if let Some(m) = s.matched {
                        assert!(s.contains(m));
                    }
                    assert_eq!(locate(&text, q, radius), s);
                }
            }
        }
    }

    #[test]
    fn test_contains() {
        let text = numbered(10);
        let s = locate(&text, "line 5", 1);
        assert!(!s.contains(3));
        assert!(s.contains(4));
        assert!(s.contains(6));
        assert!(!s.contains(7));
        let empty: [&str; 0] = [];
        assert!(!locate(&empty, "", 2).contains(0));
    }
}
