//! Lyrics search and preview
//!
//! This module provides:
//! - LRCLIB API client for searching lyrics
//! - Plain/LRC parser producing line-oriented lyrics documents
//! - The snippet locator that picks preview lines for a query

pub mod lrclib;
pub mod parser;
pub mod snippet;

pub use lrclib::{LrclibClient, LyricsRecord};
pub use parser::LyricsDocument;
pub use snippet::Snippet;

/// Snippet of `doc` for `query`, plus the clip offset in seconds when synced
pub fn preview(doc: &LyricsDocument, query: &str, radius: usize) -> (Snippet, Option<u64>) {
    let snippet = snippet::locate(&doc.texts(), query, radius);
    let start_secs = if snippet.is_empty() {
        None
    } else {
        doc.time_of(snippet.start).map(|ms| ms / 1000)
    };
    (snippet, start_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_synced_offset() {
        let doc = LyricsDocument::parse(
            "[00:01.00]intro\n[00:10.50]first verse\n[00:20.00]walk alone\n[00:30.00]outro",
            true,
        );
        let (snippet, start) = preview(&doc, "WALK", 1);
        assert_eq!(snippet.start, 1);
        assert_eq!(snippet.matched, Some(2));
        assert_eq!(start, Some(10));
    }

    #[test]
    fn test_preview_plain_has_no_offset() {
        let doc = LyricsDocument::parse("a\nb\nc", false);
        let (snippet, start) = preview(&doc, "b", 2);
        assert_eq!(snippet.len(), 3);
        assert_eq!(start, None);
    }

    #[test]
    fn test_preview_empty_document() {
        let (snippet, start) = preview(&LyricsDocument::default(), "x", 2);
        assert!(snippet.is_empty());
        assert_eq!(start, None);
    }
}
