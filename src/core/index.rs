//! The word-to-pages index: accumulation and rendering.
//!
//! `PageIndex` is built incrementally by the pipeline and consumed
//! once at end of input. Ordered containers (`BTreeMap` over words,
//! `BTreeSet` over pages) give the required output ordering — byte
//! order over words, ascending over pages — without a sort pass at
//! render time, and make both renderings fully deterministic.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use serde::Serialize;

use crate::core::error::{FolioError, Result};

/// Accumulated mapping from normalized word to the set of pages it
/// occurs on.
///
/// A page appears at most once per word no matter how many times the
/// word occurs on that page.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct PageIndex {
    entries: BTreeMap<String, BTreeSet<u64>>,
}

impl PageIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word` on `page`.
    ///
    /// Creates the word's entry if absent. Idempotent per
    /// (word, page) pair.
    pub fn record(&mut self, word: String, page: u64) {
        self.entries.entry(word).or_default().insert(page);
    }

    /// Number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no word has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pages recorded for `word`, if present.
    pub fn pages(&self, word: &str) -> Option<&BTreeSet<u64>> {
        self.entries.get(word)
    }

    /// Iterate entries in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<u64>)> {
        self.entries.iter()
    }

    /// Render the index as the classic back-of-book listing.
    ///
    /// One line per word: `<word>:\t<p1>,<p2>,...,<pn>\n`, words in
    /// ascending byte order, pages ascending, no trailing separator.
    /// An empty index renders zero bytes.
    pub fn render_text<W: Write>(&self, out: &mut W) -> Result<()> {
        for (word, pages) in &self.entries {
            let joined = pages
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(",");
            writeln!(out, "{word}:\t{joined}").map_err(FolioError::Write)?;
        }
        Ok(())
    }

    /// Render the index as a pretty-printed JSON object mapping each
    /// word to its sorted page array. Key order matches the text
    /// rendering.
    pub fn render_json<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        writeln!(out, "{json}").map_err(FolioError::Write)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(index: &PageIndex) -> String {
        let mut buf = Vec::new();
        index.render_text(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_record_creates_entry() {
        let mut index = PageIndex::new();
        index.record("hello".to_string(), 1);
        assert_eq!(index.len(), 1);
        assert_eq!(index.pages("hello").unwrap().len(), 1);
    }

    #[test]
    fn test_record_is_idempotent() {
        let mut index = PageIndex::new();
        index.record("hello".to_string(), 3);
        index.record("hello".to_string(), 3);
        index.record("hello".to_string(), 3);
        assert_eq!(index.pages("hello").unwrap().len(), 1);
    }

    #[test]
    fn test_empty_index_renders_nothing() {
        let index = PageIndex::new();
        assert_eq!(render_to_string(&index), "");
        assert!(index.is_empty());
    }

    #[test]
    fn test_render_single_word() {
        let mut index = PageIndex::new();
        index.record("alpha".to_string(), 2);
        assert_eq!(render_to_string(&index), "alpha:\t2\n");
    }

    #[test]
    fn test_render_joins_pages_without_trailing_comma() {
        let mut index = PageIndex::new();
        index.record("word".to_string(), 5);
        index.record("word".to_string(), 1);
        index.record("word".to_string(), 12);
        assert_eq!(render_to_string(&index), "word:\t1,5,12\n");
    }

    #[test]
    fn test_render_orders_words_by_byte_order() {
        let mut index = PageIndex::new();
        index.record("zebra".to_string(), 1);
        index.record("apple".to_string(), 1);
        index.record("a'b".to_string(), 1);
        // '\'' (0x27) sorts before any lowercase letter
        assert_eq!(
            render_to_string(&index),
            "a'b:\t1\napple:\t1\nzebra:\t1\n"
        );
    }

    #[test]
    fn test_render_json_matches_text_ordering() {
        let mut index = PageIndex::new();
        index.record("beta".to_string(), 2);
        index.record("alpha".to_string(), 1);
        index.record("alpha".to_string(), 4);

        let mut buf = Vec::new();
        index.render_json(&mut buf).unwrap();
        let json = String::from_utf8(buf).unwrap();

        let alpha_pos = json.find("\"alpha\"").unwrap();
        let beta_pos = json.find("\"beta\"").unwrap();
        assert!(alpha_pos < beta_pos);
        assert!(json.contains("1"));
        assert!(json.ends_with('\n'));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["alpha"], serde_json::json!([1, 4]));
        assert_eq!(parsed["beta"], serde_json::json!([2]));
    }

    #[test]
    fn test_render_surfaces_write_failure() {
        struct FailingWriter;
        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "sink closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut index = PageIndex::new();
        index.record("word".to_string(), 1);
        let err = index.render_text(&mut FailingWriter).unwrap_err();
        assert!(matches!(err, FolioError::Write(_)));
    }
}
