//! Indexing pipeline orchestration.
//!
//! Coordinates the end-to-end indexing workflow:
//! 1. Read input line by line
//! 2. Advance the pager once per line
//! 3. Normalize each whitespace-delimited token
//! 4. Record accepted words against the current page
//!
//! The whole input is consumed before anything is rendered; a read
//! failure aborts the run and no index is handed out.

use std::io::BufRead;
use std::time::Instant;

use crate::core::error::{FolioError, Result};
use crate::core::index::PageIndex;
use crate::core::normalize::normalize;
use crate::core::pager::Pager;
use crate::core::types::IndexStats;

/// Drives one batch indexing run
#[derive(Debug, Clone)]
pub struct Pipeline {
    lines_per_page: u64,
}

impl Pipeline {
    /// Create a pipeline with the given page height.
    pub fn new(lines_per_page: u64) -> Self {
        Self { lines_per_page }
    }

    /// Consume `input` to exhaustion and return the finished index
    /// plus run statistics.
    ///
    /// Lines are newline-delimited; a final line without a trailing
    /// newline still counts, and a trailing `\r` is stripped. The
    /// first read error is fatal: it propagates as
    /// [`FolioError::Read`] and the partially built index is
    /// discarded with it.
    pub fn run<R: BufRead>(&self, input: R) -> Result<(PageIndex, IndexStats)> {
        let start = Instant::now();

        let mut pager = Pager::new(self.lines_per_page);
        let mut index = PageIndex::new();
        let mut lines_read = 0u64;
        let mut tokens_seen = 0u64;
        let mut tokens_rejected = 0u64;

        for line in input.lines() {
            let line = line.map_err(FolioError::Read)?;
            let page = pager.advance();
            lines_read += 1;

            for token in line.split_whitespace() {
                tokens_seen += 1;
                match normalize(token) {
                    Some(word) => index.record(word, page),
                    None => tokens_rejected += 1,
                }
            }
        }

        let stats = IndexStats {
            lines_read,
            pages: if lines_read == 0 { 0 } else { pager.current_page() },
            words: index.len(),
            tokens_seen,
            tokens_rejected,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            "Indexing complete: {} lines over {} pages, {} words \
             ({} of {} tokens rejected) in {}ms",
            stats.lines_read,
            stats.pages,
            stats.words,
            stats.tokens_rejected,
            stats.tokens_seen,
            stats.duration_ms
        );

        Ok((index, stats))
    }
}
