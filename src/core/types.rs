//! Shared types for the indexing pipeline.

use serde::Serialize;

/// Statistics from a completed pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    /// Input lines consumed
    pub lines_read: u64,

    /// Pages spanned by the input (0 for empty input)
    pub pages: u64,

    /// Distinct normalized words in the index
    pub words: usize,

    /// Raw whitespace-delimited tokens seen
    pub tokens_seen: u64,

    /// Tokens the normalizer rejected
    pub tokens_rejected: u64,

    /// Wall-clock time spent consuming input
    pub duration_ms: u64,
}
