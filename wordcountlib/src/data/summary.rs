//! The result of one analysis run.

use serde::{Deserialize, Serialize};

use super::words::WordRecord;

/// Aggregate counts plus the ranked top words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Input size in bytes
    pub characters: u64,
    /// Total valid word occurrences
    pub words: u64,
    /// Number of lines containing non-whitespace
    pub lines: u64,
    /// Most frequent words, best first (at most ten)
    pub top_words: Vec<WordRecord>,
}

impl Summary {
    /// Create a new empty summary.
    pub fn new() -> Self {
        Self::default()
    }
}
