//! Ranking of words by frequency.
//!
//! Words are ordered by descending count, then by ascending byte-wise string
//! comparison. Words in a table are unique, so no two records compare equal
//! and the order is total.

use std::cmp::Ordering;

use tracing::debug;

use crate::data::words::{WordRecord, WordTable};

/// Number of words reported.
pub const TOP_K: usize = 10;

/// Compare two records: higher count first, then lexicographically smaller word.
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use wordcountlib::{rank, WordRecord};
///
/// let a = WordRecord::new("windows2000", 2);
/// let b = WordRecord::new("windows95", 2);
/// assert_eq!(rank(&a, &b), Ordering::Less);
/// assert_eq!(rank(&WordRecord::new("zebra", 3), &a), Ordering::Less);
/// ```
pub fn rank(a: &WordRecord, b: &WordRecord) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

impl Ord for WordRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        rank(self, other)
    }
}

impl PartialOrd for WordRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Select the `k` highest-ranked words from `table`, best first.
///
/// Returns fewer than `k` records when the table holds fewer distinct words.
pub fn top_words(table: &WordTable, k: usize) -> Vec<WordRecord> {
    let mut records = table.records();
    if records.len() > k {
        if k == 0 {
            return Vec::new();
        }
        records.select_nth_unstable_by(k - 1, rank);
        records.truncate(k);
    }
    records.sort_unstable_by(rank);
    debug!(
        distinct = table.len(),
        selected = records.len(),
        "selected top words"
    );
    records
}
