//! Word extraction and classification.
//!
//! Each valid line is lower-cased and split on runs of characters outside
//! `[a-z0-9]`. A candidate token is a word when:
//!
//! - it is at least [`MIN_WORD_LEN`] characters long
//! - its first [`MIN_WORD_LEN`] characters are ASCII letters
//! - every following character is an ASCII letter or digit
//!
//! So `file123` is a word, `123file` is not, and `File`, `file` and `FILE`
//! are all the word `file`.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::lines::ValidLines;

/// Number of leading letters a word must have.
pub const MIN_WORD_LEN: usize = 4;

fn delimiter() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("word delimiter pattern is valid"))
}

/// Check a lower-cased token against the word rule.
///
/// Upper-case letters are accepted too, so the check does not depend on the
/// caller having folded case first.
///
/// # Example
///
/// ```rust
/// use wordcountlib::is_valid_word;
///
/// assert!(is_valid_word("abcd"));
/// assert!(is_valid_word("file123"));
/// assert!(!is_valid_word("abc1"));
/// assert!(!is_valid_word("123file"));
/// ```
pub fn is_valid_word(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() >= MIN_WORD_LEN
        && bytes[..MIN_WORD_LEN].iter().all(u8::is_ascii_alphabetic)
        && bytes[MIN_WORD_LEN..].iter().all(u8::is_ascii_alphanumeric)
}

/// A word and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub count: u64,
}

impl WordRecord {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Occurrence counts keyed by lower-cased word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTable {
    counts: HashMap<String, u64>,
}

impl WordTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word`.
    pub fn record(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_owned(), 1);
            }
        }
    }

    /// Occurrences of `word`, or 0 if it was never seen.
    pub fn count_of(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all occurrence counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate over `(word, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Materialize every entry as a [`WordRecord`], unordered.
    pub fn records(&self) -> Vec<WordRecord> {
        self.iter()
            .map(|(word, count)| WordRecord::new(word, count))
            .collect()
    }
}

/// Extract the words of one line into `table`.
///
/// Returns the number of word occurrences found.
pub fn extract_line(line: &str, table: &mut WordTable) -> u64 {
    let lowered = line.to_ascii_lowercase();
    let mut found = 0;
    for token in delimiter().split(&lowered) {
        if is_valid_word(token) {
            table.record(token);
            found += 1;
        }
    }
    found
}

/// Extract the words of every line into `table`.
///
/// Returns the total number of word occurrences, not the number of distinct
/// words.
pub fn extract_words(lines: &ValidLines<'_>, table: &mut WordTable) -> u64 {
    lines.iter().map(|line| extract_line(line, table)).sum()
}
