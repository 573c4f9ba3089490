//! High-level analysis API.
//!
//! This module wires the stages together: read, split lines, extract words,
//! select the top words.

use std::path::Path;

use tracing::debug;

use crate::query::ranking::{top_words, TOP_K};
use crate::source::reader::RawInput;
use crate::Result;

use super::lines::split_lines;
use super::summary::Summary;
use super::words::{extract_words, WordTable};

/// Analyze an input that has already been read.
pub fn analyze_input(input: &RawInput) -> Summary {
    let characters = input.char_count();
    let text = input.decode();

    let lines = split_lines(text.as_str());
    debug!(lines = lines.count(), "split lines");

    let mut table = WordTable::new();
    let words = extract_words(&lines, &mut table);
    debug!(words, distinct = table.len(), "extracted words");

    Summary {
        characters,
        words,
        lines: lines.count(),
        top_words: top_words(&table, TOP_K),
    }
}

/// Analyze raw bytes.
///
/// # Example
///
/// ```rust
/// use wordcountlib::analyze_bytes;
///
/// let summary = analyze_bytes(b"Hello file123 FILE123\n123file is not valid\n");
/// assert_eq!(summary.characters, 43);
/// assert_eq!(summary.lines, 2);
/// assert_eq!(summary.words, 4);
/// assert_eq!(summary.top_words[0].word, "file123");
/// assert_eq!(summary.top_words[0].count, 2);
/// ```
pub fn analyze_bytes(bytes: &[u8]) -> Summary {
    analyze_input(&RawInput::from_bytes(bytes))
}

/// Analyze a string.
pub fn analyze_str(text: &str) -> Summary {
    analyze_bytes(text.as_bytes())
}

/// Read and analyze a file.
///
/// # Example
///
/// ```rust
/// use wordcountlib::analyze_file;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("input.txt");
/// fs::write(&path, "word word text\n").unwrap();
///
/// let summary = analyze_file(&path).unwrap();
/// assert_eq!(summary.words, 3);
/// assert_eq!(summary.top_words.len(), 2);
/// ```
pub fn analyze_file(path: impl AsRef<Path>) -> Result<Summary> {
    let input = RawInput::read(path)?;
    Ok(analyze_input(&input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::words::WordRecord;
    use crate::error::WordcountError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_end_to_end_text() {
        let text = "Hello file123 FILE123\n123file is not valid\n";
        let summary = analyze_str(text);

        assert_eq!(summary.characters, text.len() as u64);
        assert_eq!(summary.lines, 2);
        // hello, file123 x2, valid
        assert_eq!(summary.words, 4);
        assert_eq!(
            summary.top_words,
            vec![
                WordRecord::new("file123", 2),
                WordRecord::new("hello", 1),
                WordRecord::new("valid", 1),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let summary = analyze_bytes(b"");
        assert_eq!(summary, Summary::new());
    }

    #[test]
    fn test_blank_lines_count_characters_only() {
        let summary = analyze_str("ab\n\n");
        assert_eq!(summary.characters, 4);
        assert_eq!(summary.lines, 1);
        assert_eq!(summary.words, 0);

        let summary = analyze_str("   \n\t\n");
        assert_eq!(summary.characters, 6);
        assert_eq!(summary.lines, 0);
        assert_eq!(summary.words, 0);
        assert!(summary.top_words.is_empty());
    }

    #[test]
    fn test_crlf_input() {
        let summary = analyze_str("alpha beta\r\n\r\ngamma\r\n");
        assert_eq!(summary.characters, 21);
        assert_eq!(summary.lines, 2);
        assert_eq!(summary.words, 3);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes = b"word\xffword text\n";
        let summary = analyze_bytes(bytes);
        assert_eq!(summary.characters, bytes.len() as u64);
        assert_eq!(summary.words, 3);
        assert_eq!(summary.top_words[0], WordRecord::new("word", 2));
    }

    #[test]
    fn test_top_words_limited_to_ten() {
        let text: String = (0..15)
            .map(|i| {
                let word = format!("word{}", (b'a' + i as u8) as char);
                vec![word; i + 1].join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n");
        let summary = analyze_str(&text);

        assert_eq!(summary.lines, 15);
        assert_eq!(summary.words, (1..=15).sum::<u64>());
        assert_eq!(summary.top_words.len(), 10);
        assert_eq!(summary.top_words[0], WordRecord::new("wordo", 15));
        assert_eq!(summary.top_words[9], WordRecord::new("wordf", 6));
    }

    #[test]
    fn test_idempotent() {
        let text = b"Same input twice, same output twice.\nTwice twice TWICE\n";
        assert_eq!(analyze_bytes(text), analyze_bytes(text));
    }

    #[test]
    fn test_analyze_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "File file FILE\n").unwrap();

        let summary = analyze_file(&path).unwrap();
        assert_eq!(summary.characters, 15);
        assert_eq!(summary.words, 3);
        assert_eq!(summary.top_words, vec![WordRecord::new("file", 3)]);
    }

    #[test]
    fn test_analyze_missing_file() {
        let dir = tempdir().unwrap();
        let err = analyze_file(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, WordcountError::PathNotFound(_)));
    }
}
