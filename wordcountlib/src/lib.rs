//! # wordcountlib
//!
//! Character, word and line statistics for a text file, with a ranked list
//! of the ten most frequent words.
//!
//! ## Overview
//!
//! Analysis is a single pass through four stages:
//!
//! - **source**: Read the input as raw bytes and decode it as UTF-8
//! - **data**: Split into valid lines and extract valid words
//! - **query**: Rank words and select the top ten
//! - **output**: Format the summary as a report
//!
//! ## Counting rules
//!
//! - **characters**: Bytes in the input, so a multi-byte character counts once per byte
//! - **lines**: Lines (split on `\n`) with at least one non-whitespace character
//! - **words**: Occurrences of tokens that start with four ASCII letters and
//!   continue with ASCII letters or digits, case-insensitively
//! - **top words**: Highest count first, ties broken by ascending string order
//!
//! ## Example
//!
//! ```rust
//! use wordcountlib::{analyze_file, format_summary, write_report};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let input = dir.path().join("input.txt");
//! fs::write(&input, "windows95 windows98 windows2000\n\n").unwrap();
//!
//! let summary = analyze_file(&input).unwrap();
//! let report = format_summary(&summary);
//! assert_eq!(
//!     report,
//!     "characters: 33\nwords: 3\nlines: 1\nwindows2000: 1\nwindows95: 1\nwindows98: 1"
//! );
//!
//! let output = dir.path().join("output.txt");
//! write_report(&output, &report).unwrap();
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{
    analyze_bytes, analyze_file, analyze_input, analyze_str, extract_line, extract_words,
    is_valid_word, split_lines, Summary, ValidLines, WordRecord, WordTable, MIN_WORD_LEN,
};
pub use error::WordcountError;
pub use output::{format_summary, write_report};
pub use query::{rank, top_words, TOP_K};
pub use source::{DecodedText, RawInput};

/// Result type for wordcountlib operations
pub type Result<T> = std::result::Result<T, WordcountError>;
