//! Core data: lines, words and the analysis result.
//!
//! This module handles the second stage of the pipeline - turning decoded
//! text into counts. It provides:
//!
//! - **Lines**: Splitting text into trimmed, non-blank lines
//! - **Words**: The word rule and the frequency table
//! - **Summary**: The aggregate result of a run
//! - **Counter**: Entry points that run the whole pipeline

pub mod counter;
pub mod lines;
pub mod summary;
pub mod words;

pub use counter::{analyze_bytes, analyze_file, analyze_input, analyze_str};
pub use lines::{split_lines, ValidLines};
pub use summary::Summary;
pub use words::{
    extract_line, extract_words, is_valid_word, WordRecord, WordTable, MIN_WORD_LEN,
};
