//! Query processing: rank words and select the most frequent.
//!
//! This module handles the third stage of the pipeline - turning the word
//! frequency table into an ordered list. It provides:
//!
//! - **rank**: The ordering used everywhere words are compared
//! - **top_words**: Selection of the `k` best-ranked words
//!
//! ## Example
//!
//! ```rust,ignore
//! use wordcountlib::query::{top_words, TOP_K};
//!
//! let top = top_words(&table, TOP_K);
//! ```

pub mod ranking;

pub use ranking::{rank, top_words, TOP_K};
