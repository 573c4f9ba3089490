//! Source loading: get the text to analyze.
//!
//! This module handles the first stage of the pipeline - reading the input
//! file as raw bytes and decoding it. It provides:
//!
//! - **RawInput**: The bytes as read, which also give the character count
//! - **DecodedText**: The UTF-8 view used by the later stages
//!
//! ## Example
//!
//! ```rust,ignore
//! use wordcountlib::source::RawInput;
//!
//! let input = RawInput::read("input.txt")?;
//! let characters = input.char_count();
//! let text = input.decode();
//! ```

pub mod reader;

pub use reader::{DecodedText, RawInput};
