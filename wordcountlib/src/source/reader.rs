//! Reading raw input and decoding it to text.
//!
//! The character count is taken from the raw bytes before decoding, so it is
//! the same whether or not the input is valid UTF-8.

use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::WordcountError;
use crate::Result;

/// The raw bytes of an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    bytes: Vec<u8>,
}

impl RawInput {
    /// Read the whole file at `path`.
    ///
    /// A missing file is reported as [`WordcountError::PathNotFound`]; any other
    /// failure as [`WordcountError::FileRead`]. The file handle is closed before
    /// this returns.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => WordcountError::PathNotFound(path.to_path_buf()),
            _ => WordcountError::FileRead {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read input");
        Ok(Self { bytes })
    }

    /// Wrap bytes that are already in memory.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of characters, counted as raw bytes.
    ///
    /// Multi-byte sequences are not decoded: a three-byte CJK character counts
    /// as three.
    pub fn char_count(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Decode as UTF-8, substituting U+FFFD for invalid sequences.
    pub fn decode(&self) -> DecodedText<'_> {
        DecodedText::new(&self.bytes)
    }
}

/// Text decoded from a [`RawInput`].
///
/// Borrows from the input when it is valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText<'a> {
    text: Cow<'a, str>,
}

impl<'a> DecodedText<'a> {
    /// Decode `bytes`, replacing invalid sequences.
    pub fn new(bytes: &'a [u8]) -> Self {
        let text = String::from_utf8_lossy(bytes);
        if let Cow::Owned(_) = text {
            warn!("input is not valid UTF-8; invalid sequences were replaced");
        }
        Self { text }
    }

    /// Whether any replacement characters were substituted while decoding.
    pub fn is_lossy(&self) -> bool {
        matches!(self.text, Cow::Owned(_))
    }

    /// The decoded text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_char_count_is_byte_length() {
        let input = RawInput::from_bytes("ab\n\n");
        assert_eq!(input.char_count(), 4);
    }

    #[test]
    fn test_char_count_counts_multibyte_as_bytes() {
        // "中" is three bytes in UTF-8
        let input = RawInput::from_bytes("中a");
        assert_eq!(input.char_count(), 4);
    }

    #[test]
    fn test_empty_input() {
        let input = RawInput::from_bytes(Vec::new());
        assert_eq!(input.char_count(), 0);
        assert_eq!(input.decode().as_str(), "");
    }

    #[test]
    fn test_decode_valid_utf8_borrows() {
        let input = RawInput::from_bytes("hello world");
        let text = input.decode();
        assert_eq!(text.as_str(), "hello world");
        assert!(!text.is_lossy());
    }

    #[test]
    fn test_decode_invalid_utf8_replaces() {
        let input = RawInput::from_bytes(vec![b'a', b'b', 0xff, b'c']);
        let text = input.decode();
        assert!(text.is_lossy());
        assert_eq!(text.as_str(), "ab\u{fffd}c");
        // Character count still comes from the raw bytes
        assert_eq!(input.char_count(), 4);
    }

    #[test]
    fn test_read_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "Hello file123\n").unwrap();

        let input = RawInput::read(&path).unwrap();
        assert_eq!(input.as_bytes(), b"Hello file123\n");
        assert_eq!(input.char_count(), 14);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = RawInput::read(&path).unwrap_err();
        assert!(matches!(err, WordcountError::PathNotFound(p) if p == path));
    }

    #[test]
    fn test_read_directory_fails() {
        let dir = tempdir().unwrap();

        let err = RawInput::read(dir.path()).unwrap_err();
        assert!(matches!(err, WordcountError::FileRead { .. }));
    }
}
