//! Error types for wordcountlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading input or writing a report
#[derive(Error, Debug)]
pub enum WordcountError {
    /// Failed to read the input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the report file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),
}
