//! The plain-text report.
//!
//! The layout is fixed:
//!
//! ```text
//! characters: <n>
//! words: <n>
//! lines: <n>
//! <word>: <n>
//! ```
//!
//! with one line per top word, `\n` separators and no trailing newline.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::data::summary::Summary;
use crate::error::WordcountError;
use crate::Result;

/// Format `summary` as the plain-text report.
///
/// # Example
///
/// ```rust
/// use wordcountlib::{analyze_str, format_summary};
///
/// let report = format_summary(&analyze_str("Word word text"));
/// assert_eq!(report, "characters: 14\nwords: 3\nlines: 1\nword: 2\ntext: 1");
/// ```
pub fn format_summary(summary: &Summary) -> String {
    let mut lines = vec![
        format!("characters: {}", summary.characters),
        format!("words: {}", summary.words),
        format!("lines: {}", summary.lines),
    ];
    lines.extend(
        summary
            .top_words
            .iter()
            .map(|record| format!("{}: {}", record.word, record.count)),
    );
    lines.join("\n")
}

/// Write `content` to `path`, replacing any existing file.
///
/// The report goes to a temporary file in the same directory, which is
/// renamed over `path` only once fully written. On failure `path` is left as
/// it was and the temporary file is removed.
pub fn write_report(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    let to_error = |source| WordcountError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(to_error)?;
    // Temporary files are created owner-only; reports are ordinary files
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(to_error)?;
    }
    tmp.write_all(content.as_bytes()).map_err(to_error)?;
    tmp.flush().map_err(to_error)?;
    tmp.persist(path).map_err(|e| to_error(e.error))?;

    debug!(path = %path.display(), bytes = content.len(), "wrote report");
    Ok(())
}
