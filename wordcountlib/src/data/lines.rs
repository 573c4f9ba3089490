//! Line splitting.
//!
//! Text is split on `\n` only. Each segment is trimmed, and a segment counts
//! as a valid line when something remains. A `\r` left over from CRLF line
//! endings is whitespace and disappears with the trim.

/// The trimmed, non-empty lines of a text, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidLines<'a> {
    lines: Vec<&'a str>,
}

impl<'a> ValidLines<'a> {
    /// Number of valid lines.
    pub fn count(&self) -> u64 {
        self.lines.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the trimmed lines.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().copied()
    }
}

/// Split `text` into valid lines.
///
/// # Example
///
/// ```rust
/// use wordcountlib::split_lines;
///
/// let lines = split_lines("  first \n\t\n\nsecond\r\n");
/// assert_eq!(lines.count(), 2);
/// assert_eq!(lines.iter().collect::<Vec<_>>(), vec!["first", "second"]);
/// ```
pub fn split_lines(text: &str) -> ValidLines<'_> {
    let lines = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    ValidLines { lines }
}
