//! Rendering a summary for the report file and the terminal

use std::str::FromStr;

use console::Style;
use wordcountlib::{format_summary, Summary};

/// Report format written to the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `characters: N` style lines
    #[default]
    Text,
    /// Pretty-printed JSON of the summary
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Render `summary` in the requested format.
pub fn render(summary: &Summary, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(format_summary(summary)),
        OutputFormat::Json => serde_json::to_string_pretty(summary),
    }
}

/// Style a text report for the terminal: count labels bold, words cyan.
///
/// Styling is dropped automatically when stdout is not a terminal.
pub fn stylize(report: &str) -> String {
    let label = Style::new().bold();
    let word = Style::new().cyan();

    report
        .lines()
        .enumerate()
        .map(|(i, line)| match line.split_once(": ") {
            Some((name, value)) if i < 3 => format!("{}: {}", label.apply_to(name), value),
            Some((name, value)) => format!("{}: {}", word.apply_to(name), value),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
