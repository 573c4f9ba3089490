//! # wordcount
//!
//! A CLI tool that counts characters, words and lines in a text file and
//! reports the ten most frequent words.
//!
//! ## Overview
//!
//! wordcount is built on top of wordcountlib. It reads one input file,
//! analyzes it and writes the report to an output file.
//!
//! ## Usage
//!
//! ```bash
//! # Write the report to output.txt
//! wordcount input.txt output.txt
//!
//! # Write JSON instead of the plain report
//! wordcount input.txt output.json --format json
//!
//! # Also print the report to the terminal
//! wordcount input.txt output.txt --print
//!
//! # Log each pipeline stage
//! wordcount input.txt output.txt -v
//! RUST_LOG=wordcountlib=debug wordcount input.txt output.txt
//! ```
//!
//! ## Report format
//!
//! ```text
//! characters: 43
//! words: 4
//! lines: 2
//! file123: 2
//! hello: 1
//! valid: 1
//! ```

mod render;

use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordcountlib::{analyze_file, write_report};

use crate::render::{render, stylize, OutputFormat};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("wordcount")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Count characters, words and lines, and report the ten most frequent words")
        .arg(
            Arg::new("input")
                .required(true)
                .help("Text file to analyze"),
        )
        .arg(
            Arg::new("output")
                .required(true)
                .help("File to write the report to"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Report format"),
        )
        .arg(
            Arg::new("print")
                .short('p')
                .long("print")
                .action(ArgAction::SetTrue)
                .help("Also print the report to stdout"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log pipeline stages to stderr"),
        )
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Analyze the input and write the report
fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("missing input path")?;
    let output = matches
        .get_one::<String>("output")
        .context("missing output path")?;
    let format: OutputFormat = matches
        .get_one::<String>("format")
        .map(|s| s.parse::<OutputFormat>())
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();

    debug!(%input, %output, ?format, "starting");

    let summary = analyze_file(input)?;
    let report = render(&summary, format).context("failed to serialize summary")?;

    write_report(output, &report)?;

    if matches.get_flag("print") {
        let shown = match format {
            OutputFormat::Text => stylize(&report),
            OutputFormat::Json => report,
        };
        println!("{}", shown);
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_requires_two_paths() {
        let result = build_command().try_get_matches_from(["wordcount", "input.txt"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_defaults() {
        let matches = build_command()
            .try_get_matches_from(["wordcount", "in.txt", "out.txt"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("input").unwrap(), "in.txt");
        assert_eq!(matches.get_one::<String>("output").unwrap(), "out.txt");
        assert_eq!(matches.get_one::<String>("format").unwrap(), "text");
        assert!(!matches.get_flag("print"));
        assert!(!matches.get_flag("verbose"));
    }

    #[test]
    fn test_format_values_all_parse() {
        for value in ["text", "json"] {
            let matches = build_command()
                .try_get_matches_from(["wordcount", "a", "b", "--format", value])
                .unwrap();
            let format = matches.get_one::<String>("format").unwrap();
            assert!(format.parse::<OutputFormat>().is_ok());
        }
        let result =
            build_command().try_get_matches_from(["wordcount", "a", "b", "--format", "txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result =
            build_command().try_get_matches_from(["wordcount", "a", "b", "--format", "csv"]);
        assert!(result.is_err());
    }
}
